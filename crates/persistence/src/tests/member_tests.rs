// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::tests::helpers::{member_record, test_persistence};
use crate::{MemberData, Persistence, PersistenceError};

#[test]
fn test_create_and_fetch_member() {
    let mut persistence: Persistence = test_persistence();

    let record = member_record("idp-7", "MBR-000007", "jane@example.com");
    persistence.create_member(&record).unwrap();

    let member: MemberData = persistence
        .get_member_by_id("idp-7")
        .unwrap()
        .expect("Member should exist");

    assert_eq!(member.member_id, "idp-7");
    assert_eq!(member.code, "MBR-000007");
    assert_eq!(member.email, "jane@example.com");
    assert_eq!(member.date_of_birth, "2008-03-14");
    assert_eq!(member.gender, "female");
    assert_eq!(member.jersey_number, Some(9));
    assert_eq!(member.team_id, None);
    assert!(member.must_reset_credential);
}

#[test]
fn test_member_can_reference_a_team() {
    let mut persistence: Persistence = test_persistence();

    let team_id: i64 = persistence.create_team("U10", "Under 10").unwrap();

    let mut record = member_record("idp-7", "MBR-000007", "jane@example.com");
    record.team_id = Some(team_id);
    persistence.create_member(&record).unwrap();

    let member: MemberData = persistence.get_member_by_id("idp-7").unwrap().unwrap();
    assert_eq!(member.team_id, Some(team_id));
}

#[test]
fn test_duplicate_member_id_is_a_unique_violation() {
    let mut persistence: Persistence = test_persistence();

    persistence
        .create_member(&member_record("idp-7", "MBR-000007", "jane@example.com"))
        .unwrap();

    let result: Result<(), PersistenceError> =
        persistence.create_member(&member_record("idp-7", "MBR-000008", "other@example.com"));

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_duplicate_member_email_is_a_unique_violation() {
    let mut persistence: Persistence = test_persistence();

    persistence
        .create_member(&member_record("idp-7", "MBR-000007", "shared@example.com"))
        .unwrap();

    let result: Result<(), PersistenceError> =
        persistence.create_member(&member_record("idp-8", "MBR-000008", "shared@example.com"));

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_duplicate_member_code_is_a_unique_violation() {
    let mut persistence: Persistence = test_persistence();

    persistence
        .create_member(&member_record("idp-7", "MBR-000007", "jane@example.com"))
        .unwrap();

    let result: Result<(), PersistenceError> =
        persistence.create_member(&member_record("idp-8", "MBR-000007", "other@example.com"));

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_list_members_is_ordered_by_display_name() {
    let mut persistence: Persistence = test_persistence();

    let mut zoe = member_record("idp-1", "MBR-000001", "zoe@example.com");
    zoe.display_name = String::from("Zoe");
    let mut amy = member_record("idp-2", "MBR-000002", "amy@example.com");
    amy.display_name = String::from("Amy");

    persistence.create_member(&zoe).unwrap();
    persistence.create_member(&amy).unwrap();

    let members: Vec<MemberData> = persistence.list_members().unwrap();

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].display_name, "Amy");
    assert_eq!(members[1].display_name, "Zoe");
}
