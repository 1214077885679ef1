// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use club_roster_persistence::Persistence;

use crate::error::ApiError;
use crate::handlers::{create_team, import_members, list_import_audit, list_members, list_teams};
use crate::request_response::{CreateTeamRequest, ImportMembersRequest, ImportMembersResponse};
use crate::tests::helpers::{
    admin_actor, row_with_team, row_without_email, staff_actor, test_authority, test_persistence,
    valid_row,
};

fn import_request(rows: Vec<club_roster_domain::ImportRow>) -> ImportMembersRequest {
    ImportMembersRequest {
        source_file: String::from("roster.csv"),
        rows,
    }
}

#[test]
fn test_import_rejects_empty_batch() {
    let mut persistence: Persistence = test_persistence();
    let authority = test_authority();

    let result = import_members(
        &mut persistence,
        &authority,
        &import_request(vec![]),
        &admin_actor(),
    );

    assert_eq!(result.unwrap_err(), ApiError::EmptyBatch);
    // Nothing was touched: no caller record, no audit entry.
    assert!(persistence.get_actor_by_id("admin.user").unwrap().is_none());
    assert!(persistence.list_import_audit().unwrap().is_empty());
}

#[test]
fn test_import_enrolls_all_valid_rows() {
    let mut persistence: Persistence = test_persistence();
    let authority = test_authority();

    let request = import_request(vec![
        valid_row("Jane Doe", "jane@club.invalid"),
        valid_row("Kai Lund", "kai@club.invalid"),
        valid_row("Mia Chen", "mia@club.invalid"),
    ]);

    let response: ImportMembersResponse =
        import_members(&mut persistence, &authority, &request, &admin_actor()).unwrap();

    assert!(response.success);
    assert_eq!(response.imported_count, 3);
    assert_eq!(response.failed_count, 0);
    assert!(response.failures.is_empty());
    assert_eq!(response.message, "Imported 3 members, 0 failed");

    // Each enrolled member exists in both systems under the same key.
    let members = persistence.list_members().unwrap();
    assert_eq!(members.len(), 3);
    for member in &members {
        assert!(authority.contains(&member.member_id).unwrap());
    }
    assert_eq!(authority.identity_count().unwrap(), 3);
}

#[test]
fn test_import_mixed_batch_reports_each_row() {
    let mut persistence: Persistence = test_persistence();
    let authority = test_authority();

    // A valid, B missing its email, C referencing a team that does
    // not exist.
    let request = import_request(vec![
        valid_row("Alma Reyes", "alma@club.invalid"),
        row_without_email("Ben Okafor"),
        row_with_team("Cleo Marsh", "cleo@club.invalid", "U99"),
    ]);

    let response: ImportMembersResponse =
        import_members(&mut persistence, &authority, &request, &staff_actor()).unwrap();

    assert_eq!(response.imported_count, 2);
    assert_eq!(response.failed_count, 1);
    assert_eq!(response.failures[0].display_name, "Ben Okafor");
    assert!(response.failures[0].error.contains("email"));

    // The unknown team code did not fail the row; the member simply
    // has no team assignment.
    let members = persistence.list_members().unwrap();
    let cleo = members
        .iter()
        .find(|m| m.display_name == "Cleo Marsh")
        .unwrap();
    assert_eq!(cleo.team_id, None);

    // Exactly one audit entry, counts matching the response.
    let entries = persistence.list_import_audit().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, "ImportMembers");
    assert_eq!(entries[0].source_file, "roster.csv");
    assert_eq!(entries[0].status, "partial_success");
    assert_eq!(entries[0].row_count, 2);
    assert!(entries[0].errors_json.as_deref().unwrap().contains("Ben Okafor"));
}

#[test]
fn test_import_assigns_members_to_known_teams() {
    let mut persistence: Persistence = test_persistence();
    let authority = test_authority();
    let team_id: i64 = persistence.create_team("U12", "Under 12").unwrap();

    let request = import_request(vec![row_with_team(
        "Jane Doe",
        "jane@club.invalid",
        "U12",
    )]);

    import_members(&mut persistence, &authority, &request, &admin_actor()).unwrap();

    let members = persistence.list_members().unwrap();
    assert_eq!(members[0].team_id, Some(team_id));
}

#[test]
fn test_import_creates_caller_actor_record() {
    let mut persistence: Persistence = test_persistence();
    let authority = test_authority();

    let request = import_request(vec![valid_row("Jane Doe", "jane@club.invalid")]);
    import_members(&mut persistence, &authority, &request, &staff_actor()).unwrap();

    let caller = persistence
        .get_actor_by_id("staff.user")
        .unwrap()
        .expect("caller record should have been self-healed");
    assert_eq!(caller.role, "staff");
    assert_eq!(caller.email, "staff.user@placeholder.invalid");

    // The audit entry is attributed to the resolved caller.
    let entries = persistence.list_import_audit().unwrap();
    assert_eq!(entries[0].actor_id, "staff.user");
}

#[test]
fn test_import_audit_recorded_even_when_all_rows_fail() {
    let mut persistence: Persistence = test_persistence();
    let authority = test_authority();

    let request = import_request(vec![row_without_email("A"), row_without_email("B")]);
    let response: ImportMembersResponse =
        import_members(&mut persistence, &authority, &request, &admin_actor()).unwrap();

    assert_eq!(response.imported_count, 0);
    assert_eq!(response.failed_count, 2);

    let entries = persistence.list_import_audit().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, "failed");
    assert_eq!(entries[0].row_count, 0);
}

#[test]
fn test_import_duplicate_email_fails_row() {
    let mut persistence: Persistence = test_persistence();
    let authority = test_authority();

    let first = import_request(vec![valid_row("Jane Doe", "jane@club.invalid")]);
    import_members(&mut persistence, &authority, &first, &admin_actor()).unwrap();

    // The authority rejects the duplicate email, so the row fails
    // before anything local is written.
    let second = import_request(vec![valid_row("Jane D. Doe", "jane@club.invalid")]);
    let response: ImportMembersResponse =
        import_members(&mut persistence, &authority, &second, &admin_actor()).unwrap();

    assert_eq!(response.imported_count, 0);
    assert_eq!(response.failed_count, 1);
    assert_eq!(persistence.list_members().unwrap().len(), 1);
    assert_eq!(authority.identity_count().unwrap(), 1);
}

#[test]
fn test_list_members_returns_enrolled_members() {
    let mut persistence: Persistence = test_persistence();
    let authority = test_authority();

    let request = import_request(vec![
        valid_row("Zoe Park", "zoe@club.invalid"),
        valid_row("Ada Byrne", "ada@club.invalid"),
    ]);
    import_members(&mut persistence, &authority, &request, &admin_actor()).unwrap();

    let response = list_members(&mut persistence).unwrap();
    let names: Vec<&str> = response
        .members
        .iter()
        .map(|m| m.display_name.as_str())
        .collect();
    assert_eq!(names, vec!["Ada Byrne", "Zoe Park"]);
}

#[test]
fn test_create_team_as_admin() {
    let mut persistence: Persistence = test_persistence();

    let request = CreateTeamRequest {
        code: String::from("U14"),
        name: String::from("Under 14"),
    };
    let response = create_team(&mut persistence, &request, &admin_actor()).unwrap();
    assert_eq!(response.code, "U14");
    assert_eq!(response.name, "Under 14");

    let teams = list_teams(&mut persistence).unwrap();
    assert_eq!(teams.teams.len(), 1);
    assert_eq!(teams.teams[0].team_id, response.team_id);
}

#[test]
fn test_create_team_rejects_staff() {
    let mut persistence: Persistence = test_persistence();

    let request = CreateTeamRequest {
        code: String::from("U14"),
        name: String::from("Under 14"),
    };
    let result = create_team(&mut persistence, &request, &staff_actor());
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_create_team_rejects_duplicate_code() {
    let mut persistence: Persistence = test_persistence();

    let request = CreateTeamRequest {
        code: String::from("U14"),
        name: String::from("Under 14"),
    };
    create_team(&mut persistence, &request, &admin_actor()).unwrap();

    let result = create_team(&mut persistence, &request, &admin_actor());
    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "code"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_create_team_rejects_blank_code() {
    let mut persistence: Persistence = test_persistence();

    let request = CreateTeamRequest {
        code: String::from("  "),
        name: String::from("Under 14"),
    };
    let result = create_team(&mut persistence, &request, &admin_actor());
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_list_import_audit_newest_first() {
    let mut persistence: Persistence = test_persistence();
    let authority = test_authority();

    let first = import_request(vec![valid_row("Jane Doe", "jane@club.invalid")]);
    import_members(&mut persistence, &authority, &first, &admin_actor()).unwrap();

    let second = import_request(vec![row_without_email("Nameless")]);
    import_members(&mut persistence, &authority, &second, &admin_actor()).unwrap();

    let response = list_import_audit(&mut persistence).unwrap();
    assert_eq!(response.entries.len(), 2);
    assert_eq!(response.entries[0].status, "failed");
    assert_eq!(response.entries[1].status, "success");
}
