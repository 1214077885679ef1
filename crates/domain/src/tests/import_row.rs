// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, Month, OffsetDateTime};

use crate::{DomainError, Gender, ImportRow, MemberDraft, validate_row};

fn create_test_row() -> ImportRow {
    ImportRow {
        display_name: String::from("Jane Doe"),
        email: Some(String::from("jane.doe@example.com")),
        phone: Some(String::from("+1 555 0100")),
        date_of_birth: Some(String::from("1998-04-12")),
        gender: Some(String::from("female")),
        jersey_number: Some(12),
        address: Some(String::from("1 Club Lane")),
        team_code: Some(String::from("U21")),
    }
}

#[test]
fn test_validate_row_accepts_complete_row() {
    let draft: MemberDraft = validate_row(&create_test_row()).unwrap();

    assert_eq!(draft.display_name, "Jane Doe");
    assert_eq!(draft.email, "jane.doe@example.com");
    assert_eq!(draft.gender, Gender::Female);
    assert_eq!(
        draft.date_of_birth,
        Date::from_calendar_date(1998, Month::April, 12).unwrap()
    );
    assert_eq!(draft.jersey_number, Some(12));
    assert_eq!(draft.team_code, Some(String::from("U21")));
}

#[test]
fn test_validate_row_requires_email() {
    let mut row: ImportRow = create_test_row();
    row.email = None;

    let result = validate_row(&row);
    assert!(matches!(result, Err(DomainError::MissingEmail { .. })));
}

#[test]
fn test_validate_row_rejects_blank_email() {
    let mut row: ImportRow = create_test_row();
    row.email = Some(String::from("   "));

    let result = validate_row(&row);
    assert!(matches!(result, Err(DomainError::MissingEmail { .. })));
}

#[test]
fn test_unparseable_date_of_birth_defaults_to_today() {
    let mut row: ImportRow = create_test_row();
    row.date_of_birth = Some(String::from("not-a-date"));

    let draft: MemberDraft = validate_row(&row).unwrap();
    assert_eq!(draft.date_of_birth, OffsetDateTime::now_utc().date());
}

#[test]
fn test_absent_date_of_birth_defaults_to_today() {
    let mut row: ImportRow = create_test_row();
    row.date_of_birth = None;

    let draft: MemberDraft = validate_row(&row).unwrap();
    assert_eq!(draft.date_of_birth, OffsetDateTime::now_utc().date());
}

#[test]
fn test_unrecognized_gender_defaults_to_unspecified() {
    let mut row: ImportRow = create_test_row();
    row.gender = Some(String::from("unknown-tag"));

    let draft: MemberDraft = validate_row(&row).unwrap();
    assert_eq!(draft.gender, Gender::Unspecified);
}

#[test]
fn test_validate_row_rejects_out_of_range_jersey_number() {
    let mut row: ImportRow = create_test_row();
    row.jersey_number = Some(1000);

    let result = validate_row(&row);
    assert!(matches!(
        result,
        Err(DomainError::InvalidJerseyNumber { value: 1000 })
    ));
}

#[test]
fn test_blank_optional_fields_normalize_to_none() {
    let mut row: ImportRow = create_test_row();
    row.phone = Some(String::new());
    row.address = Some(String::from("  "));
    row.team_code = Some(String::from(" "));

    let draft: MemberDraft = validate_row(&row).unwrap();
    assert_eq!(draft.phone, None);
    assert_eq!(draft.address, None);
    assert_eq!(draft.team_code, None);
}
