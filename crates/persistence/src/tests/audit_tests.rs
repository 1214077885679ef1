// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use club_roster_audit::{Actor, AuditRowError, BatchStatus, ImportAuditEntry};

use crate::tests::helpers::{seed_actor, test_persistence};
use crate::{ImportAuditData, Persistence};

fn entry_for(actor_id: &str, status: BatchStatus, imported: usize) -> ImportAuditEntry {
    ImportAuditEntry::new(
        String::from("ImportMembers"),
        String::from("roster-2026.xlsx"),
        status,
        imported,
        Vec::new(),
        Actor::new(actor_id.to_string(), String::from("admin")),
    )
}

#[test]
fn test_successful_batch_has_no_errors_json() {
    let mut persistence: Persistence = test_persistence();
    seed_actor(&mut persistence, "coach-jane");

    let entry_id: i64 = persistence
        .record_import_audit(&entry_for("coach-jane", BatchStatus::Success, 3))
        .unwrap();
    assert!(entry_id > 0);

    let entries: Vec<ImportAuditData> = persistence.list_import_audit().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, "ImportMembers");
    assert_eq!(entries[0].source_file, "roster-2026.xlsx");
    assert_eq!(entries[0].status, "success");
    assert_eq!(entries[0].row_count, 3);
    assert_eq!(entries[0].errors_json, None);
    assert_eq!(entries[0].actor_id, "coach-jane");
}

#[test]
fn test_row_failures_are_serialized_as_json() {
    let mut persistence: Persistence = test_persistence();
    seed_actor(&mut persistence, "coach-jane");

    let mut entry = entry_for("coach-jane", BatchStatus::PartialSuccess, 2);
    entry.errors = vec![AuditRowError::new(
        String::from("Jane Doe"),
        String::from("Contact email is required for 'Jane Doe'"),
    )];

    persistence.record_import_audit(&entry).unwrap();

    let entries: Vec<ImportAuditData> = persistence.list_import_audit().unwrap();
    let errors_json: &str = entries[0].errors_json.as_deref().unwrap();

    let parsed: Vec<AuditRowError> = serde_json::from_str(errors_json).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].display_name, "Jane Doe");
}

#[test]
fn test_audit_entries_list_most_recent_first() {
    let mut persistence: Persistence = test_persistence();
    seed_actor(&mut persistence, "coach-jane");

    persistence
        .record_import_audit(&entry_for("coach-jane", BatchStatus::Success, 1))
        .unwrap();
    persistence
        .record_import_audit(&entry_for("coach-jane", BatchStatus::Failed, 0))
        .unwrap();

    let entries: Vec<ImportAuditData> = persistence.list_import_audit().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].status, "failed");
    assert_eq!(entries[1].status, "success");
    assert!(entries[0].entry_id > entries[1].entry_id);
}
