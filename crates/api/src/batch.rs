// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Batch coordination over the per-row saga.

use std::collections::HashMap;

use club_roster_audit::{Actor, AuditRowError, BatchStatus, ImportAuditEntry};
use club_roster_domain::{CodePolicy, ImportRow};
use club_roster_identity::{CredentialPolicy, IdentityAuthority};
use club_roster_persistence::{NewMemberRecord, Persistence};
use tracing::{info, warn};

use crate::request_response::RowFailure;
use crate::saga::run_row_saga;

/// The aggregate result of one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// The records created by successful rows, in input order.
    pub imported: Vec<NewMemberRecord>,
    /// The failures produced by unsuccessful rows, in input order.
    pub failures: Vec<RowFailure>,
    /// The three-way classification of the run.
    pub status: BatchStatus,
}

impl BatchOutcome {
    /// Returns the number of rows successfully imported.
    #[must_use]
    pub const fn imported_count(&self) -> usize {
        self.imported.len()
    }

    /// Returns the number of rows that failed.
    #[must_use]
    pub const fn failed_count(&self) -> usize {
        self.failures.len()
    }
}

/// Runs the enrollment saga once per row and aggregates the outcomes.
///
/// Rows are independent: a failure in one row never blocks or alters
/// the processing of the next. Every input row yields exactly one
/// outcome.
///
/// # Arguments
///
/// * `persistence` - The local directory
/// * `authority` - The identity authority
/// * `rows` - The batch's input rows
/// * `team_map` - The pre-resolved team code map, read-only for the run
/// * `credentials` - The initial credential policy
/// * `codes` - The code generation policy
#[must_use]
pub fn run_batch(
    persistence: &mut Persistence,
    authority: &dyn IdentityAuthority,
    rows: &[ImportRow],
    team_map: &HashMap<String, i64>,
    credentials: &CredentialPolicy,
    codes: CodePolicy,
) -> BatchOutcome {
    let mut imported: Vec<NewMemberRecord> = Vec::new();
    let mut failures: Vec<RowFailure> = Vec::new();

    for row in rows {
        match run_row_saga(persistence, authority, row, team_map, credentials, codes) {
            Ok(record) => imported.push(record),
            Err(failure) => failures.push(failure),
        }
    }

    let status: BatchStatus = BatchStatus::classify(imported.len(), failures.len());

    info!(
        imported = imported.len(),
        failed = failures.len(),
        status = %status,
        "Batch import completed"
    );

    BatchOutcome {
        imported,
        failures,
        status,
    }
}

/// Writes the batch's audit entry, best-effort.
///
/// The import already happened by the time this runs; a failed audit
/// write is a degraded-observability condition, logged but never a
/// reason to fail rows that succeeded.
pub fn record_batch_audit(
    persistence: &mut Persistence,
    actor: &Actor,
    source_file: &str,
    outcome: &BatchOutcome,
) {
    let errors: Vec<AuditRowError> = outcome
        .failures
        .iter()
        .map(|failure| AuditRowError::new(failure.display_name.clone(), failure.error.clone()))
        .collect();

    let entry: ImportAuditEntry = ImportAuditEntry::new(
        String::from("ImportMembers"),
        source_file.to_string(),
        outcome.status,
        outcome.imported_count(),
        errors,
        actor.clone(),
    );

    if let Err(e) = persistence.record_import_audit(&entry) {
        warn!(
            actor_id = %actor.id,
            error = %e,
            "Failed to record import audit entry; batch result is unaffected"
        );
    }
}
