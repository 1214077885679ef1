// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Import audit mutations.

use club_roster_audit::ImportAuditEntry;
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::import_audit;
use crate::error::PersistenceError;

/// Persists one import audit entry.
///
/// Row failures are serialized to a JSON array in `errors_json`; when
/// every row succeeded the column is left null.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `entry` - The audit entry to persist
///
/// # Returns
///
/// The generated `entry_id` for the audit row.
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn record_import_audit(
    conn: &mut SqliteConnection,
    entry: &ImportAuditEntry,
) -> Result<i64, PersistenceError> {
    debug!(
        "Recording import audit for actor: {}, status: {}",
        entry.actor.id, entry.status
    );

    let errors_json: Option<String> = if entry.errors.is_empty() {
        None
    } else {
        Some(serde_json::to_string(&entry.errors)?)
    };

    let row_count: i32 = i32::try_from(entry.imported_count)
        .map_err(|e| PersistenceError::Other(format!("Row count out of range: {e}")))?;

    diesel::insert_into(import_audit::table)
        .values((
            import_audit::action.eq(&entry.action),
            import_audit::source_file.eq(&entry.source_file),
            import_audit::status.eq(entry.status.as_str()),
            import_audit::row_count.eq(row_count),
            import_audit::errors_json.eq(&errors_json),
            import_audit::actor_id.eq(&entry.actor.id),
        ))
        .execute(conn)?;

    let entry_id: i64 = get_last_insert_rowid(conn)?;

    debug!(entry_id, "Import audit entry recorded");
    Ok(entry_id)
}
