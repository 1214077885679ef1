// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Import audit queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::ImportAuditData;
use crate::diesel_schema::import_audit;
use crate::error::PersistenceError;

/// Diesel Queryable struct for import audit rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = import_audit)]
struct ImportAuditRow {
    entry_id: i64,
    action: String,
    source_file: String,
    status: String,
    row_count: i32,
    errors_json: Option<String>,
    actor_id: String,
    created_at: String,
}

/// Lists all import audit entries, most recent first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_import_audit(
    conn: &mut SqliteConnection,
) -> Result<Vec<ImportAuditData>, PersistenceError> {
    let rows: Vec<ImportAuditRow> = import_audit::table
        .order(import_audit::entry_id.desc())
        .select(ImportAuditRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| ImportAuditData {
            entry_id: row.entry_id,
            action: row.action,
            source_file: row.source_file,
            status: row.status,
            row_count: row.row_count,
            errors_json: row.errors_json,
            actor_id: row.actor_id,
            created_at: row.created_at,
        })
        .collect())
}
