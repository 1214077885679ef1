// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Team queries.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::TeamData;
use crate::diesel_schema::teams;
use crate::error::PersistenceError;

/// Diesel Queryable struct for team rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = teams)]
struct TeamRow {
    team_id: i64,
    code: String,
    name: String,
    created_at: String,
}

/// Resolves a set of team codes to internal team IDs in one query.
///
/// Codes with no matching team are simply absent from the returned map.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `codes` - The distinct team codes to resolve
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn resolve_team_codes(
    conn: &mut SqliteConnection,
    codes: &[String],
) -> Result<HashMap<String, i64>, PersistenceError> {
    if codes.is_empty() {
        return Ok(HashMap::new());
    }

    debug!("Resolving {} team codes", codes.len());

    let rows: Vec<(String, i64)> = teams::table
        .filter(teams::code.eq_any(codes))
        .select((teams::code, teams::team_id))
        .load(conn)?;

    Ok(rows.into_iter().collect())
}

/// Lists all teams ordered by code.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_teams(conn: &mut SqliteConnection) -> Result<Vec<TeamData>, PersistenceError> {
    let rows: Vec<TeamRow> = teams::table
        .order(teams::code.asc())
        .select(TeamRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| TeamData {
            team_id: row.team_id,
            code: row.code,
            name: row.name,
            created_at: row.created_at,
        })
        .collect())
}
