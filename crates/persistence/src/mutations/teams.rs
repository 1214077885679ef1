// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Team mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::teams;
use crate::error::PersistenceError;

/// Creates a new team.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `code` - The external team code, unique within the directory
/// * `name` - The team's display name
///
/// # Returns
///
/// The generated `team_id` for the new team.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if a team with this code
/// already exists.
pub fn create_team(
    conn: &mut SqliteConnection,
    code: &str,
    name: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating team with code: {}, name: {}", code, name);

    diesel::insert_into(teams::table)
        .values((teams::code.eq(code), teams::name.eq(name)))
        .execute(conn)?;

    let team_id: i64 = get_last_insert_rowid(conn)?;

    info!(team_id, "Team created successfully");
    Ok(team_id)
}
