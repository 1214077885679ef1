// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::ActorData;
use crate::diesel_schema::actors;
use crate::error::PersistenceError;

/// Diesel Queryable struct for actor rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = actors)]
struct ActorRow {
    actor_id: String,
    code: String,
    display_name: String,
    email: String,
    role: String,
    created_at: String,
}

/// Retrieves an actor by its external identity handle.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `actor_id` - The external identity handle to look up
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the actor is not found.
pub fn get_actor_by_id(
    conn: &mut SqliteConnection,
    actor_id: &str,
) -> Result<Option<ActorData>, PersistenceError> {
    debug!("Looking up actor by actor_id: {}", actor_id);

    let result: Result<ActorRow, diesel::result::Error> = actors::table
        .filter(actors::actor_id.eq(actor_id))
        .select(ActorRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(ActorData {
            actor_id: row.actor_id,
            code: row.code,
            display_name: row.display_name,
            email: row.email,
            role: row.role,
            created_at: row.created_at,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
