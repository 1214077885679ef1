// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::diesel_schema::actors;
use crate::error::PersistenceError;

/// Creates a new actor record.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `actor_id` - The external identity handle, used as the primary key
/// * `code` - The generated human-readable actor code
/// * `display_name` - The display name
/// * `email` - The contact email (placeholder for self-healed actors)
/// * `role` - The actor's role
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if an actor with this
/// ID, code, or email already exists.
pub fn create_actor(
    conn: &mut SqliteConnection,
    actor_id: &str,
    code: &str,
    display_name: &str,
    email: &str,
    role: &str,
) -> Result<(), PersistenceError> {
    info!(
        "Creating actor with actor_id: {}, code: {}, role: {}",
        actor_id, code, role
    );

    diesel::insert_into(actors::table)
        .values((
            actors::actor_id.eq(actor_id),
            actors::code.eq(code),
            actors::display_name.eq(display_name),
            actors::email.eq(email),
            actors::role.eq(role),
        ))
        .execute(conn)?;

    info!("Created actor: {}", actor_id);
    Ok(())
}
