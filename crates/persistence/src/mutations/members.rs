// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::data_models::NewMemberRecord;
use crate::diesel_schema::members;
use crate::error::PersistenceError;

/// Creates a new member record in one write.
///
/// The record's primary key is the external identity ID supplied in
/// `record.member_id`; it must already exist in the identity authority.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `record` - The member fields to insert
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the member ID, code,
/// or email collides with an existing row.
pub fn create_member(
    conn: &mut SqliteConnection,
    record: &NewMemberRecord,
) -> Result<(), PersistenceError> {
    info!(
        "Creating member with member_id: {}, code: {}",
        record.member_id, record.code
    );

    diesel::insert_into(members::table)
        .values((
            members::member_id.eq(&record.member_id),
            members::code.eq(&record.code),
            members::display_name.eq(&record.display_name),
            members::email.eq(&record.email),
            members::phone.eq(&record.phone),
            members::date_of_birth.eq(&record.date_of_birth),
            members::gender.eq(&record.gender),
            members::jersey_number.eq(record.jersey_number),
            members::address.eq(&record.address),
            members::team_id.eq(record.team_id),
            members::must_reset_credential.eq(i32::from(record.must_reset_credential)),
        ))
        .execute(conn)?;

    info!("Created member: {}", record.member_id);
    Ok(())
}
