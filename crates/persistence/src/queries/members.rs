// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::MemberData;
use crate::diesel_schema::members;
use crate::error::PersistenceError;

/// Diesel Queryable struct for member rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = members)]
struct MemberRow {
    member_id: String,
    code: String,
    display_name: String,
    email: String,
    phone: Option<String>,
    date_of_birth: String,
    gender: String,
    jersey_number: Option<i32>,
    address: Option<String>,
    team_id: Option<i64>,
    must_reset_credential: i32,
    created_at: String,
}

impl From<MemberRow> for MemberData {
    fn from(row: MemberRow) -> Self {
        Self {
            member_id: row.member_id,
            code: row.code,
            display_name: row.display_name,
            email: row.email,
            phone: row.phone,
            date_of_birth: row.date_of_birth,
            gender: row.gender,
            jersey_number: row.jersey_number,
            address: row.address,
            team_id: row.team_id,
            must_reset_credential: row.must_reset_credential != 0,
            created_at: row.created_at,
        }
    }
}

/// Retrieves a member by its external identity ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `member_id` - The external identity ID to look up
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the member is not found.
pub fn get_member_by_id(
    conn: &mut SqliteConnection,
    member_id: &str,
) -> Result<Option<MemberData>, PersistenceError> {
    debug!("Looking up member by member_id: {}", member_id);

    let result: Result<MemberRow, diesel::result::Error> = members::table
        .filter(members::member_id.eq(member_id))
        .select(MemberRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists all members ordered by display name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_members(conn: &mut SqliteConnection) -> Result<Vec<MemberData>, PersistenceError> {
    let rows: Vec<MemberRow> = members::table
        .order(members::display_name.asc())
        .select(MemberRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}
