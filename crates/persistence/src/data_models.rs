// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Serializable representation of an actor record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorData {
    pub actor_id: String,
    pub code: String,
    pub display_name: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
}

/// Serializable representation of a team record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamData {
    pub team_id: i64,
    pub code: String,
    pub name: String,
    pub created_at: String,
}

/// Serializable representation of a member record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberData {
    pub member_id: String,
    pub code: String,
    pub display_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: String,
    pub gender: String,
    pub jersey_number: Option<i32>,
    pub address: Option<String>,
    pub team_id: Option<i64>,
    pub must_reset_credential: bool,
    pub created_at: String,
}

/// Serializable representation of an import audit row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportAuditData {
    pub entry_id: i64,
    pub action: String,
    pub source_file: String,
    pub status: String,
    pub row_count: i32,
    pub errors_json: Option<String>,
    pub actor_id: String,
    pub created_at: String,
}

/// The fields needed to insert a new member row.
///
/// The `member_id` is the external identity ID from the authority and
/// must be supplied by the caller; it is never generated locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMemberRecord {
    pub member_id: String,
    pub code: String,
    pub display_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: String,
    pub gender: String,
    pub jersey_number: Option<i32>,
    pub address: Option<String>,
    pub team_id: Option<i64>,
    pub must_reset_credential: bool,
}
