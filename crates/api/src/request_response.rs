// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use club_roster_domain::ImportRow;
use club_roster_persistence::{ImportAuditData, MemberData, TeamData};

/// API request to import a batch of members.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImportMembersRequest {
    /// The caller-supplied source filename. Advisory only; recorded in
    /// the audit entry and never used to locate anything.
    pub source_file: String,
    /// The raw rows to import. Must be non-empty.
    pub rows: Vec<ImportRow>,
}

/// One failed row in an import response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RowFailure {
    /// The display name of the failed row.
    pub display_name: String,
    /// The error description for the failed row.
    pub error: String,
}

impl RowFailure {
    /// Creates a new `RowFailure`.
    #[must_use]
    pub const fn new(display_name: String, error: String) -> Self {
        Self {
            display_name,
            error,
        }
    }
}

/// API response for a processed import batch.
///
/// `success` reflects whether the request was processable at all; it is
/// false only for configuration-level failures. Row failures do not
/// change it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImportMembersResponse {
    /// Whether the request was processable.
    pub success: bool,
    /// A human-readable summary message stating counts.
    pub message: String,
    /// The number of rows successfully imported.
    pub imported_count: usize,
    /// The number of rows that failed.
    pub failed_count: usize,
    /// The per-row failures. Every input row yields either a success
    /// count increment or an entry here; rows are never dropped.
    pub failures: Vec<RowFailure>,
}

/// API request to create a new team.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateTeamRequest {
    /// The external team code, unique within the directory.
    pub code: String,
    /// The team's display name.
    pub name: String,
}

/// API response for a successful team creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateTeamResponse {
    /// The generated internal team ID.
    pub team_id: i64,
    /// The team code.
    pub code: String,
    /// The team name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API response listing all teams.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListTeamsResponse {
    /// The teams, ordered by code.
    pub teams: Vec<TeamData>,
}

/// API response listing all members.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListMembersResponse {
    /// The members, ordered by display name.
    pub members: Vec<MemberData>,
}

/// API response listing import audit entries.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListImportAuditResponse {
    /// The audit entries, most recent first.
    pub entries: Vec<ImportAuditData>,
}
