// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::{Deserialize, Serialize};

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a state change.
/// For batch imports, this is always the resolved caller; actions are
/// never attributed to ambient or shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor. For directory actors this is
    /// the external identity ID, which is also the local primary key.
    pub id: String,
    /// The type of actor (e.g., "admin", "staff").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Three-way classification of a multi-row batch run.
///
/// Computed once per batch from the row outcomes:
/// - every row succeeded → `Success`
/// - some rows succeeded and some failed → `PartialSuccess`
/// - no row succeeded (and at least one row existed) → `Failed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// Every row in the batch was imported.
    Success,
    /// At least one row was imported and at least one row failed.
    PartialSuccess,
    /// No row was imported.
    Failed,
}

impl BatchStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::PartialSuccess => "partial_success",
            Self::Failed => "failed",
        }
    }

    /// Classifies a batch from its success and failure counts.
    ///
    /// A batch with zero rows never reaches classification (empty input is
    /// rejected at the boundary), so `classify(0, 0)` is defined as
    /// `Failed` purely for totality.
    #[must_use]
    pub const fn classify(succeeded: usize, failed: usize) -> Self {
        if failed == 0 && succeeded > 0 {
            Self::Success
        } else if succeeded > 0 {
            Self::PartialSuccess
        } else {
            Self::Failed
        }
    }
}

impl std::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One serialized row failure inside an audit entry.
///
/// Failures are stored as a JSON array in the audit record so the entry is
/// self-contained: what was attempted and what went wrong, without joins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRowError {
    /// The display name of the failed row.
    pub display_name: String,
    /// The error description for the failed row.
    pub error: String,
}

impl AuditRowError {
    /// Creates a new `AuditRowError`.
    #[must_use]
    pub const fn new(display_name: String, error: String) -> Self {
        Self { display_name, error }
    }
}

/// An immutable audit entry describing one batch import run.
///
/// Exactly one entry is written per batch that passes the fatal-error
/// gate. Entries are never mutated or deleted by this subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAuditEntry {
    /// The action label (e.g., "`ImportMembers`").
    pub action: String,
    /// The caller-supplied source filename. Advisory only; never used to
    /// locate or re-read anything.
    pub source_file: String,
    /// The resulting batch status.
    pub status: BatchStatus,
    /// The number of rows successfully imported.
    pub imported_count: usize,
    /// The per-row failures. Empty when every row succeeded.
    pub errors: Vec<AuditRowError>,
    /// The resolved actor who ran the batch.
    pub actor: Actor,
}

impl ImportAuditEntry {
    /// Creates a new `ImportAuditEntry`.
    ///
    /// Once created, an audit entry is immutable.
    #[must_use]
    pub const fn new(
        action: String,
        source_file: String,
        status: BatchStatus,
        imported_count: usize,
        errors: Vec<AuditRowError>,
        actor: Actor,
    ) -> Self {
        Self {
            action,
            source_file,
            status,
            imported_count,
            errors,
            actor,
        }
    }
}
