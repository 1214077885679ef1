// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Club Roster System.
//!
//! This crate provides database persistence for the local directory:
//! actor records, team records, member records, and import audit rows.
//! It is built on Diesel over `SQLite`.
//!
//! ## Testing Philosophy
//!
//! - Standard tests (`cargo test`) run against an in-memory `SQLite`
//!   database with a unique name per test for deterministic isolation
//! - Foreign key enforcement is verified at startup, not assumed

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use club_roster_audit::ImportAuditEntry;
use diesel::SqliteConnection;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{ActorData, ImportAuditData, MemberData, NewMemberRecord, TeamData};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the local directory.
///
/// Owns a single `SQLite` connection; callers that share an adapter
/// across request handlers must wrap it in their own mutual exclusion.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Actors
    // ========================================================================

    /// Creates a new actor record.
    ///
    /// # Arguments
    ///
    /// * `actor_id` - The external identity handle, used as the primary key
    /// * `code` - The generated human-readable actor code
    /// * `display_name` - The display name
    /// * `email` - The contact email
    /// * `role` - The actor's role
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if an actor with this
    /// ID, code, or email already exists.
    pub fn create_actor(
        &mut self,
        actor_id: &str,
        code: &str,
        display_name: &str,
        email: &str,
        role: &str,
    ) -> Result<(), PersistenceError> {
        mutations::create_actor(&mut self.conn, actor_id, code, display_name, email, role)
    }

    /// Retrieves an actor by its external identity handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_actor_by_id(
        &mut self,
        actor_id: &str,
    ) -> Result<Option<ActorData>, PersistenceError> {
        queries::get_actor_by_id(&mut self.conn, actor_id)
    }

    // ========================================================================
    // Teams
    // ========================================================================

    /// Creates a new team.
    ///
    /// # Returns
    ///
    /// The generated `team_id` for the new team.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if a team with this
    /// code already exists.
    pub fn create_team(&mut self, code: &str, name: &str) -> Result<i64, PersistenceError> {
        mutations::create_team(&mut self.conn, code, name)
    }

    /// Resolves a set of team codes to internal team IDs in one query.
    ///
    /// Codes with no matching team are simply absent from the returned map.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn resolve_team_codes(
        &mut self,
        codes: &[String],
    ) -> Result<HashMap<String, i64>, PersistenceError> {
        queries::resolve_team_codes(&mut self.conn, codes)
    }

    /// Lists all teams ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_teams(&mut self) -> Result<Vec<TeamData>, PersistenceError> {
        queries::list_teams(&mut self.conn)
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// Creates a new member record in one write.
    ///
    /// The record's primary key is the external identity ID supplied in
    /// `record.member_id`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the member ID,
    /// code, or email collides with an existing row.
    pub fn create_member(&mut self, record: &NewMemberRecord) -> Result<(), PersistenceError> {
        mutations::create_member(&mut self.conn, record)
    }

    /// Retrieves a member by its external identity ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_member_by_id(
        &mut self,
        member_id: &str,
    ) -> Result<Option<MemberData>, PersistenceError> {
        queries::get_member_by_id(&mut self.conn, member_id)
    }

    /// Lists all members ordered by display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_members(&mut self) -> Result<Vec<MemberData>, PersistenceError> {
        queries::list_members(&mut self.conn)
    }

    // ========================================================================
    // Import audit
    // ========================================================================

    /// Persists one import audit entry.
    ///
    /// # Returns
    ///
    /// The generated `entry_id` for the audit row.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails.
    pub fn record_import_audit(
        &mut self,
        entry: &ImportAuditEntry,
    ) -> Result<i64, PersistenceError> {
        mutations::record_import_audit(&mut self.conn, entry)
    }

    /// Lists all import audit entries, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_import_audit(&mut self) -> Result<Vec<ImportAuditData>, PersistenceError> {
        queries::list_import_audit(&mut self.conn)
    }
}
