// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules.
//!
//! This module contains all state-changing operations for the persistence
//! layer. Mutations use Diesel DSL, with the single backend-specific
//! helper (`last_insert_rowid()`) imported from the `backend` module.
//!
//! ## Module Organization
//!
//! - `actors` — Caller directory records
//! - `audit` — Import audit rows
//! - `members` — Member enrollment records
//! - `teams` — Team records

pub mod actors;
pub mod audit;
pub mod members;
pub mod teams;

pub use actors::create_actor;
pub use audit::record_import_audit;
pub use members::create_member;
pub use teams::create_team;
