// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules.
//!
//! This module contains all read-only operations for the persistence
//! layer. All queries use Diesel DSL.
//!
//! ## Module Organization
//!
//! - `actors` — Caller directory lookups
//! - `audit` — Import audit retrieval
//! - `members` — Member listing and lookups
//! - `teams` — Team listing and bulk code resolution

pub mod actors;
pub mod audit;
pub mod members;
pub mod teams;

pub use actors::get_actor_by_id;
pub use audit::list_import_audit;
pub use members::{get_member_by_id, list_members};
pub use teams::{list_teams, resolve_team_codes};
