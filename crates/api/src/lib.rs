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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod batch;
mod error;
mod handlers;
mod request_response;
mod resolver;
mod saga;

#[cfg(test)]
mod tests;

pub use auth::{AuthError, AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
pub use batch::{BatchOutcome, record_batch_audit, run_batch};
pub use error::ApiError;
pub use handlers::{
    create_team, import_members, list_import_audit, list_members, list_teams,
};
pub use request_response::{
    CreateTeamRequest, CreateTeamResponse, ImportMembersRequest, ImportMembersResponse,
    ListImportAuditResponse, ListMembersResponse, ListTeamsResponse, RowFailure,
};
pub use resolver::{collect_team_codes, resolve_caller, resolve_team_codes};
pub use saga::run_row_saga;
