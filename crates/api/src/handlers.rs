// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operation handlers.
//!
//! Handlers enforce authorization, translate between DTOs and the
//! lower layers, and keep the error taxonomy at the boundary: fatal
//! conditions reject the request, row-scoped conditions land in the
//! response's failure list.

use club_roster_audit::Actor;
use club_roster_domain::CodePolicy;
use club_roster_identity::{CredentialPolicy, IdentityAuthority};
use club_roster_persistence::{ActorData, Persistence, PersistenceError};
use tracing::info;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::batch::{BatchOutcome, record_batch_audit, run_batch};
use crate::error::ApiError;
use crate::request_response::{
    CreateTeamRequest, CreateTeamResponse, ImportMembersRequest, ImportMembersResponse,
    ListImportAuditResponse, ListMembersResponse, ListTeamsResponse,
};
use crate::resolver::{resolve_caller, resolve_team_codes};

/// Imports a batch of members.
///
/// This function:
/// - Verifies the actor is authorized
/// - Rejects empty batches before any row is touched
/// - Resolves the caller to a local actor record (find-or-create)
/// - Pre-resolves the batch's team codes in one query
/// - Runs the enrollment saga once per row
/// - Records one audit entry (best-effort)
///
/// # Arguments
///
/// * `persistence` - The local directory
/// * `authority` - The identity authority
/// * `request` - The import request
/// * `authenticated_actor` - The authenticated caller
///
/// # Returns
///
/// An `ImportMembersResponse` with counts and per-row failures.
///
/// # Errors
///
/// Returns an error only for batch-fatal conditions:
/// - The actor is not authorized
/// - The row list is empty
/// - The caller cannot be resolved or created
/// - The local directory is unreachable
///
/// Individual row failures are captured in the response, not as errors.
pub fn import_members(
    persistence: &mut Persistence,
    authority: &dyn IdentityAuthority,
    request: &ImportMembersRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ImportMembersResponse, ApiError> {
    AuthorizationService::authorize_import_members(authenticated_actor)?;

    if request.rows.is_empty() {
        return Err(ApiError::EmptyBatch);
    }

    info!(
        caller = %authenticated_actor.id,
        rows = request.rows.len(),
        source_file = %request.source_file,
        "Starting member import batch"
    );

    let code_policy: CodePolicy = CodePolicy::default();
    let credential_policy: CredentialPolicy = CredentialPolicy::default();

    // Both resolutions are batch-fatal on failure: without a caller no
    // audit entry can be attributed, and without the team map no row
    // can resolve its team reference.
    let caller: ActorData = resolve_caller(persistence, authenticated_actor, code_policy)?;
    let team_map = resolve_team_codes(persistence, &request.rows)?;

    let outcome: BatchOutcome = run_batch(
        persistence,
        authority,
        &request.rows,
        &team_map,
        &credential_policy,
        code_policy,
    );

    let audit_actor: Actor = Actor::new(caller.actor_id, caller.role);
    record_batch_audit(persistence, &audit_actor, &request.source_file, &outcome);

    let message: String = format!(
        "Imported {} members, {} failed",
        outcome.imported_count(),
        outcome.failed_count()
    );

    Ok(ImportMembersResponse {
        success: true,
        message,
        imported_count: outcome.imported_count(),
        failed_count: outcome.failed_count(),
        failures: outcome.failures,
    })
}

/// Creates a new team.
///
/// # Arguments
///
/// * `persistence` - The local directory
/// * `request` - The team creation request
/// * `authenticated_actor` - The authenticated caller
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an Admin
/// - The code or name is blank
/// - A team with this code already exists
pub fn create_team(
    persistence: &mut Persistence,
    request: &CreateTeamRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<CreateTeamResponse, ApiError> {
    AuthorizationService::authorize_create_team(authenticated_actor)?;

    let code: &str = request.code.trim();
    let name: &str = request.name.trim();

    if code.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("code"),
            message: String::from("Team code cannot be empty"),
        });
    }
    if name.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("Team name cannot be empty"),
        });
    }

    let team_id: i64 = match persistence.create_team(code, name) {
        Ok(id) => id,
        Err(PersistenceError::UniqueViolation(_)) => {
            return Err(ApiError::InvalidInput {
                field: String::from("code"),
                message: format!("Team with code '{code}' already exists"),
            });
        }
        Err(e) => return Err(e.into()),
    };

    Ok(CreateTeamResponse {
        team_id,
        code: code.to_string(),
        name: name.to_string(),
        message: format!("Team '{code}' created"),
    })
}

/// Lists all teams.
///
/// # Errors
///
/// Returns an error if the local directory cannot be queried.
pub fn list_teams(persistence: &mut Persistence) -> Result<ListTeamsResponse, ApiError> {
    Ok(ListTeamsResponse {
        teams: persistence.list_teams()?,
    })
}

/// Lists all members.
///
/// # Errors
///
/// Returns an error if the local directory cannot be queried.
pub fn list_members(persistence: &mut Persistence) -> Result<ListMembersResponse, ApiError> {
    Ok(ListMembersResponse {
        members: persistence.list_members()?,
    })
}

/// Lists all import audit entries, most recent first.
///
/// # Errors
///
/// Returns an error if the local directory cannot be queried.
pub fn list_import_audit(
    persistence: &mut Persistence,
) -> Result<ListImportAuditResponse, ApiError> {
    Ok(ListImportAuditResponse {
        entries: persistence.list_import_audit()?,
    })
}
