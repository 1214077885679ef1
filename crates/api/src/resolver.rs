// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller and team-code resolution.
//!
//! Both resolvers run once per batch, before any row is processed.

use std::collections::HashMap;

use club_roster_domain::{CodePolicy, ImportRow, generate_actor_code};
use club_roster_persistence::{ActorData, Persistence, PersistenceError};
use tracing::{debug, info};

use crate::auth::AuthenticatedActor;
use crate::error::ApiError;

/// Resolves the caller to a local actor record, creating one if absent.
///
/// This is find-or-create, not a strict upsert: two simultaneous first
/// calls for the same handle may both observe "not found" and both
/// attempt creation. The second creation's uniqueness violation is
/// treated as "already exists, re-fetch" rather than a fatal error.
///
/// Self-healed actors get synthesized placeholder attributes: a
/// generated code and a non-deliverable placeholder email derived from
/// the handle.
///
/// # Arguments
///
/// * `persistence` - The local directory
/// * `actor` - The authenticated caller
/// * `policy` - The code generation policy
///
/// # Errors
///
/// Returns `ApiError::CallerUnresolvable` if the actor can neither be
/// found nor created. This is fatal to the whole batch.
pub fn resolve_caller(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    policy: CodePolicy,
) -> Result<ActorData, ApiError> {
    let unresolvable = |reason: String| ApiError::CallerUnresolvable {
        handle: actor.id.clone(),
        reason,
    };

    if let Some(existing) = persistence
        .get_actor_by_id(&actor.id)
        .map_err(|e| unresolvable(e.to_string()))?
    {
        debug!("Resolved caller '{}' to existing actor", actor.id);
        return Ok(existing);
    }

    info!("Caller '{}' has no actor record, creating one", actor.id);

    let code: String = generate_actor_code(policy);
    let placeholder_email: String = format!("{}@placeholder.invalid", actor.id);

    let created: Result<(), PersistenceError> = persistence.create_actor(
        &actor.id,
        &code,
        &actor.id,
        &placeholder_email,
        actor.role.as_str(),
    );

    match created {
        Ok(()) => {}
        // Lost a creation race; the record now exists, fall through to re-fetch.
        Err(PersistenceError::UniqueViolation(_)) => {
            debug!("Actor '{}' was created concurrently, re-fetching", actor.id);
        }
        Err(e) => return Err(unresolvable(e.to_string())),
    }

    persistence
        .get_actor_by_id(&actor.id)
        .map_err(|e| unresolvable(e.to_string()))?
        .ok_or_else(|| unresolvable(String::from("actor record absent after creation")))
}

/// Collects the distinct, non-empty team codes present across all rows.
#[must_use]
pub fn collect_team_codes(rows: &[ImportRow]) -> Vec<String> {
    let mut codes: Vec<String> = rows
        .iter()
        .filter_map(|row| row.team_code.as_deref())
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect();
    codes.sort_unstable();
    codes.dedup();
    codes
}

/// Resolves the batch's team codes to internal team IDs in one query.
///
/// Codes with no matching team are simply absent from the returned map;
/// rows referencing them proceed with no team assignment.
///
/// # Errors
///
/// Returns `ApiError::StoreUnavailable` if the directory cannot be
/// queried. This is fatal to the whole batch.
pub fn resolve_team_codes(
    persistence: &mut Persistence,
    rows: &[ImportRow],
) -> Result<HashMap<String, i64>, ApiError> {
    let codes: Vec<String> = collect_team_codes(rows);
    debug!("Resolving {} distinct team codes for batch", codes.len());
    Ok(persistence.resolve_team_codes(&codes)?)
}
