// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The per-row enrollment saga.
//!
//! Enrolling one member requires two writes to two systems that do not
//! share a transaction: the identity authority (Phase A) and the local
//! directory (Phase B). If Phase B fails after Phase A succeeded, the
//! identity just created is deleted again as compensation. A failed
//! compensation leaves an orphaned identity that no automated step here
//! can repair; it is escalated in the logs rather than surfaced to the
//! caller.

use std::collections::HashMap;

use club_roster_domain::{
    CodePolicy, ImportRow, MemberDraft, MemberRole, generate_login_handle, generate_member_code,
    validate_row,
};
use club_roster_identity::{CredentialPolicy, ExternalIdentity, IdentityAuthority, NewIdentity};
use club_roster_persistence::{NewMemberRecord, Persistence, PersistenceError};
use time::macros::format_description;
use tracing::{debug, error};

use crate::request_response::RowFailure;

/// Runs the two-phase enrollment saga for one import row.
///
/// Steps:
/// 1. Validate and normalize the row (no side effects on failure)
/// 2. Generate a login handle and member code, format the stored fields
/// 3. Phase A: create the identity in the authority
/// 4. Phase B: persist the member record keyed by the external ID
///    returned by Phase A
/// 5. On Phase B failure, compensate by deleting the Phase A identity
///
/// Exactly one of success or failure is produced for every row, and
/// Phase B is never attempted without a completed Phase A.
///
/// # Arguments
///
/// * `persistence` - The local directory
/// * `authority` - The identity authority
/// * `row` - The untrusted input row
/// * `team_map` - The batch's pre-resolved team code map
/// * `credentials` - The initial credential policy
/// * `codes` - The code generation policy
///
/// # Errors
///
/// Returns a `RowFailure` carrying the row's display name and a named
/// reason. Compensation outcomes are logged, never returned.
pub fn run_row_saga(
    persistence: &mut Persistence,
    authority: &dyn IdentityAuthority,
    row: &ImportRow,
    team_map: &HashMap<String, i64>,
    credentials: &CredentialPolicy,
    codes: CodePolicy,
) -> Result<NewMemberRecord, RowFailure> {
    let fail = |error: String| RowFailure::new(row.display_name.trim().to_string(), error);

    // Step 1: validate. Failures here have no external side effects.
    let draft: MemberDraft = validate_row(row).map_err(|e| fail(e.to_string()))?;

    let team_id: Option<i64> = draft
        .team_code
        .as_deref()
        .and_then(|code| team_map.get(code))
        .copied();

    // Step 2: generated values are unique with high probability only;
    // a collision surfaces as an ordinary Phase B failure.
    let login_handle: String = generate_login_handle(&draft.display_name, codes);
    let member_code: String = generate_member_code(codes);

    // Formatted before Phase A so that the only fallible step between
    // the two phases is Phase B itself, which compensation covers.
    let date_format = format_description!("[year]-[month]-[day]");
    let date_of_birth: String = draft
        .date_of_birth
        .format(&date_format)
        .map_err(|e| fail(format!("Failed to format date of birth: {e}")))?;

    // Phase A: provision the identity. Nothing to undo on failure.
    let identity_request: NewIdentity = NewIdentity::new(
        login_handle,
        draft.display_name.clone(),
        draft.email.clone(),
        MemberRole::Member.as_str().to_string(),
        credentials,
    );
    let identity: ExternalIdentity = authority
        .create_identity(&identity_request)
        .map_err(|e| fail(e.to_string()))?;

    debug!(
        external_id = %identity.external_id,
        "Provisioned identity for '{}'",
        draft.display_name
    );

    let record: NewMemberRecord = NewMemberRecord {
        member_id: identity.external_id.clone(),
        code: member_code,
        display_name: draft.display_name.clone(),
        email: draft.email,
        phone: draft.phone,
        date_of_birth,
        gender: draft.gender.as_str().to_string(),
        jersey_number: draft.jersey_number,
        address: draft.address,
        team_id,
        must_reset_credential: credentials.must_reset,
    };

    // Phase B: persist the member keyed by the Phase A external ID.
    match persistence.create_member(&record) {
        Ok(()) => {
            debug!(member_id = %record.member_id, "Enrolled member '{}'", record.display_name);
            Ok(record)
        }
        Err(persist_err) => {
            compensate(authority, &identity.external_id, &persist_err);
            Err(fail(persist_err.to_string()))
        }
    }
}

/// Deletes the identity created by a failed row's Phase A.
///
/// A failed compensation is a permanent inconsistency between the two
/// systems (an orphaned identity) and is logged at error severity,
/// distinctly from the ordinary row failure.
fn compensate(
    authority: &dyn IdentityAuthority,
    external_id: &str,
    persist_err: &PersistenceError,
) {
    match authority.delete_identity(external_id) {
        Ok(()) => {
            debug!(
                external_id = %external_id,
                "Compensated failed enrollment by deleting identity"
            );
        }
        Err(delete_err) => {
            error!(
                external_id = %external_id,
                persist_error = %persist_err,
                delete_error = %delete_err,
                "ORPHANED IDENTITY: compensation failed, identity exists with no member record"
            );
        }
    }
}
