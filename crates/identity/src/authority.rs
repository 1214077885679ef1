// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identity authority abstraction.
//!
//! The identity authority is the external system of record for login
//! accounts. The local store never owns credentials; it only keeps the
//! authority's external ID as a foreign reference.

use serde::{Deserialize, Serialize};

use crate::error::IdentityError;

/// Policy for credentials assigned to newly created identities.
///
/// Every identity created by a bulk import receives the same fixed
/// initial credential and is required to change it on first sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPolicy {
    /// The credential assigned to every newly created identity.
    pub initial_credential: String,
    /// Whether the identity must change its credential on first sign-in.
    pub must_reset: bool,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            initial_credential: String::from("Roster#Welcome1"),
            must_reset: true,
        }
    }
}

/// A request to create a new identity in the authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIdentity {
    /// The generated login handle for the new account.
    pub login_handle: String,
    /// The human-readable display name.
    pub display_name: String,
    /// The contact email. Must be unique within the authority.
    pub email: String,
    /// The account's role tag within the authority.
    pub role: String,
    /// The initial credential assigned to the account.
    pub initial_credential: String,
    /// Whether the account must change its credential on first sign-in.
    pub must_reset_credential: bool,
}

impl NewIdentity {
    /// Creates a new identity request under the given credential policy.
    #[must_use]
    pub fn new(
        login_handle: String,
        display_name: String,
        email: String,
        role: String,
        policy: &CredentialPolicy,
    ) -> Self {
        Self {
            login_handle,
            display_name,
            email,
            role,
            initial_credential: policy.initial_credential.clone(),
            must_reset_credential: policy.must_reset,
        }
    }
}

/// An identity as known by the authority after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdentity {
    /// The authority-assigned identifier. This is the only value the
    /// local store keeps to refer back to the account.
    pub external_id: String,
    /// The login handle the account was created with.
    pub login_handle: String,
    /// The display name the account was created with.
    pub display_name: String,
    /// The email the account was created with.
    pub email: String,
    /// The role tag the account was created with.
    pub role: String,
}

/// The operations the roster system needs from an identity authority.
///
/// Implementations must be safe to share across request handlers.
pub trait IdentityAuthority: Send + Sync {
    /// Creates a new identity in the authority.
    ///
    /// # Errors
    ///
    /// * `IdentityError::DuplicateEmail` if the email is already taken
    /// * `IdentityError::InvalidRequest` if the request is malformed
    /// * `IdentityError::Unavailable` if the authority cannot be reached
    fn create_identity(&self, request: &NewIdentity) -> Result<ExternalIdentity, IdentityError>;

    /// Deletes an identity from the authority.
    ///
    /// Used to undo a creation when the local half of an enrollment
    /// fails. Deleting an identity that does not exist is an error.
    ///
    /// # Errors
    ///
    /// * `IdentityError::NotFound` if no identity has this external ID
    /// * `IdentityError::Unavailable` if the authority cannot be reached
    fn delete_identity(&self, external_id: &str) -> Result<(), IdentityError>;
}
