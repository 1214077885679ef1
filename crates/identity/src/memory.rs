// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory identity authority.
//!
//! Stands in for the real directory in tests and single-node
//! deployments. Enforces the same email-uniqueness rule the real
//! authority would, and can be flipped unavailable to exercise
//! failure paths.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tracing::debug;

use crate::authority::{ExternalIdentity, IdentityAuthority, NewIdentity};
use crate::error::IdentityError;

/// An identity authority backed by process memory.
pub struct InMemoryIdentityAuthority {
    identities: Mutex<HashMap<String, ExternalIdentity>>,
    next_id: AtomicU64,
    available: AtomicBool,
    deletes_fail: AtomicBool,
}

impl InMemoryIdentityAuthority {
    /// Creates a new, empty authority.
    #[must_use]
    pub fn new() -> Self {
        Self {
            identities: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            available: AtomicBool::new(true),
            deletes_fail: AtomicBool::new(false),
        }
    }

    /// Marks the authority available or unavailable. While unavailable,
    /// every operation returns `IdentityError::Unavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Makes every subsequent delete fail while creates still succeed.
    /// Exercises the orphaned-identity path.
    pub fn set_deletes_fail(&self, fail: bool) {
        self.deletes_fail.store(fail, Ordering::SeqCst);
    }

    /// Returns whether an identity with this external ID exists.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Unavailable` if the backing map is poisoned.
    pub fn contains(&self, external_id: &str) -> Result<bool, IdentityError> {
        let identities = self
            .identities
            .lock()
            .map_err(|_| IdentityError::Unavailable(String::from("identity store poisoned")))?;
        Ok(identities.contains_key(external_id))
    }

    /// Returns the number of identities currently held.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Unavailable` if the backing map is poisoned.
    pub fn identity_count(&self) -> Result<usize, IdentityError> {
        let identities = self
            .identities
            .lock()
            .map_err(|_| IdentityError::Unavailable(String::from("identity store poisoned")))?;
        Ok(identities.len())
    }

    fn check_available(&self) -> Result<(), IdentityError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(IdentityError::Unavailable(String::from(
                "directory offline",
            )))
        }
    }
}

impl Default for InMemoryIdentityAuthority {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityAuthority for InMemoryIdentityAuthority {
    fn create_identity(&self, request: &NewIdentity) -> Result<ExternalIdentity, IdentityError> {
        self.check_available()?;

        if request.email.trim().is_empty() {
            return Err(IdentityError::InvalidRequest(String::from(
                "email must not be empty",
            )));
        }
        if request.login_handle.trim().is_empty() {
            return Err(IdentityError::InvalidRequest(String::from(
                "login handle must not be empty",
            )));
        }

        let mut identities = self
            .identities
            .lock()
            .map_err(|_| IdentityError::Unavailable(String::from("identity store poisoned")))?;

        if identities
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&request.email))
        {
            return Err(IdentityError::DuplicateEmail {
                email: request.email.clone(),
            });
        }

        let id: u64 = self.next_id.fetch_add(1, Ordering::SeqCst);
        let external_id: String = format!("idp-{id}");

        let identity: ExternalIdentity = ExternalIdentity {
            external_id: external_id.clone(),
            login_handle: request.login_handle.clone(),
            display_name: request.display_name.clone(),
            email: request.email.clone(),
            role: request.role.clone(),
        };

        debug!(external_id = %external_id, email = %request.email, "Created identity");
        identities.insert(external_id, identity.clone());

        Ok(identity)
    }

    fn delete_identity(&self, external_id: &str) -> Result<(), IdentityError> {
        self.check_available()?;

        if self.deletes_fail.load(Ordering::SeqCst) {
            return Err(IdentityError::Unavailable(String::from(
                "directory refused delete",
            )));
        }

        let mut identities = self
            .identities
            .lock()
            .map_err(|_| IdentityError::Unavailable(String::from("identity store poisoned")))?;

        if identities.remove(external_id).is_none() {
            return Err(IdentityError::NotFound {
                external_id: external_id.to_string(),
            });
        }

        debug!(external_id = %external_id, "Deleted identity");
        Ok(())
    }
}
