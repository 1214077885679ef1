// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization.

/// Actor roles for authorization.
///
/// Roles determine what actions an authenticated actor may perform.
/// The caller's role is always passed in explicitly; no component
/// reads it from shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Admin role: full structural authority, including team creation.
    Admin,
    /// Staff role: club staff entrusted with member enrollment.
    Staff,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated actor with an associated role.
///
/// The `id` is the caller's external identity handle as resolved by the
/// upstream authentication layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The caller's external identity handle.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The caller's external identity handle
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }
}

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Stub authentication function.
///
/// This is a minimal placeholder. It does NOT implement real
/// authentication - the upstream layer is expected to have validated
/// credentials and resolved the caller's external identity handle.
///
/// # Arguments
///
/// * `actor_id` - The caller's external identity handle
/// * `role` - The role to assign to the actor
///
/// # Returns
///
/// An authenticated actor if successful.
///
/// # Errors
///
/// Returns an error if the handle is blank.
pub fn authenticate_stub(actor_id: String, role: Role) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.trim().is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(actor_id, role))
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor is authorized to import members.
    ///
    /// Both Admin and Staff actors may run member imports.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Never fails for the current role set; the gate exists so new
    /// roles are denied by default.
    pub const fn authorize_import_members(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin | Role::Staff => Ok(()),
        }
    }

    /// Checks if an actor is authorized to create a team.
    ///
    /// Only Admin actors may create teams.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_create_team(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Staff => Err(AuthError::Unauthorized {
                action: String::from("create_team"),
                required_role: String::from("Admin"),
            }),
        }
    }
}
