// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API-level errors.
//!
//! API errors are batch-fatal: they reject the request before any row
//! is processed. Row-scoped failures never surface here; they are
//! collected into the response's failure list instead.

use club_roster_persistence::PersistenceError;

use crate::auth::AuthError;

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// The caller's local actor record could not be resolved or created.
    ///
    /// Without a resolved caller no audit entry can be attributed, so
    /// the batch aborts before any row is touched.
    CallerUnresolvable {
        /// The caller's external identity handle.
        handle: String,
        /// Why resolution failed.
        reason: String,
    },
    /// The batch contained no rows.
    EmptyBatch,
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The local directory could not be reached.
    StoreUnavailable {
        /// A human-readable description of the error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
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
            Self::CallerUnresolvable { handle, reason } => {
                write!(f, "Caller '{handle}' could not be resolved: {reason}")
            }
            Self::EmptyBatch => write!(f, "Import batch must contain at least one row"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::StoreUnavailable { message } => {
                write!(f, "Local directory unavailable: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::StoreUnavailable {
            message: err.to_string(),
        }
    }
}
