// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors returned by an identity authority.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// An identity with this email already exists in the authority.
    #[error("An account with email '{email}' already exists in the identity directory")]
    DuplicateEmail { email: String },

    /// The requested identity does not exist.
    #[error("No identity found with external ID '{external_id}'")]
    NotFound { external_id: String },

    /// The request was rejected before any identity was created.
    #[error("Identity request rejected: {0}")]
    InvalidRequest(String),

    /// The authority could not be reached or refused service.
    #[error("Identity directory unavailable: {0}")]
    Unavailable(String),
}
