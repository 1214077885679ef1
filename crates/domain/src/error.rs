// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The contact email is missing. Email is the one required field of an
    /// import row; without it no identity can be provisioned.
    MissingEmail {
        /// The display name of the row, for error reporting.
        display_name: String,
    },
    /// A gender string did not match the closed set.
    ///
    /// This only occurs when parsing a stored value; free-text import tags
    /// are normalized leniently and never produce this error.
    InvalidGender(String),
    /// A role string did not match the closed set.
    InvalidRole(String),
    /// A jersey number was outside the accepted range.
    InvalidJerseyNumber {
        /// The rejected value.
        value: i32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEmail { display_name } => {
                write!(f, "Contact email is required for '{display_name}'")
            }
            Self::InvalidGender(value) => write!(f, "Invalid gender: '{value}'"),
            Self::InvalidRole(value) => write!(f, "Invalid role: '{value}'"),
            Self::InvalidJerseyNumber { value } => {
                write!(f, "Invalid jersey number: {value}. Must be between 0 and 999")
            }
        }
    }
}

impl std::error::Error for DomainError {}
