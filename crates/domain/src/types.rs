// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Gender classification for a member record.
///
/// This is a closed set. Import rows carry free-text gender tags; anything
/// that does not match a known value normalizes to [`Gender::Unspecified`]
/// rather than failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Gender {
    /// Female.
    Female,
    /// Male.
    Male,
    /// No gender recorded, or the supplied tag was not recognized.
    #[default]
    Unspecified,
}

impl Gender {
    /// Converts this gender to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Unspecified => "Unspecified",
        }
    }

    /// Normalizes a free-text gender tag to a member of the closed set.
    ///
    /// Matching is case-insensitive and accepts common single-letter
    /// abbreviations. Unrecognized or empty input normalizes to
    /// [`Gender::Unspecified`]; this function never fails.
    #[must_use]
    pub fn normalize(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "female" | "f" => Self::Female,
            "male" | "m" => Self::Male,
            _ => Self::Unspecified,
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Female" => Ok(Self::Female),
            "Male" => Ok(Self::Male),
            "Unspecified" => Ok(Self::Unspecified),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role tag attached to directory records and provisioned identities.
///
/// Roles distinguish actors (people operating the system) from members
/// (managed accounts created on their behalf during an import). The role
/// is always an explicit input to the component that needs it; it is never
/// read from shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberRole {
    /// A system actor: a staff account that can operate the directory.
    Actor,
    /// A managed member: a subordinate account created by an import. The
    /// member must reset the issued credential on first login.
    Member,
}

impl MemberRole {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Actor => "Actor",
            Self::Member => "Member",
        }
    }
}

impl FromStr for MemberRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Actor" => Ok(Self::Actor),
            "Member" => Ok(Self::Member),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
