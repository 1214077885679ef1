// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Import row validation and normalization.
//!
//! Rows arrive untrusted from the caller and are validated individually at
//! processing time. The only hard requirement is a contact email; every
//! other attribute either carries a safe default (date of birth, gender)
//! or is optional.

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::DomainError;
use crate::types::Gender;

/// One untrusted entry of a bulk member import.
///
/// This is a loosely-typed bag of attributes exactly as supplied by the
/// caller. Validation and defaulting happen in [`validate_row`], not at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRow {
    /// The member's display name.
    pub display_name: String,
    /// The member's contact email. Required; rows without one fail.
    pub email: Option<String>,
    /// Optional phone number (free text, stored as supplied).
    pub phone: Option<String>,
    /// Optional date of birth (ISO 8601 date string).
    pub date_of_birth: Option<String>,
    /// Optional free-text gender tag.
    pub gender: Option<String>,
    /// Optional jersey number.
    pub jersey_number: Option<i32>,
    /// Optional free-text address.
    pub address: Option<String>,
    /// Optional external team code.
    pub team_code: Option<String>,
}

/// The validated, normalized form of an [`ImportRow`].
///
/// A draft is safe to persist: the email is present and trimmed, the date
/// of birth and gender carry their documented defaults, and the team code
/// is either a non-empty trimmed string or absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDraft {
    /// The member's display name, trimmed.
    pub display_name: String,
    /// The member's contact email, trimmed.
    pub email: String,
    /// Optional phone number, trimmed.
    pub phone: Option<String>,
    /// The member's date of birth. Falls back to today (UTC) when the
    /// supplied value is absent or unparseable.
    pub date_of_birth: Date,
    /// The member's gender, normalized to the closed set.
    pub gender: Gender,
    /// Optional jersey number (0-999).
    pub jersey_number: Option<i32>,
    /// Optional free-text address, trimmed.
    pub address: Option<String>,
    /// Optional external team code, trimmed and non-empty.
    pub team_code: Option<String>,
}

/// Trims a value and drops it entirely if nothing remains.
fn trim_optional(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parses an ISO 8601 date, falling back to today (UTC).
///
/// An absent or unparseable date of birth is not a row failure; the
/// documented default is "now".
fn parse_date_of_birth(value: Option<&String>) -> Date {
    let format = format_description!("[year]-[month]-[day]");
    value
        .and_then(|s| Date::parse(s.trim(), &format).ok())
        .unwrap_or_else(|| OffsetDateTime::now_utc().date())
}

/// Validates and normalizes one import row into a [`MemberDraft`].
///
/// # Arguments
///
/// * `row` - The untrusted row to validate
///
/// # Errors
///
/// Returns an error if:
/// - The contact email is absent or blank
/// - A supplied jersey number is outside 0-999
pub fn validate_row(row: &ImportRow) -> Result<MemberDraft, DomainError> {
    let display_name: String = row.display_name.trim().to_string();

    let Some(email) = trim_optional(row.email.as_ref()) else {
        return Err(DomainError::MissingEmail { display_name });
    };

    if let Some(value) = row.jersey_number
        && !(0..=999).contains(&value)
    {
        return Err(DomainError::InvalidJerseyNumber { value });
    }

    let gender: Gender = row
        .gender
        .as_deref()
        .map_or(Gender::Unspecified, Gender::normalize);

    Ok(MemberDraft {
        display_name,
        email,
        phone: trim_optional(row.phone.as_ref()),
        date_of_birth: parse_date_of_birth(row.date_of_birth.as_ref()),
        gender,
        jersey_number: row.jersey_number,
        address: trim_optional(row.address.as_ref()),
        team_code: trim_optional(row.team_code.as_ref()),
    })
}
