// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use club_roster_domain::ImportRow;
use club_roster_identity::InMemoryIdentityAuthority;
use club_roster_persistence::Persistence;

use crate::auth::{AuthenticatedActor, Role};

/// Creates a fresh in-memory persistence adapter.
pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

/// Creates a fresh in-memory identity authority.
pub fn test_authority() -> InMemoryIdentityAuthority {
    InMemoryIdentityAuthority::new()
}

/// An authenticated admin caller.
pub fn admin_actor() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin.user"), Role::Admin)
}

/// An authenticated staff caller.
pub fn staff_actor() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("staff.user"), Role::Staff)
}

/// A valid import row with plausible defaults.
pub fn valid_row(display_name: &str, email: &str) -> ImportRow {
    ImportRow {
        display_name: display_name.to_string(),
        email: Some(email.to_string()),
        phone: Some(String::from("555-0100")),
        date_of_birth: Some(String::from("2008-03-14")),
        gender: Some(String::from("female")),
        jersey_number: Some(7),
        address: Some(String::from("1 Club Way")),
        team_code: None,
    }
}

/// A valid import row referencing a team code.
pub fn row_with_team(display_name: &str, email: &str, team_code: &str) -> ImportRow {
    ImportRow {
        team_code: Some(team_code.to_string()),
        ..valid_row(display_name, email)
    }
}

/// An invalid row with no contact email.
pub fn row_without_email(display_name: &str) -> ImportRow {
    ImportRow {
        email: None,
        ..valid_row(display_name, "unused@club.invalid")
    }
}
