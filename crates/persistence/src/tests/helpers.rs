// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{NewMemberRecord, Persistence};

/// Creates a fresh in-memory persistence adapter.
pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

/// Creates an actor with plausible defaults.
pub fn seed_actor(persistence: &mut Persistence, actor_id: &str) {
    persistence
        .create_actor(
            actor_id,
            &format!("ACT-{actor_id}"),
            "Test Actor",
            &format!("{actor_id}@club.invalid"),
            "member",
        )
        .expect("Failed to seed actor");
}

/// Builds a member record with plausible defaults.
pub fn member_record(member_id: &str, code: &str, email: &str) -> NewMemberRecord {
    NewMemberRecord {
        member_id: member_id.to_string(),
        code: code.to_string(),
        display_name: String::from("Jane Doe"),
        email: email.to_string(),
        phone: Some(String::from("555-0100")),
        date_of_birth: String::from("2008-03-14"),
        gender: String::from("female"),
        jersey_number: Some(9),
        address: Some(String::from("1 Club Way")),
        team_id: None,
        must_reset_credential: true,
    }
}
