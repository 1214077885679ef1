// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::tests::helpers::test_persistence;
use crate::{ActorData, Persistence, PersistenceError};

#[test]
fn test_create_and_fetch_actor() {
    let mut persistence: Persistence = test_persistence();

    persistence
        .create_actor(
            "coach-jane",
            "ACT-000042",
            "Jane Coach",
            "jane@club.example",
            "admin",
        )
        .unwrap();

    let actor: ActorData = persistence
        .get_actor_by_id("coach-jane")
        .unwrap()
        .expect("Actor should exist");

    assert_eq!(actor.actor_id, "coach-jane");
    assert_eq!(actor.code, "ACT-000042");
    assert_eq!(actor.display_name, "Jane Coach");
    assert_eq!(actor.email, "jane@club.example");
    assert_eq!(actor.role, "admin");
    assert!(!actor.created_at.is_empty());
}

#[test]
fn test_missing_actor_returns_none() {
    let mut persistence: Persistence = test_persistence();

    assert!(persistence.get_actor_by_id("nobody").unwrap().is_none());
}

#[test]
fn test_duplicate_actor_id_is_a_unique_violation() {
    let mut persistence: Persistence = test_persistence();

    persistence
        .create_actor("coach-jane", "ACT-000001", "Jane", "jane@club.example", "admin")
        .unwrap();

    let result: Result<(), PersistenceError> = persistence.create_actor(
        "coach-jane",
        "ACT-000002",
        "Other Jane",
        "other@club.example",
        "admin",
    );

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_duplicate_actor_email_is_a_unique_violation() {
    let mut persistence: Persistence = test_persistence();

    persistence
        .create_actor("coach-jane", "ACT-000001", "Jane", "shared@club.example", "admin")
        .unwrap();

    let result: Result<(), PersistenceError> = persistence.create_actor(
        "coach-john",
        "ACT-000002",
        "John",
        "shared@club.example",
        "admin",
    );

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}
