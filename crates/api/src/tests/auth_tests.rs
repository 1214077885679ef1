// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::auth::{AuthError, AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
use crate::tests::helpers::{admin_actor, staff_actor};

#[test]
fn test_authenticate_stub_accepts_named_actor() {
    let actor: AuthenticatedActor =
        authenticate_stub(String::from("coach.kim"), Role::Staff).unwrap();
    assert_eq!(actor.id, "coach.kim");
    assert_eq!(actor.role, Role::Staff);
}

#[test]
fn test_authenticate_stub_rejects_blank_actor() {
    let result = authenticate_stub(String::from("   "), Role::Admin);
    assert!(matches!(result, Err(AuthError::AuthenticationFailed { .. })));
}

#[test]
fn test_admin_can_import_members() {
    assert!(AuthorizationService::authorize_import_members(&admin_actor()).is_ok());
}

#[test]
fn test_staff_can_import_members() {
    assert!(AuthorizationService::authorize_import_members(&staff_actor()).is_ok());
}

#[test]
fn test_admin_can_create_team() {
    assert!(AuthorizationService::authorize_create_team(&admin_actor()).is_ok());
}

#[test]
fn test_staff_cannot_create_team() {
    let result = AuthorizationService::authorize_create_team(&staff_actor());
    assert!(matches!(result, Err(AuthError::Unauthorized { .. })));
}
