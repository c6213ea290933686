// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Access Integration Tests
//!
//! Authorization decisions on principals resolved from real tokens.

use khr_core::AUTH_TOKEN_HEADER;
use khr_session::{
    authorize_read, require_admin, require_authenticated, require_owner, AccessDenied,
    AccessLevel,
};
use khr_tests::common::*;

#[test]
fn test_access_header_name() {
    assert_eq!(AUTH_TOKEN_HEADER, "Auth-Token");
}

#[test]
fn test_access_admin_token_grants_everything() {
    let harness = SessionHarness::new();
    let principal = harness.authority.resolve(harness.login_admin().as_str());
    let owner = account_koalibee().id;

    assert_eq!(require_admin(principal), Ok(AccessLevel::Administrator));
    assert_eq!(require_owner(principal, owner), Ok(AccessLevel::Administrator));
    assert_eq!(require_authenticated(principal), Ok(AccessLevel::Administrator));
    assert_eq!(
        authorize_read(principal, Some(owner), false),
        Ok(AccessLevel::Administrator)
    );
}

#[test]
fn test_access_owner_only() {
    let harness = SessionHarness::new();
    let owner = account_koalibee();
    let other = account_to_being();

    let owner_principal = harness.authority.resolve(harness.login_user(&owner).as_str());
    let other_principal = harness.authority.resolve(harness.login_user(&other).as_str());

    assert_eq!(require_owner(owner_principal, owner.id), Ok(AccessLevel::Owner));
    assert_eq!(
        require_owner(other_principal, owner.id),
        Err(AccessDenied::Unauthorized)
    );
    assert_eq!(require_admin(owner_principal), Err(AccessDenied::Unauthorized));
    assert_eq!(require_authenticated(other_principal), Ok(AccessLevel::Member));
}

#[test]
fn test_access_anonymous_token() {
    let harness = SessionHarness::new();
    let principal = harness.authority.resolve(GARBAGE_TOKEN);
    let owner = account_koalibee().id;

    let denied = require_owner(principal, owner).unwrap_err();
    assert_eq!(denied, AccessDenied::Unauthorized);
    assert_eq!(denied.status_code(), 401);

    assert_eq!(authorize_read(principal, Some(owner), true), Ok(AccessLevel::Public));
    assert_eq!(
        authorize_read(principal, Some(owner), false),
        Err(AccessDenied::Unauthorized)
    );
}

#[test]
fn test_access_expired_token_is_distinct() {
    let harness = SessionHarness::new();
    let owner = account_koalibee();
    let issued = harness.login_user(&owner);

    harness.advance(SESSION_LIFETIME + ONE_SECOND);
    let principal = harness.authority.resolve(issued.as_str());

    let denied = require_owner(principal, owner.id).unwrap_err();
    assert_eq!(denied, AccessDenied::SessionExpired);
    assert_eq!(denied.status_code(), 417);
    assert_eq!(
        authorize_read(principal, Some(owner.id), true),
        Err(AccessDenied::SessionExpired)
    );
}

#[test]
fn test_access_after_invalidate_all() {
    let harness = SessionHarness::new();
    let issued = harness.login_admin();
    harness.authority.invalidate_all();

    let first = harness.authority.resolve(issued.as_str());
    let second = harness.authority.resolve(issued.as_str());

    assert_eq!(require_admin(first), Err(AccessDenied::SessionExpired));
    assert_eq!(require_admin(second), Err(AccessDenied::Unauthorized));
}
