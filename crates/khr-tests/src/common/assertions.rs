// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Custom Test Assertions

use khr_core::{Principal, UserId};
use khr_session::SessionAuthority;

/// Assertion extensions for token resolution.
pub trait ResolveAssertions {
    /// Assert that `token` resolves to `expected`.
    fn assert_resolves_to(&self, token: &str, expected: Principal);

    /// Assert that `token` resolves to the given user.
    fn assert_resolves_to_user(&self, token: &str, id: UserId);

    /// Assert that `token` resolves to `Anonymous`.
    fn assert_anonymous(&self, token: &str);

    /// Assert that `token` resolves to `Expired`.
    fn assert_expired(&self, token: &str);
}

impl ResolveAssertions for SessionAuthority {
    fn assert_resolves_to(&self, token: &str, expected: Principal) {
        let actual = self.resolve(token);
        assert_eq!(
            actual, expected,
            "Expected token to resolve to {}, got {}",
            expected, actual
        );
    }

    fn assert_resolves_to_user(&self, token: &str, id: UserId) {
        self.assert_resolves_to(token, Principal::User(id));
    }

    fn assert_anonymous(&self, token: &str) {
        self.assert_resolves_to(token, Principal::Anonymous);
    }

    fn assert_expired(&self, token: &str) {
        self.assert_resolves_to(token, Principal::Expired);
    }
}
