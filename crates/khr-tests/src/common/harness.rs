// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Test Harness
//!
//! A session authority on a manual clock with a populated credential store.

use std::sync::Arc;
use std::time::Duration;

use khr_config::AuthorityConfig;
use khr_core::ManualClock;
use khr_session::{CredentialFields, IssuedToken, SessionAuthority};

use super::fixtures::{all_accounts, test_authority_config, TestAccount, ADMIN_PASSWORD};
use super::mocks::MemoryCredentialStore;

/// Authority, clock and store wired together.
pub struct SessionHarness {
    /// Authority under test.
    pub authority: Arc<SessionAuthority>,
    /// Clock driving the authority.
    pub clock: Arc<ManualClock>,
    /// Store holding the fixture accounts.
    pub store: Arc<MemoryCredentialStore>,
}

impl SessionHarness {
    /// Creates a harness with the test configuration.
    pub fn new() -> Self {
        Self::with_config(test_authority_config())
    }

    /// Creates a harness with a custom configuration.
    pub fn with_config(config: AuthorityConfig) -> Self {
        let clock = Arc::new(ManualClock::starting_now());
        let authority = SessionAuthority::builder()
            .config(config)
            .clock(clock.clone())
            .build()
            .expect("Failed to build session authority");

        Self {
            authority: Arc::new(authority),
            clock,
            store: Arc::new(MemoryCredentialStore::with_accounts(all_accounts())),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }

    /// Signs in the administrator.
    pub fn login_admin(&self) -> IssuedToken {
        self.authority
            .authenticate(&CredentialFields::login("admin", ADMIN_PASSWORD))
            .expect("Administrator login failed")
    }

    /// Signs in a fixture account.
    pub fn login_user(&self, account: &TestAccount) -> IssuedToken {
        self.authority
            .authenticate(&CredentialFields::user(
                account.id,
                account.email,
                account.password,
                &account.stored,
            ))
            .expect("User login failed")
    }
}

impl Default for SessionHarness {
    fn default() -> Self {
        Self::new()
    }
}
