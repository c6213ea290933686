// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Mock Implementations
//!
//! In-memory stand-ins for the collaborators of the session authority.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use khr_session::{CredentialStore, StoreError, StoredCredentials};

use super::fixtures::TestAccount;

// =============================================================================
// MemoryCredentialStore
// =============================================================================

/// A credential store backed by a concurrent map, with error injection.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    records: DashMap<String, StoredCredentials>,
    fail_lookups: AtomicBool,
    lookup_count: AtomicU64,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given accounts.
    pub fn with_accounts(accounts: impl IntoIterator<Item = TestAccount>) -> Self {
        let store = Self::new();
        for account in accounts {
            store.register(&account);
        }
        store
    }

    /// Adds or replaces an account.
    pub fn register(&self, account: &TestAccount) {
        self.records.insert(
            account.email.to_string(),
            StoredCredentials::new(account.id, account.stored.clone()),
        );
    }

    /// Removes an account.
    pub fn remove(&self, email: &str) -> Option<StoredCredentials> {
        self.records.remove(email).map(|(_, record)| record)
    }

    /// Makes every subsequent lookup fail.
    pub fn set_fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    /// Number of lookups performed so far.
    pub fn lookup_count(&self) -> u64 {
        self.lookup_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn lookup(&self, email: &str) -> Result<Option<StoredCredentials>, StoreError> {
        self.lookup_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(StoreError::new("simulated store failure"));
        }
        Ok(self.records.get(email).map(|r| r.value().clone()))
    }
}
