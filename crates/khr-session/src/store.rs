// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Credential lookup collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use khr_core::{SaltedHash, UserId};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Stored credentials of a registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// Owner of the credentials.
    pub principal_id: UserId,
    /// Stored salt and hash.
    #[serde(flatten)]
    pub salted: SaltedHash,
}

impl StoredCredentials {
    /// Creates a stored record.
    pub fn new(principal_id: UserId, salted: SaltedHash) -> Self {
        Self {
            principal_id,
            salted,
        }
    }
}

/// Looks up stored credentials by email.
///
/// Owned by the user-management side; the authority only reads through it.
/// The administrator never has a record here.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the credentials registered for `email`, or `None`.
    async fn lookup(&self, email: &str) -> Result<Option<StoredCredentials>, StoreError>;
}

#[async_trait]
impl<T: CredentialStore + ?Sized> CredentialStore for Arc<T> {
    async fn lookup(&self, email: &str) -> Result<Option<StoredCredentials>, StoreError> {
        (**self).lookup(email).await
    }
}
