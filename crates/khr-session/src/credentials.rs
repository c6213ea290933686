// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Credential fields supplied to `authenticate`.
//!
//! Collaborators hand over a flat map of named fields. For a user login the
//! user-management service has already looked up the stored salt and hash
//! and passes them alongside the candidate password; for the administrator
//! only the identity and password are needed.

use std::collections::HashMap;

use khr_core::{SaltedHash, UserId};

use crate::error::AuthError;
use crate::store::StoredCredentials;

/// Field names of the credential map.
pub mod fields {
    /// Login identity: the administrator name or an email address.
    pub const IDENTITY: &str = "email";
    /// Candidate password.
    pub const PASSWORD: &str = "password";
    /// Numeric user id.
    pub const PRINCIPAL_ID: &str = "koalibeeId";
    /// Stored salt.
    pub const PASSWORD_SALT: &str = "passwordSalt";
    /// Stored hash.
    pub const PASSWORD_HASH: &str = "passwordHash";
}

/// Returns `true` if `identity` is plausibly an email address.
///
/// Same rule the registration flow applies: an `@` and at least five
/// characters.
pub fn looks_like_email(identity: &str) -> bool {
    identity.contains('@') && identity.chars().count() >= 5
}

// =============================================================================
// CredentialFields
// =============================================================================

/// Named credential fields.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialFields {
    fields: HashMap<String, String>,
}

impl CredentialFields {
    /// Creates an empty set of fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity and password only (administrator login, or a user login
    /// before the store lookup).
    pub fn login(identity: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new()
            .with(fields::IDENTITY, identity)
            .with(fields::PASSWORD, password)
    }

    /// A complete user login: candidate password plus the stored record.
    pub fn user(
        id: UserId,
        email: impl Into<String>,
        password: impl Into<String>,
        stored: &SaltedHash,
    ) -> Self {
        Self::login(email, password)
            .with(fields::PRINCIPAL_ID, id.get().to_string())
            .with(fields::PASSWORD_SALT, stored.salt.clone())
            .with(fields::PASSWORD_HASH, stored.hash.clone())
    }

    /// A user login assembled from a credential store record.
    pub fn from_stored(
        email: impl Into<String>,
        password: impl Into<String>,
        stored: &StoredCredentials,
    ) -> Self {
        Self::user(stored.principal_id, email, password, &stored.salted)
    }

    /// Adds or replaces a field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Removes a field.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.fields.remove(key)
    }

    /// Returns a field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns `true` if no fields are present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Classifies the fields into a login attempt.
    ///
    /// Missing fields collapse to [`AuthError::UnknownError`]; a password is
    /// required before the identity is even looked at. The user id is left
    /// unparsed until the password has been checked.
    pub(crate) fn classify(&self, admin_identity: &str) -> Result<LoginAttempt<'_>, AuthError> {
        let password = self.require(fields::PASSWORD)?;
        let identity = self.require(fields::IDENTITY)?;

        if identity == admin_identity {
            return Ok(LoginAttempt::Administrator { password });
        }

        if !looks_like_email(identity) {
            return Ok(LoginAttempt::Unrecognized);
        }

        Ok(LoginAttempt::User {
            id: self.get(fields::PRINCIPAL_ID),
            email: identity,
            password,
            salt: self.require(fields::PASSWORD_SALT)?,
            hash: self.require(fields::PASSWORD_HASH)?,
        })
    }

    fn require(&self, key: &str) -> Result<&str, AuthError> {
        self.get(key).ok_or(AuthError::UnknownError)
    }
}

impl From<HashMap<String, String>> for CredentialFields {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CredentialFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl std::fmt::Debug for CredentialFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("CredentialFields")
            .field("keys", &keys)
            .field("identity", &self.get(fields::IDENTITY))
            .finish()
    }
}

// =============================================================================
// LoginAttempt
// =============================================================================

/// A classified set of credential fields.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LoginAttempt<'a> {
    Administrator {
        password: &'a str,
    },
    User {
        id: Option<&'a str>,
        email: &'a str,
        password: &'a str,
        salt: &'a str,
        hash: &'a str,
    },
    Unrecognized,
}

/// Parses the raw `koalibeeId` field of a user login.
pub(crate) fn parse_user_id(raw: Option<&str>) -> Result<UserId, AuthError> {
    raw.and_then(|id| id.trim().parse::<i32>().ok())
        .and_then(UserId::new)
        .ok_or(AuthError::UnknownError)
}

// =============================================================================
// Tests
// =============================================================================
