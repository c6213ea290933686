// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Configuration schema for the session authority.
//!
//! ```toml
//! session_lifetime = "30m"
//! secret_lifetime = "24h"
//! salt_length = 4
//!
//! [admin]
//! identity = "admin"
//! salt = "ADMIN"
//! hash = "D780C505B2308EBD462B5622497E1ACAE98B34C12895692404BB0A4AE7B937C7"
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Identity string that selects the administrator login path.
pub const DEFAULT_ADMIN_IDENTITY: &str = "admin";
/// Compiled-in administrator salt.
pub const DEFAULT_ADMIN_SALT: &str = "ADMIN";
/// Compiled-in administrator password hash.
pub const DEFAULT_ADMIN_HASH: &str =
    "D780C505B2308EBD462B5622497E1ACAE98B34C12895692404BB0A4AE7B937C7";

/// Default maximum age of a token's creation time.
pub const DEFAULT_SESSION_LIFETIME: Duration = Duration::from_secs(30 * 60);
/// Default lifetime of a signing secret before it is rotated.
pub const DEFAULT_SECRET_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);
/// Default salt length for new credentials.
pub const DEFAULT_SALT_LENGTH: usize = 4;

const MAX_SALT_LENGTH: usize = 64;

// =============================================================================
// AuthorityConfig
// =============================================================================

/// Session authority configuration.
///
/// The two lifetimes are independent clocks: a token expires when its own
/// creation time is older than `session_lifetime`, and every token dies when
/// the secret that signed it is older than `secret_lifetime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorityConfig {
    /// Maximum token age.
    #[serde(with = "humantime_serde")]
    pub session_lifetime: Duration,
    /// Maximum signing secret age.
    #[serde(with = "humantime_serde")]
    pub secret_lifetime: Duration,
    /// Salt length for newly registered credentials.
    pub salt_length: usize,
    /// Administrator account.
    pub admin: AdminConfig,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            session_lifetime: DEFAULT_SESSION_LIFETIME,
            secret_lifetime: DEFAULT_SECRET_LIFETIME,
            salt_length: DEFAULT_SALT_LENGTH,
            admin: AdminConfig::default(),
        }
    }
}

impl AuthorityConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the session lifetime.
    pub fn with_session_lifetime(mut self, lifetime: Duration) -> Self {
        self.session_lifetime = lifetime;
        self
    }

    /// Sets the secret lifetime.
    pub fn with_secret_lifetime(mut self, lifetime: Duration) -> Self {
        self.secret_lifetime = lifetime;
        self
    }

    /// Sets the administrator account.
    pub fn with_admin(mut self, admin: AdminConfig) -> Self {
        self.admin = admin;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.session_lifetime.is_zero() {
            return Err(ConfigError::validation(
                "session_lifetime",
                "must be greater than zero",
            ));
        }
        if self.secret_lifetime.is_zero() {
            return Err(ConfigError::validation(
                "secret_lifetime",
                "must be greater than zero",
            ));
        }
        if self.salt_length == 0 || self.salt_length > MAX_SALT_LENGTH {
            return Err(ConfigError::validation(
                "salt_length",
                format!("must be between 1 and {}", MAX_SALT_LENGTH),
            ));
        }
        if self.session_lifetime > self.secret_lifetime {
            tracing::warn!(
                session_lifetime = ?self.session_lifetime,
                secret_lifetime = ?self.secret_lifetime,
                "Session lifetime exceeds secret lifetime; sessions will end at rotation"
            );
        }

        self.admin.validate()
    }
}

// =============================================================================
// AdminConfig
// =============================================================================

/// The single administrator account.
///
/// The administrator has no row in the credential store. Without explicit
/// configuration the compiled-in salt and hash are used.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Identity that selects the administrator path at login.
    pub identity: String,
    /// Salt appended to the password before hashing.
    pub salt: String,
    /// Uppercase hex SHA-256 of `password ++ salt`.
    pub hash: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            identity: DEFAULT_ADMIN_IDENTITY.to_string(),
            salt: DEFAULT_ADMIN_SALT.to_string(),
            hash: DEFAULT_ADMIN_HASH.to_string(),
        }
    }
}

impl AdminConfig {
    /// Creates an administrator account from a salt and hash.
    pub fn new(salt: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            identity: DEFAULT_ADMIN_IDENTITY.to_string(),
            salt: salt.into(),
            hash: hash.into(),
        }
    }

    /// Returns `true` if the compiled-in credentials are in use.
    pub fn is_builtin(&self) -> bool {
        self.salt == DEFAULT_ADMIN_SALT && self.hash == DEFAULT_ADMIN_HASH
    }

    /// Validates the account.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.identity.is_empty() {
            return Err(ConfigError::validation("admin.identity", "must not be empty"));
        }
        if self.identity.contains('@') {
            return Err(ConfigError::validation(
                "admin.identity",
                "must not look like an email address",
            ));
        }
        if self.hash.len() != 64
            || !self
                .hash
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        {
            return Err(ConfigError::validation(
                "admin.hash",
                "must be 64 uppercase hexadecimal characters",
            ));
        }
        if self.is_builtin() {
            tracing::warn!("Administrator uses the compiled-in credentials");
        }
        Ok(())
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("identity", &self.identity)
            .field("builtin", &self.is_builtin())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
