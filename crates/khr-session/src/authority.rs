// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! The session authority.
//!
//! Holds the single process-wide signing secret, issues tokens on
//! successful authentication and resolves tokens back to principals. The
//! secret rotates lazily: whichever call first observes it older than the
//! secret lifetime replaces it.
//!
//! ```text
//!   authenticate ─┐
//!   resolve ──────┼──▶ lock ─▶ stale? ─yes─▶ rotate ─▶ proceed
//!   invalidate ───┘                  └─no──────────────▶ proceed
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use khr_config::{AuthorityConfig, ConfigError};
use khr_core::digest::{self, SaltedHash};
use khr_core::token::{self, SigningSecret};
use khr_core::{Principal, SharedClock, SystemClock};
use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::credentials::{parse_user_id, CredentialFields, LoginAttempt};
use crate::error::{AuthError, AuthResult, AuthorityError, LoginError};
use crate::store::CredentialStore;

// =============================================================================
// IssuedToken
// =============================================================================

/// A freshly issued session token.
#[derive(Clone, PartialEq, Eq)]
pub struct IssuedToken {
    token: String,
    principal: Principal,
    issued_at: NaiveDateTime,
}

impl IssuedToken {
    /// Returns the token text.
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Consumes the wrapper and returns the token text.
    pub fn into_string(self) -> String {
        self.token
    }

    /// Returns the principal the token was issued to.
    pub fn principal(&self) -> Principal {
        self.principal
    }

    /// Returns the creation time written into the token.
    pub fn issued_at(&self) -> NaiveDateTime {
        self.issued_at
    }
}

impl AsRef<str> for IssuedToken {
    fn as_ref(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedToken")
            .field("principal", &self.principal)
            .field("issued_at", &self.issued_at)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// SecretState
// =============================================================================

struct SecretState {
    secret: SigningSecret,
    created_at: NaiveDateTime,
    generation: u64,
}

impl SecretState {
    fn new(now: NaiveDateTime) -> Self {
        Self {
            secret: SigningSecret::generate(),
            created_at: now,
            generation: 0,
        }
    }

    fn age(&self, now: NaiveDateTime) -> TimeDelta {
        now.signed_duration_since(self.created_at)
    }

    fn rotate(&mut self, now: NaiveDateTime, reason: &'static str) {
        self.secret = SigningSecret::generate();
        self.created_at = now;
        self.generation += 1;
        info!(generation = self.generation, reason, "Signing secret rotated");
    }
}

// =============================================================================
// SessionAuthority
// =============================================================================

/// Issues and resolves session tokens.
///
/// Cheap to share: wrap it in an [`Arc`] and hand clones to every request
/// handler.
pub struct SessionAuthority {
    config: AuthorityConfig,
    clock: SharedClock,
    session_lifetime: TimeDelta,
    secret_lifetime: TimeDelta,
    state: Mutex<SecretState>,
}

impl SessionAuthority {
    /// Creates an authority with the given configuration and the system
    /// clock.
    pub fn new(config: AuthorityConfig) -> Result<Self, AuthorityError> {
        Self::builder().config(config).build()
    }

    /// Creates a builder.
    pub fn builder() -> SessionAuthorityBuilder {
        SessionAuthorityBuilder::default()
    }

    /// Returns the configuration in effect.
    pub fn config(&self) -> &AuthorityConfig {
        &self.config
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Checks credentials and issues a token.
    ///
    /// A stale secret is rotated first, so the token is always signed by
    /// the secret that will verify it.
    pub fn authenticate(&self, credentials: &CredentialFields) -> AuthResult<IssuedToken> {
        let mut state = self.state.lock();
        let now = self.clock.now();
        if state.age(now) > self.secret_lifetime {
            state.rotate(now, "stale_on_authenticate");
        }

        let admin = &self.config.admin;
        let (principal, credential) = match credentials.classify(&admin.identity)? {
            LoginAttempt::Administrator { password } => {
                if !digest::password_matches(password, &admin.salt, &admin.hash) {
                    debug!("Administrator credentials rejected");
                    return Err(AuthError::InvalidAdminCredentials);
                }
                (Principal::Administrator, "")
            }
            LoginAttempt::User {
                id,
                email,
                password,
                salt,
                hash,
            } => {
                if !digest::password_matches(password, salt, hash) {
                    debug!("User credentials rejected");
                    return Err(AuthError::InvalidUserCredentials);
                }
                (Principal::User(parse_user_id(id)?), email)
            }
            LoginAttempt::Unrecognized => {
                debug!("Identity is neither administrator nor email");
                return Err(AuthError::BadRequest);
            }
        };

        let token = token::encode(principal.to_legacy_id(), credential, now, &state.secret)
            .map_err(|e| {
                error!(error = %e, "Failed to sign session token");
                AuthError::UnknownError
            })?;

        info!(
            principal = principal.kind(),
            generation = state.generation,
            "Session token issued"
        );

        Ok(IssuedToken {
            token,
            principal,
            issued_at: now.with_nanosecond(0).unwrap_or(now),
        })
    }

    /// Looks up `identity` in `store` and authenticates the result.
    ///
    /// The administrator bypasses the store entirely.
    pub async fn login<S>(
        &self,
        store: &S,
        identity: &str,
        password: &str,
    ) -> Result<IssuedToken, LoginError>
    where
        S: CredentialStore + ?Sized,
    {
        if identity == self.config.admin.identity {
            return Ok(self.authenticate(&CredentialFields::login(identity, password))?);
        }

        let stored = store.lookup(identity).await?.ok_or_else(|| {
            debug!("No stored credentials for login identity");
            LoginError::UnknownEmail
        })?;

        Ok(self.authenticate(&CredentialFields::from_stored(identity, password, &stored))?)
    }

    /// Mints a salt and hash for a new password using the configured salt
    /// length.
    pub fn new_credentials(&self, password: &str) -> SaltedHash {
        SaltedHash::with_salt(password, digest::random_salt(self.config.salt_length))
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolves a token to the principal it identifies.
    ///
    /// Never fails: anything that does not verify under the current secret
    /// is [`Principal::Anonymous`], and a session older than the session
    /// lifetime is [`Principal::Expired`].
    pub fn resolve(&self, token: &str) -> Principal {
        let mut state = self.state.lock();
        let now = self.clock.now();

        // Every outstanding token was signed by the secret being discarded.
        if state.age(now) > self.secret_lifetime {
            state.rotate(now, "stale_on_resolve");
            return Principal::Expired;
        }

        let claims = match token::decode(token, &state.secret) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(kind = e.kind(), "Token rejected");
                return Principal::Anonymous;
            }
        };

        if now.signed_duration_since(claims.created_at) > self.session_lifetime {
            debug!(created_at = %claims.created_at, "Session expired");
            return Principal::Expired;
        }

        claims.principal()
    }

    /// Resolves a token to the legacy integer id.
    pub fn resolve_legacy(&self, token: &str) -> i32 {
        self.resolve(token).to_legacy_id()
    }

    // =========================================================================
    // Rotation
    // =========================================================================

    /// Revokes every outstanding session.
    ///
    /// The secret rotates now and its creation time is pushed back past the
    /// secret lifetime, so the next `resolve` rotates once more and reports
    /// `Expired`.
    pub fn invalidate_all(&self) {
        let mut state = self.state.lock();
        let now = self.clock.now();
        state.rotate(now, "invalidate_all");

        let backdate = self.secret_lifetime + TimeDelta::seconds(1);
        state.created_at = now.checked_sub_signed(backdate).unwrap_or(NaiveDateTime::MIN);

        info!(generation = state.generation, "All sessions invalidated");
    }

    /// Returns how many times the secret has rotated.
    pub fn secret_generation(&self) -> u64 {
        self.state.lock().generation
    }

    /// Returns the age of the current secret.
    pub fn secret_age(&self) -> Duration {
        let state = self.state.lock();
        state
            .age(self.clock.now())
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Returns `true` if the next call will rotate the secret.
    pub fn is_stale(&self) -> bool {
        let state = self.state.lock();
        state.age(self.clock.now()) > self.secret_lifetime
    }
}

impl fmt::Debug for SessionAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionAuthority")
            .field("config", &self.config)
            .field("generation", &self.secret_generation())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// SessionAuthorityBuilder
// =============================================================================

/// Builder for [`SessionAuthority`].
#[derive(Default)]
pub struct SessionAuthorityBuilder {
    config: Option<AuthorityConfig>,
    clock: Option<SharedClock>,
}

impl SessionAuthorityBuilder {
    /// Sets the configuration.
    pub fn config(mut self, config: AuthorityConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the clock.
    pub fn clock(mut self, clock: SharedClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Validates the configuration, checks the digest and creates the first
    /// secret.
    pub fn build(self) -> Result<SessionAuthority, AuthorityError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        digest::self_test()?;

        let session_lifetime = to_delta("session_lifetime", config.session_lifetime)?;
        let secret_lifetime = to_delta("secret_lifetime", config.secret_lifetime)?;

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock) as SharedClock);
        let state = SecretState::new(clock.now());

        info!(
            session_lifetime = ?config.session_lifetime,
            secret_lifetime = ?config.secret_lifetime,
            "Session authority ready"
        );

        Ok(SessionAuthority {
            config,
            clock,
            session_lifetime,
            secret_lifetime,
            state: Mutex::new(state),
        })
    }
}

fn to_delta(field: &str, duration: Duration) -> Result<TimeDelta, ConfigError> {
    TimeDelta::from_std(duration).map_err(|_| ConfigError::validation(field, "duration is too large"))
}

// =============================================================================
// Tests
// =============================================================================
