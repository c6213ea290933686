// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Session authority error types.
//!
//! ```text
//! AuthError       - the four ways `authenticate` can refuse to issue a token
//! LoginError      - credential lookup failures around `authenticate`
//! StoreError      - the credential store could not answer
//! AuthorityError  - the authority could not be constructed
//! ```

use khr_config::ConfigError;
use khr_core::DigestError;
use thiserror::Error;

/// Result type alias for authentication.
pub type AuthResult<T> = Result<T, AuthError>;

// =============================================================================
// AuthError
// =============================================================================

/// Reasons `authenticate` refuses to issue a token.
///
/// The administrator and user rejections stay distinct so operators and end
/// users can be shown different messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AuthError {
    /// Wrong administrator password.
    #[error("Invalid administrator credentials")]
    InvalidAdminCredentials,

    /// Wrong user password.
    #[error("Invalid user credentials")]
    InvalidUserCredentials,

    /// The identity is neither the administrator nor an email address.
    #[error("Bad request")]
    BadRequest,

    /// A required field was missing or unusable.
    ///
    /// Deliberately does not say which field; callers treat this as an
    /// internal failure rather than a validation message.
    #[error("Unknown error")]
    UnknownError,
}

impl AuthError {
    /// Returns the message the legacy string channel used for this case.
    pub fn legacy_message(&self) -> &'static str {
        match self {
            AuthError::InvalidAdminCredentials => "unauthorized admin",
            AuthError::InvalidUserCredentials => "unauthorized koalibee",
            AuthError::BadRequest => "bad request",
            AuthError::UnknownError => "unknown error",
        }
    }

    /// Returns `true` if the credentials were well-formed but wrong.
    pub fn is_credential_rejection(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidAdminCredentials | AuthError::InvalidUserCredentials
        )
    }

    /// Returns a stable error code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidAdminCredentials => "INVALID_ADMIN_CREDENTIALS",
            AuthError::InvalidUserCredentials => "INVALID_USER_CREDENTIALS",
            AuthError::BadRequest => "BAD_REQUEST",
            AuthError::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

// =============================================================================
// StoreError
// =============================================================================

/// The credential store failed to answer a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Credential store error: {message}")]
pub struct StoreError {
    /// Error message.
    pub message: String,
}

impl StoreError {
    /// Creates a store error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// =============================================================================
// LoginError
// =============================================================================

/// Failures of the lookup-then-authenticate login flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// No credentials are registered for the email.
    #[error("No account registered for this email")]
    UnknownEmail,

    /// The credential store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The authority refused the credentials.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl LoginError {
    /// Returns the authentication error, if that is what this is.
    pub fn as_auth_error(&self) -> Option<AuthError> {
        match self {
            LoginError::Auth(e) => Some(*e),
            _ => None,
        }
    }
}

// =============================================================================
// AuthorityError
// =============================================================================

/// The session authority could not start.
#[derive(Debug, Error)]
pub enum AuthorityError {
    /// Password hashing is unusable.
    #[error(transparent)]
    DigestUnavailable(#[from] DigestError),

    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
