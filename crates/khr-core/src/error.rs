// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Error types for the digest and token layers.
//!
//! ```text
//! TokenError   - a token failed structural or signature verification
//! DigestError  - the hashing primitive failed its self-test
//! ```
//!
//! `TokenError` never reaches callers of the session authority's `resolve`;
//! it is flattened into [`Principal::Anonymous`](crate::Principal::Anonymous)
//! there. It is still a distinct type so the codec can be tested on its own.

use thiserror::Error;

/// Result type alias for token operations.
pub type TokenResult<T> = Result<T, TokenError>;

// =============================================================================
// TokenError
// =============================================================================

/// Errors raised by the token codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token is not a well-formed compact JWS.
    #[error("Malformed token: {0}")]
    Malformed(String),

    /// The signature does not verify under the supplied secret.
    #[error("Token signature mismatch")]
    InvalidSignature,

    /// The token was signed with an algorithm other than the one in use.
    #[error("Unexpected token algorithm")]
    InvalidAlgorithm,

    /// Claims are missing, unexpected, or of the wrong type.
    #[error("Invalid token claims: {0}")]
    InvalidClaims(String),

    /// The creation timestamp could not be parsed.
    #[error("Invalid creation timestamp: {0}")]
    InvalidTimestamp(String),

    /// Signing failed.
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

impl TokenError {
    /// Creates a malformed token error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Creates an invalid claims error.
    pub fn invalid_claims(message: impl Into<String>) -> Self {
        Self::InvalidClaims(message.into())
    }

    /// Creates a signing error.
    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing(message.into())
    }

    /// Returns `true` if the token itself was rejected, as opposed to a
    /// failure while producing one.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Signing(_))
    }

    /// Returns a short, stable label for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "malformed",
            Self::InvalidSignature => "signature",
            Self::InvalidAlgorithm => "algorithm",
            Self::InvalidClaims(_) => "claims",
            Self::InvalidTimestamp(_) => "timestamp",
            Self::Signing(_) => "signing",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                TokenError::InvalidAlgorithm
            }
            ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Utf8(_) => {
                TokenError::malformed(err.to_string())
            }
            ErrorKind::Json(e) => TokenError::invalid_claims(e.to_string()),
            ErrorKind::MissingRequiredClaim(claim) => {
                TokenError::invalid_claims(format!("missing claim `{}`", claim))
            }
            _ => TokenError::malformed(err.to_string()),
        }
    }
}

// =============================================================================
// DigestError
// =============================================================================

/// The hashing primitive is unusable.
///
/// This is fatal: the authority refuses to start rather than run without
/// password hashing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("SHA-256 digest unavailable: expected {expected}, got {actual}")]
pub struct DigestError {
    /// Digest of the known-answer vector.
    pub expected: String,
    /// Digest actually produced.
    pub actual: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_classification() {
        assert!(TokenError::InvalidSignature.is_rejection());
        assert!(TokenError::malformed("x").is_rejection());
        assert!(!TokenError::signing("x").is_rejection());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(TokenError::InvalidSignature.kind(), "signature");
        assert_eq!(TokenError::invalid_claims("x").kind(), "claims");
        assert_eq!(TokenError::InvalidTimestamp("x".into()).kind(), "timestamp");
    }
}
