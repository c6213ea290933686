// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Principals a session token can resolve to.
//!
//! Existing clients exchange principals as a single signed integer:
//!
//! | value  | meaning                                   |
//! |--------|-------------------------------------------|
//! | `> 0`  | registered user id                        |
//! | `-777` | the system administrator                  |
//! | `0`    | no valid principal                        |
//! | `-1`   | session expired, re-authenticate          |
//!
//! Inside the crate the closed [`Principal`] enum is used instead; the
//! integers only appear at the boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Legacy id of the administrator.
pub const ADMINISTRATOR_ID: i32 = -777;
/// Legacy id for "no valid principal".
pub const ANONYMOUS_ID: i32 = 0;
/// Legacy id for "session expired".
pub const EXPIRED_ID: i32 = -1;

// =============================================================================
// UserId
// =============================================================================

/// Numeric identity of a registered user. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct UserId(i32);

impl UserId {
    /// Creates a user id, rejecting zero and negative values.
    pub fn new(id: i32) -> Option<Self> {
        if id > 0 {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Returns the raw id.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for UserId {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        UserId::new(value).ok_or_else(|| format!("user id must be positive, got {}", value))
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Principal
// =============================================================================

/// The identity behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Principal {
    /// No token, or a token that failed verification.
    Anonymous,
    /// A structurally valid session that is too old, or a request that hit
    /// a secret rotation.
    Expired,
    /// The built-in system administrator.
    Administrator,
    /// A registered user.
    User(UserId),
}

impl Principal {
    /// Converts a legacy integer into a principal.
    ///
    /// Negative values other than the two sentinels have no meaning and map
    /// to `Anonymous`.
    pub fn from_legacy_id(id: i32) -> Self {
        match id {
            ADMINISTRATOR_ID => Principal::Administrator,
            EXPIRED_ID => Principal::Expired,
            id => UserId::new(id).map_or(Principal::Anonymous, Principal::User),
        }
    }

    /// Flattens the principal to the legacy integer.
    pub fn to_legacy_id(self) -> i32 {
        match self {
            Principal::Anonymous => ANONYMOUS_ID,
            Principal::Expired => EXPIRED_ID,
            Principal::Administrator => ADMINISTRATOR_ID,
            Principal::User(id) => id.get(),
        }
    }

    /// Returns `true` for the administrator and registered users.
    pub fn is_authenticated(self) -> bool {
        matches!(self, Principal::Administrator | Principal::User(_))
    }

    /// Returns `true` for the administrator.
    pub fn is_administrator(self) -> bool {
        matches!(self, Principal::Administrator)
    }

    /// Returns the user id if this is a registered user.
    pub fn user_id(self) -> Option<UserId> {
        match self {
            Principal::User(id) => Some(id),
            _ => None,
        }
    }

    /// Returns a short label for structured logging.
    pub fn kind(self) -> &'static str {
        match self {
            Principal::Anonymous => "anonymous",
            Principal::Expired => "expired",
            Principal::Administrator => "administrator",
            Principal::User(_) => "user",
        }
    }
}

impl Default for Principal {
    fn default() -> Self {
        Principal::Anonymous
    }
}

impl From<UserId> for Principal {
    fn from(id: UserId) -> Self {
        Principal::User(id)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Principal::User(id) => write!(f, "user:{}", id),
            other => f.write_str(other.kind()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_sentinels() {
        assert_eq!(Principal::from_legacy_id(-777), Principal::Administrator);
        assert_eq!(Principal::from_legacy_id(-1), Principal::Expired);
        assert_eq!(Principal::from_legacy_id(0), Principal::Anonymous);
        assert_eq!(Principal::from_legacy_id(-42), Principal::Anonymous);
        assert_eq!(
            Principal::from_legacy_id(5),
            Principal::User(UserId::new(5).unwrap())
        );
    }

    #[test]
    fn test_to_legacy_id() {
        assert_eq!(Principal::Administrator.to_legacy_id(), -777);
        assert_eq!(Principal::Expired.to_legacy_id(), -1);
        assert_eq!(Principal::Anonymous.to_legacy_id(), 0);
        assert_eq!(Principal::User(UserId::new(76).unwrap()).to_legacy_id(), 76);
    }

    #[test]
    fn test_user_id_rejects_non_positive() {
        assert!(UserId::new(0).is_none());
        assert!(UserId::new(-777).is_none());
        assert_eq!(UserId::new(1).map(UserId::get), Some(1));
        assert!(UserId::try_from(-3).is_err());
    }

    #[test]
    fn test_predicates() {
        let user = Principal::User(UserId::new(9).unwrap());
        assert!(user.is_authenticated());
        assert!(!user.is_administrator());
        assert_eq!(user.user_id().map(UserId::get), Some(9));

        assert!(Principal::Administrator.is_authenticated());
        assert!(!Principal::Expired.is_authenticated());
        assert!(!Principal::Anonymous.is_authenticated());
    }

    #[test]
    fn test_display() {
        assert_eq!(Principal::User(UserId::new(3).unwrap()).to_string(), "user:3");
        assert_eq!(Principal::Administrator.to_string(), "administrator");
    }
}
