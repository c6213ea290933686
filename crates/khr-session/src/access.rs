// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Authorization decisions over resolved principals.
//!
//! Every protected operation maps the principal returned by
//! [`SessionAuthority::resolve`](crate::SessionAuthority::resolve) to a
//! decision here:
//!
//! | Principal       | Outcome                                   |
//! |-----------------|-------------------------------------------|
//! | `Anonymous`     | [`AccessDenied::Unauthorized`]            |
//! | `Expired`       | [`AccessDenied::SessionExpired`]          |
//! | `Administrator` | granted                                   |
//! | `User(id)`      | granted if `id` owns the resource         |
//!
//! Public reads are the exception: anonymous callers may read public
//! resources.

use khr_core::{Principal, UserId};
use thiserror::Error;
use tracing::debug;

/// Result of an authorization check.
pub type AccessResult = Result<AccessLevel, AccessDenied>;

// =============================================================================
// AccessLevel
// =============================================================================

/// Why access was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessLevel {
    /// The administrator, granted everywhere.
    Administrator,
    /// The signed-in user owns the resource.
    Owner,
    /// A signed-in user, ownership not required.
    Member,
    /// Anyone, the resource is public.
    Public,
}

impl AccessLevel {
    /// Returns `true` if the caller may act on behalf of the owner.
    pub fn is_privileged(self) -> bool {
        matches!(self, AccessLevel::Administrator | AccessLevel::Owner)
    }
}

// =============================================================================
// AccessDenied
// =============================================================================

/// Why access was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AccessDenied {
    /// Not signed in, or not allowed. Does not reveal whether the resource
    /// exists.
    #[error("Unauthorized")]
    Unauthorized,

    /// The session timed out; the caller should sign in again.
    #[error("Session expired")]
    SessionExpired,
}

impl AccessDenied {
    /// Returns the HTTP status the legacy controllers answered with.
    pub fn status_code(self) -> u16 {
        match self {
            AccessDenied::Unauthorized => 401,
            AccessDenied::SessionExpired => 417,
        }
    }

    /// Returns a stable error code for programmatic handling.
    pub fn error_code(self) -> &'static str {
        match self {
            AccessDenied::Unauthorized => "UNAUTHORIZED",
            AccessDenied::SessionExpired => "SESSION_EXPIRED",
        }
    }
}

// =============================================================================
// Checks
// =============================================================================

/// Administrator only.
pub fn require_admin(principal: Principal) -> AccessResult {
    match principal {
        Principal::Administrator => Ok(AccessLevel::Administrator),
        other => deny(other),
    }
}

/// Any signed-in principal.
pub fn require_authenticated(principal: Principal) -> AccessResult {
    match principal {
        Principal::Administrator => Ok(AccessLevel::Administrator),
        Principal::User(_) => Ok(AccessLevel::Member),
        other => deny(other),
    }
}

/// The administrator or the user owning the resource.
pub fn require_owner(principal: Principal, owner: UserId) -> AccessResult {
    match principal {
        Principal::Administrator => Ok(AccessLevel::Administrator),
        Principal::User(id) if id == owner => Ok(AccessLevel::Owner),
        other => deny(other),
    }
}

/// Read access to a resource.
///
/// Public resources are readable by anyone whose session has not expired.
/// Private resources need the owner or the administrator; a private
/// resource without an owner is administrator-only.
pub fn authorize_read(principal: Principal, owner: Option<UserId>, is_public: bool) -> AccessResult {
    if principal == Principal::Expired {
        return deny(principal);
    }

    match (principal, owner) {
        (Principal::Administrator, _) => Ok(AccessLevel::Administrator),
        (Principal::User(id), Some(owner)) if id == owner => Ok(AccessLevel::Owner),
        _ if is_public => Ok(AccessLevel::Public),
        (other, Some(owner)) => require_owner(other, owner),
        (other, None) => require_admin(other),
    }
}

fn deny(principal: Principal) -> AccessResult {
    let denied = match principal {
        Principal::Expired => AccessDenied::SessionExpired,
        _ => AccessDenied::Unauthorized,
    };
    debug!(principal = principal.kind(), reason = denied.error_code(), "Access denied");
    Err(denied)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i32) -> Principal {
        Principal::User(UserId::new(id).unwrap())
    }

    fn uid(id: i32) -> UserId {
        UserId::new(id).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AccessDenied::Unauthorized.status_code(), 401);
        assert_eq!(AccessDenied::SessionExpired.status_code(), 417);
    }

    #[test]
    fn test_require_admin() {
        assert_eq!(require_admin(Principal::Administrator), Ok(AccessLevel::Administrator));
        assert_eq!(require_admin(user(1)), Err(AccessDenied::Unauthorized));
        assert_eq!(require_admin(Principal::Anonymous), Err(AccessDenied::Unauthorized));
        assert_eq!(require_admin(Principal::Expired), Err(AccessDenied::SessionExpired));
    }

    #[test]
    fn test_require_authenticated() {
        assert_eq!(require_authenticated(user(9)), Ok(AccessLevel::Member));
        assert_eq!(
            require_authenticated(Principal::Administrator),
            Ok(AccessLevel::Administrator)
        );
        assert_eq!(require_authenticated(Principal::Anonymous), Err(AccessDenied::Unauthorized));
        assert_eq!(require_authenticated(Principal::Expired), Err(AccessDenied::SessionExpired));
    }

    #[test]
    fn test_require_owner() {
        assert_eq!(require_owner(user(3), uid(3)), Ok(AccessLevel::Owner));
        assert_eq!(require_owner(user(4), uid(3)), Err(AccessDenied::Unauthorized));
        assert_eq!(
            require_owner(Principal::Administrator, uid(3)),
            Ok(AccessLevel::Administrator)
        );
        assert_eq!(require_owner(Principal::Expired, uid(3)), Err(AccessDenied::SessionExpired));
    }

    #[test]
    fn test_public_read_allows_anonymous() {
        assert_eq!(
            authorize_read(Principal::Anonymous, Some(uid(3)), true),
            Ok(AccessLevel::Public)
        );
        assert_eq!(authorize_read(user(4), Some(uid(3)), true), Ok(AccessLevel::Public));
        assert_eq!(authorize_read(user(3), Some(uid(3)), true), Ok(AccessLevel::Owner));
    }

    #[test]
    fn test_private_read_requires_owner() {
        assert_eq!(
            authorize_read(Principal::Anonymous, Some(uid(3)), false),
            Err(AccessDenied::Unauthorized)
        );
        assert_eq!(
            authorize_read(user(4), Some(uid(3)), false),
            Err(AccessDenied::Unauthorized)
        );
        assert_eq!(authorize_read(user(3), Some(uid(3)), false), Ok(AccessLevel::Owner));
        assert_eq!(authorize_read(user(3), None, false), Err(AccessDenied::Unauthorized));
        assert_eq!(
            authorize_read(Principal::Administrator, None, false),
            Ok(AccessLevel::Administrator)
        );
    }

    #[test]
    fn test_expired_read_is_distinct() {
        assert_eq!(
            authorize_read(Principal::Expired, Some(uid(3)), true),
            Err(AccessDenied::SessionExpired)
        );
        assert_eq!(
            authorize_read(Principal::Expired, None, false),
            Err(AccessDenied::SessionExpired)
        );
    }

    #[test]
    fn test_privileged_levels() {
        assert!(AccessLevel::Administrator.is_privileged());
        assert!(AccessLevel::Owner.is_privileged());
        assert!(!AccessLevel::Member.is_privileged());
        assert!(!AccessLevel::Public.is_privileged());
    }
}
