// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # khr-session
//!
//! Session authority for the Koality album marketplace.
//!
//! - **Authentication**: administrator and user credential checks, token issuance
//! - **Resolution**: token to principal, with session expiry
//! - **Rotation**: lazy signing-secret rotation and global invalidation
//! - **Access**: authorization decisions over resolved principals
//!
//! ## Quick Start
//!
//! ```
//! use khr_core::{Principal, SaltedHash, UserId};
//! use khr_session::{CredentialFields, SessionAuthority};
//!
//! let authority = SessionAuthority::new(Default::default()).unwrap();
//!
//! let stored = SaltedHash::generate("rxh1234");
//! let fields = CredentialFields::user(
//!     UserId::new(4).unwrap(),
//!     "my.email@koalibee.com",
//!     "rxh1234",
//!     &stored,
//! );
//!
//! let issued = authority.authenticate(&fields).unwrap();
//! assert_eq!(authority.resolve(issued.as_str()), Principal::User(UserId::new(4).unwrap()));
//! assert_eq!(authority.resolve("garbage-not-a-token"), Principal::Anonymous);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod access;
pub mod authority;
pub mod credentials;
pub mod error;
pub mod store;

pub use access::{
    authorize_read, require_admin, require_authenticated, require_owner, AccessDenied,
    AccessLevel, AccessResult,
};
pub use authority::{IssuedToken, SessionAuthority, SessionAuthorityBuilder};
pub use credentials::{fields, looks_like_email, CredentialFields};
pub use error::{AuthError, AuthResult, AuthorityError, LoginError, StoreError};
pub use store::{CredentialStore, StoredCredentials};
