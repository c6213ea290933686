// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # khr-core
//!
//! Leaf building blocks of the Koality session authority.
//!
//! - **Digest**: salt generation, salted SHA-256, password comparison
//! - **Token**: signing secrets and the compact signed token codec
//! - **Principal**: the closed set of identities a token can resolve to
//! - **Clock**: injectable wall clock used for token and secret ages
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use khr_core::token::{self, SigningSecret};
//!
//! let secret = SigningSecret::generate();
//! let created_at = NaiveDate::from_ymd_opt(2024, 5, 1)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//!
//! let jws = token::encode(42, "fan@koality.io", created_at, &secret).unwrap();
//! let claims = token::decode(&jws, &secret).unwrap();
//! assert_eq!(claims.principal_id, 42);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod clock;
pub mod digest;
pub mod error;
pub mod principal;
pub mod token;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use digest::{hash, password_matches, random_salt, standard_salt, SaltedHash};
pub use error::{DigestError, TokenError, TokenResult};
pub use principal::{Principal, UserId, ADMINISTRATOR_ID, ANONYMOUS_ID, EXPIRED_ID};
pub use token::{SessionClaims, SigningSecret};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Request header under which the HTTP layer carries session tokens.
pub const AUTH_TOKEN_HEADER: &str = "Auth-Token";
