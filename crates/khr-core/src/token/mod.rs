// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Signed session tokens.
//!
//! A token is an HS256 JWS in compact serialization carrying exactly three
//! claims (`koalibeeId`, `email`, `timeCreated`). It has no key id and no
//! expiry claim: it only ever verifies under the secret that signed it, and
//! its age is judged by the session authority.

mod claims;
mod codec;
mod secret;

pub use claims::{SessionClaims, TIMESTAMP_FORMAT};
pub use codec::{decode, encode, ALGORITHM};
pub use secret::{SigningSecret, SECRET_LENGTH};
