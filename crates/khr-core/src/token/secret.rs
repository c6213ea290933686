// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Symmetric signing secret.

use std::fmt;

use jsonwebtoken::{DecodingKey, EncodingKey};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

/// Length in bytes of a generated secret (HS256 key size).
pub const SECRET_LENGTH: usize = 32;

/// An HMAC key used to sign and verify session tokens.
///
/// The raw `material` buffer is zeroized on drop. The cached jsonwebtoken
/// keys hold their own copies, which are not wiped.
pub struct SigningSecret {
    material: Zeroizing<Vec<u8>>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SigningSecret {
    /// Generates a fresh random secret from the operating system RNG.
    pub fn generate() -> Self {
        let mut material = Zeroizing::new(vec![0u8; SECRET_LENGTH]);
        OsRng.fill_bytes(material.as_mut_slice());
        Self::from_material(material)
    }

    /// Builds a secret from existing key bytes.
    ///
    /// Only used for verifying tokens produced elsewhere under a known key.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_material(Zeroizing::new(bytes.to_vec()))
    }

    fn from_material(material: Zeroizing<Vec<u8>>) -> Self {
        let encoding_key = EncodingKey::from_secret(&material);
        let decoding_key = DecodingKey::from_secret(&material);
        Self {
            material,
            encoding_key,
            decoding_key,
        }
    }

    /// Returns the key length in bytes.
    pub fn len(&self) -> usize {
        self.material.len()
    }

    /// Returns `true` if the key is empty.
    pub fn is_empty(&self) -> bool {
        self.material.is_empty()
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningSecret")
            .field("len", &self.material.len())
            .finish_non_exhaustive()
    }
}
