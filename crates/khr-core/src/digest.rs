// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Salt generation and salted SHA-256 password digests.
//!
//! Stored credentials are a `(salt, hash)` pair where
//! `hash = SHA256(password ++ salt)` rendered as uppercase hex.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::DigestError;

/// Salt length used for newly registered credentials.
pub const DEFAULT_SALT_LENGTH: usize = 4;

const SELF_TEST_INPUT: &str = "my awesome test";
const SELF_TEST_DIGEST: &str = "4A267D7E1092445AD84D59668C0BB7CE14C5108F5EFD6D5B0923A66AE1F77AB2";

/// Returns a random alphanumeric string of `length` characters.
///
/// Salts are not secret; the thread-local RNG is sufficient.
pub fn random_salt(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns a salt of [`DEFAULT_SALT_LENGTH`] characters.
pub fn standard_salt() -> String {
    random_salt(DEFAULT_SALT_LENGTH)
}

/// SHA-256 over the UTF-8 bytes of `message`, as uppercase hex.
pub fn hash(message: &str) -> String {
    let digest = Sha256::digest(message.as_bytes());
    hex::encode_upper(digest)
}

/// Returns `true` iff `hash(candidate ++ salt)` equals `stored_hash`.
///
/// The comparison runs in constant time with respect to the hash contents.
pub fn password_matches(candidate: &str, salt: &str, stored_hash: &str) -> bool {
    let mut salted = String::with_capacity(candidate.len() + salt.len());
    salted.push_str(candidate);
    salted.push_str(salt);

    let computed = hash(&salted);
    computed.as_bytes().ct_eq(stored_hash.as_bytes()).into()
}

/// Checks the digest primitive against a known-answer vector.
pub fn self_test() -> Result<(), DigestError> {
    let actual = hash(SELF_TEST_INPUT);
    if actual == SELF_TEST_DIGEST {
        Ok(())
    } else {
        Err(DigestError {
            expected: SELF_TEST_DIGEST.to_string(),
            actual,
        })
    }
}

// =============================================================================
// SaltedHash
// =============================================================================

/// A salt and the digest of a password combined with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaltedHash {
    /// Random salt appended to the password before hashing.
    pub salt: String,
    /// Uppercase hex SHA-256 of `password ++ salt`.
    pub hash: String,
}

impl SaltedHash {
    /// Creates credentials for `password` with a fresh standard-length salt.
    pub fn generate(password: &str) -> Self {
        Self::with_salt(password, standard_salt())
    }

    /// Creates credentials for `password` with the given salt.
    pub fn with_salt(password: &str, salt: impl Into<String>) -> Self {
        let salt = salt.into();
        let hash = hash(&format!("{}{}", password, salt));
        Self { salt, hash }
    }

    /// Returns `true` if `candidate` matches these credentials.
    pub fn matches(&self, candidate: &str) -> bool {
        password_matches(candidate, &self.salt, &self.hash)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_salt_length() {
        assert_eq!(standard_salt().len(), DEFAULT_SALT_LENGTH);
    }

    #[test]
    fn test_random_salt_lengths() {
        assert_eq!(random_salt(8).len(), 8);
        assert_eq!(random_salt(20).len(), 20);
        assert!(random_salt(0).is_empty());
        assert!(random_salt(64).chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_known_digests() {
        assert_eq!(
            hash("my awesome test"),
            "4A267D7E1092445AD84D59668C0BB7CE14C5108F5EFD6D5B0923A66AE1F77AB2"
        );
        assert_eq!(
            hash("my really awesome test"),
            "D21919579A20CBB6DFF468E88F153A44DBEFE7F0235E8DCCF4966E0BBDFF673A"
        );
        assert_eq!(
            hash("the most awesome test ever"),
            "75CBD08DDA7EFA080A50F971C3C07093C196CE7413D88E0343F4E13830D65B5A"
        );
    }

    #[test]
    fn test_password_matches() {
        let stored = "85A229B2DF222B37718CA2C8D0971C6641B87878261BA6684C94BC6CC772F466";
        assert!(password_matches("super secret", "1234", stored));
        assert!(!password_matches("SUPER secret", "1234", stored));

        assert!(password_matches(
            "genius",
            "aSg2",
            "CEDC02E9FD32E3440B78B52FB10E82D57BC92A88EA76211C4D220296E95318B0"
        ));
        assert!(!password_matches(
            "no good Man",
            "tDD4",
            "A3B7AB19B83E6AFA9D26A5E914211A2C6D261EE23A2C0DD6D5046A09C48C4925"
        ));
    }

    #[test]
    fn test_password_matches_rejects_lowercase_and_truncated() {
        let stored = hash("rxh1234");
        assert!(password_matches("rxh", "1234", &stored));
        assert!(!password_matches("rxh", "1234", &stored.to_lowercase()));
        assert!(!password_matches("rxh", "1234", &stored[..32]));
        assert!(!password_matches("rxh", "1234", ""));
    }

    #[test]
    fn test_salted_hash_generate() {
        let creds = SaltedHash::generate("hunter22");
        assert_eq!(creds.salt.len(), DEFAULT_SALT_LENGTH);
        assert_eq!(creds.hash.len(), 64);
        assert!(creds.matches("hunter22"));
        assert!(!creds.matches("hunter23"));
    }

    #[test]
    fn test_salted_hash_with_salt() {
        let creds = SaltedHash::with_salt("rxh", "1234");
        assert_eq!(
            creds.hash,
            "110066E9AF477CDD58A678E33CD4BD19FAAF3AF90A691D3AD981791CBAEE85CB"
        );
    }

    #[test]
    fn test_self_test_passes() {
        assert!(self_test().is_ok());
    }
}
