// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Core Integration Tests
//!
//! - `test_digest_*`: hashing, salts, constant-time comparison
//! - `test_token_*`: token codec and legacy interoperability
//! - `test_principal_*`: legacy id mapping

use chrono::NaiveDate;
use khr_core::digest::{self, DEFAULT_SALT_LENGTH};
use khr_core::token::{self, SigningSecret, TIMESTAMP_FORMAT};
use khr_core::{Principal, SaltedHash, TokenError, UserId};
use khr_tests::common::*;

// =============================================================================
// Digest Tests
// =============================================================================

#[test]
fn test_digest_known_vectors() {
    assert_eq!(digest::hash("my awesome test"), HASH_MY_AWESOME_TEST);
    assert_eq!(digest::hash("rxh1234"), HASH_RXH1234);
    assert_eq!(
        SaltedHash::with_salt("super secret", "1234").hash,
        HASH_SUPER_SECRET_1234
    );
    assert!(digest::self_test().is_ok());
}

#[test]
fn test_digest_password_matches() {
    assert!(digest::password_matches("super secret", "1234", HASH_SUPER_SECRET_1234));
    assert!(!digest::password_matches("super secret", "1235", HASH_SUPER_SECRET_1234));
    assert!(!digest::password_matches("Super secret", "1234", HASH_SUPER_SECRET_1234));
    assert!(!digest::password_matches("super secret", "1234", ""));
}

#[test]
fn test_digest_salts_are_alphanumeric_and_vary() {
    let salts: Vec<String> = (0..32).map(|_| digest::standard_salt()).collect();
    for salt in &salts {
        assert_eq!(salt.len(), DEFAULT_SALT_LENGTH);
        assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    let distinct: std::collections::HashSet<&String> = salts.iter().collect();
    assert!(distinct.len() > 1);

    assert_eq!(digest::random_salt(16).len(), 16);
}

#[test]
fn test_digest_generated_credentials_verify() {
    for account in all_accounts() {
        assert!(account.stored.matches(account.password));
        assert!(!account.stored.matches("wrong"));
    }
}

// =============================================================================
// Token Tests
// =============================================================================

#[test]
fn test_token_legacy_tokens_decode() {
    let secret = SigningSecret::from_bytes(LEGACY_SECRET);

    let claims = token::decode(LEGACY_TOKEN_999, &secret).unwrap();
    assert_eq!(claims.principal_id, 999);
    assert_eq!(claims.credential, "john@mailinator.com");
    assert_eq!(
        claims.created_at,
        NaiveDate::from_ymd_opt(2017, 9, 9)
            .unwrap()
            .and_hms_opt(22, 30, 15)
            .unwrap()
    );

    let claims = token::decode(LEGACY_TOKEN_1, &secret).unwrap();
    assert_eq!(claims.principal_id, 1);
    assert_eq!(claims.credential, "test@test.net");
}

#[test]
fn test_token_legacy_tokens_fail_under_fresh_secret() {
    let secret = SigningSecret::generate();
    assert_eq!(
        token::decode(LEGACY_TOKEN_999, &secret),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_token_round_trip_with_fresh_secret() {
    let secret = SigningSecret::generate();
    let created = NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();

    let token = token::encode(4, "my.email@koalibee.com", created, &secret).unwrap();
    let claims = token::decode(&token, &secret).unwrap();

    assert_eq!(claims.principal(), Principal::User(UserId::new(4).unwrap()));
    assert_eq!(claims.credential, "my.email@koalibee.com");
    assert_eq!(claims.created_at.format(TIMESTAMP_FORMAT).to_string(), "2024-02-29T23:59:59");
}

#[test]
fn test_token_rejects_garbage() {
    let secret = SigningSecret::generate();
    for input in [GARBAGE_TOKEN, "", "a.b.c", "...."] {
        let err = token::decode(input, &secret).unwrap_err();
        assert!(err.is_rejection(), "unexpected error for {:?}: {:?}", input, err);
    }
}

// =============================================================================
// Principal Tests
// =============================================================================

#[test]
fn test_principal_legacy_ids() {
    assert_eq!(Principal::from_legacy_id(-777), Principal::Administrator);
    assert_eq!(Principal::from_legacy_id(0), Principal::Anonymous);
    assert_eq!(Principal::from_legacy_id(-1), Principal::Expired);
    assert_eq!(
        Principal::from_legacy_id(42),
        Principal::User(UserId::new(42).unwrap())
    );

    for principal in [
        Principal::Administrator,
        Principal::Anonymous,
        Principal::Expired,
        Principal::User(UserId::new(42).unwrap()),
    ] {
        assert_eq!(Principal::from_legacy_id(principal.to_legacy_id()), principal);
    }
}
