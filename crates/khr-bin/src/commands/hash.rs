// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `hash` command.

use khr_core::digest::{self, SaltedHash};
use tracing::debug;

use crate::cli::HashArgs;
use crate::error::{BinError, BinResult};

/// Hashes a password and prints the salt and hash.
pub fn hash(args: &HashArgs) -> BinResult<()> {
    digest::self_test()?;

    let salt = match &args.salt {
        Some(salt) if salt.is_empty() => {
            return Err(BinError::invalid_argument("salt must not be empty"));
        }
        Some(salt) => salt.clone(),
        None if args.length == 0 => {
            return Err(BinError::invalid_argument("salt length must be positive"));
        }
        None => digest::random_salt(args.length),
    };

    let salted = SaltedHash::with_salt(&args.password, salt);
    debug!(salt_length = salted.salt.len(), "Password hashed");

    print!("{}", render_hash(&salted, args.admin));
    Ok(())
}

/// Formats a salted hash for output.
///
/// With `admin` set the result is a TOML `[admin]` table.
pub fn render_hash(salted: &SaltedHash, admin: bool) -> String {
    if admin {
        format!("[admin]\nsalt = \"{}\"\nhash = \"{}\"\n", salted.salt, salted.hash)
    } else {
        format!("salt: {}\nhash: {}\n", salted.salt, salted.hash)
    }
}
