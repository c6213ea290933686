// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `salt` command.

use khr_core::digest;

use crate::cli::SaltArgs;
use crate::error::{BinError, BinResult};

/// Prints a fresh salt.
pub fn salt(args: &SaltArgs) -> BinResult<()> {
    if args.length == 0 {
        return Err(BinError::invalid_argument("salt length must be positive"));
    }
    println!("{}", digest::random_salt(args.length));
    Ok(())
}
