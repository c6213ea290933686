// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `version` command.

use crate::error::BinResult;

/// Prints version information.
pub fn version() -> BinResult<()> {
    println!("Koality session authority");
    println!();
    println!("Version Information:");
    println!("  khr-bin:  {}", crate::VERSION);
    println!("  khr-core: {}", khr_core::VERSION);
    println!();
    println!("Token Format:");
    println!("  Algorithm: {:?}", khr_core::token::ALGORITHM);
    println!("  Header:    {}", khr_core::AUTH_TOKEN_HEADER);
    println!();
    println!("Build Information:");
    println!("  Target: {}", std::env::consts::ARCH);
    println!("  OS:     {}", std::env::consts::OS);
    println!();
    println!("License: PolyForm Noncommercial License 1.0.0");
    println!("Copyright (c) 2025 Sylvex. All rights reserved.");

    Ok(())
}
