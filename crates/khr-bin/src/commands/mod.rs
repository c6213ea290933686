// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! CLI command implementations.

mod hash;
mod salt;
mod validate;
mod version;

pub use hash::{hash, render_hash};
pub use salt::salt;
pub use validate::{collect_warnings, validate};
pub use version::version;

use crate::cli::{Cli, Commands};
use crate::error::BinResult;

/// Executes the command selected on the command line.
pub fn execute(cli: &Cli) -> BinResult<()> {
    match &cli.command {
        Commands::Salt(args) => salt::salt(args),
        Commands::Hash(args) => hash::hash(args),
        Commands::Validate(args) => validate::validate(args),
        Commands::Version => version::version(),
    }
}
