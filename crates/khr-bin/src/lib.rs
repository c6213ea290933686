// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # khr-bin
//!
//! Operator CLI for the Koality session authority.
//!
//! ```text
//!            main.rs
//!               │
//!          ┌────▼────┐
//!          │ cli.rs  │
//!          └────┬────┘
//!        ┌──────┴──────┐
//!        ▼             ▼
//!   ┌──────────┐  ┌──────────┐
//!   │ commands │  │ logging  │
//!   └────┬─────┘  └──────────┘
//!        ▼
//!   khr-core / khr-config / khr-session
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Print a fresh salt
//! khr-session salt
//!
//! # Mint administrator credentials for the config file
//! khr-session hash 'correct horse' --admin
//!
//! # Check a configuration file
//! khr-session validate /etc/koality/session.toml
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

pub use cli::{Cli, Commands};
pub use error::{BinError, BinResult};
pub use logging::init_logging;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
