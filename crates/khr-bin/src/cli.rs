// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! CLI argument parsing and command definitions.
//!
//! - `salt`: Print a fresh salt
//! - `hash`: Hash a password with a salt
//! - `validate`: Validate a configuration file
//! - `version`: Show version information

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// =============================================================================
// Main CLI Structure
// =============================================================================

/// Koality session authority tooling.
///
/// Mints salts and password hashes for the administrator account and checks
/// configuration files before deployment.
#[derive(Parser, Debug)]
#[command(
    name = "khr-session",
    author = "Sylvex <contact@sylvex.io>",
    version = khr_core::VERSION,
    about = "Koality session authority tooling",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        default_value = "warn",
        env = "KHR_LOG_LEVEL",
        global = true
    )]
    pub log_level: String,

    /// Log format (text, json, compact)
    #[arg(long, default_value = "text", env = "KHR_LOG_FORMAT", global = true)]
    pub log_format: LogFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Returns the log level, raised to `debug` by `--verbose`.
    pub fn effective_log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}

// =============================================================================
// Subcommands
// =============================================================================

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print a fresh random salt
    Salt(SaltArgs),

    /// Hash a password
    ///
    /// Prints the salt and the uppercase hex SHA-256 of password ++ salt.
    /// With `--admin` the output is an `[admin]` block ready to paste into
    /// a TOML configuration file.
    Hash(HashArgs),

    /// Validate a configuration file
    ///
    /// Loads the file, applies environment overrides and checks every
    /// field without starting anything.
    Validate(ValidateArgs),

    /// Show version information
    Version,
}

// =============================================================================
// Command Arguments
// =============================================================================

/// Arguments for the `salt` command.
#[derive(Args, Debug, Clone)]
pub struct SaltArgs {
    /// Salt length in characters
    #[arg(short = 'n', long, default_value_t = khr_core::digest::DEFAULT_SALT_LENGTH)]
    pub length: usize,
}

/// Arguments for the `hash` command.
#[derive(Args, Debug, Clone)]
pub struct HashArgs {
    /// Password to hash
    pub password: String,

    /// Salt to use (default: a fresh random salt)
    #[arg(short, long)]
    pub salt: Option<String>,

    /// Length of the generated salt
    #[arg(short = 'n', long, default_value_t = khr_core::digest::DEFAULT_SALT_LENGTH, conflicts_with = "salt")]
    pub length: usize,

    /// Print a TOML `[admin]` block
    #[arg(long)]
    pub admin: bool,
}

/// Arguments for the `validate` command.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(env = "KHR_CONFIG")]
    pub config: PathBuf,

    /// Output format for validation results
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

// =============================================================================
// Enums
// =============================================================================

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for structured logging
    Json,
    /// Compact format for minimal output
    Compact,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for programmatic parsing
    Json,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_hash() {
        let cli = Cli::try_parse_from(["khr-session", "hash", "secret", "--salt", "ADMIN"]).unwrap();
        match cli.command {
            Commands::Hash(args) => {
                assert_eq!(args.password, "secret");
                assert_eq!(args.salt.as_deref(), Some("ADMIN"));
                assert!(!args.admin);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_salt_default_length() {
        let cli = Cli::try_parse_from(["khr-session", "salt"]).unwrap();
        match cli.command {
            Commands::Salt(args) => assert_eq!(args.length, 4),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbose_raises_level() {
        let cli = Cli::try_parse_from(["khr-session", "-v", "version"]).unwrap();
        assert_eq!(cli.effective_log_level(), "debug");

        let cli = Cli::try_parse_from(["khr-session", "--log-level", "info", "version"]).unwrap();
        assert_eq!(cli.effective_log_level(), "info");
    }

    #[test]
    fn test_log_format_values() {
        let cli = Cli::try_parse_from(["khr-session", "--log-format", "json", "version"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
