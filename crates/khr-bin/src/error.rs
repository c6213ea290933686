// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Error types for the `khr-session` binary.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type BinResult<T> = Result<T, BinError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum BinError {
    /// Invalid command-line input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file failed to load or validate.
    #[error("Config error: {0}")]
    Config(#[from] khr_config::ConfigError),

    /// Validation passed with warnings in strict mode.
    #[error("Strict mode: {0} warning(s) found")]
    Warnings(usize),

    /// Password hashing is unusable on this build.
    #[error("Digest self-test failed: {0}")]
    Digest(#[from] khr_core::DigestError),

    /// Output could not be written.
    #[error("I/O error: {0}")]
    Io(String),

    /// Any other failure.
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl BinError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 2,
            Self::Config(_) | Self::Warnings(_) => 1,
            Self::Digest(_) => 3,
            Self::Io(_) => 4,
            Self::Runtime(_) => 5,
        }
    }
}

impl From<std::io::Error> for BinError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BinError {
    fn from(err: serde_json::Error) -> Self {
        Self::Runtime(err.to_string())
    }
}

impl From<anyhow::Error> for BinError {
    fn from(err: anyhow::Error) -> Self {
        Self::Runtime(err.to_string())
    }
}

// =============================================================================
// Error Reporting
// =============================================================================

/// Prints an error and its cause chain to stderr.
pub fn report_error(error: &BinError) {
    eprintln!("Error: {}", error);

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("  Caused by: {}", cause);
        source = cause.source();
    }
}

/// Reports an error and exits with its code.
pub fn report_error_and_exit(error: BinError) -> ! {
    report_error(&error);
    std::process::exit(error.exit_code())
}
