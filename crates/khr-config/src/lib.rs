// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # khr-config
//!
//! Configuration for the Koality session authority.
//!
//! - **Schema**: session and secret lifetimes, salt length, administrator account
//! - **Multi-Format Support**: YAML, TOML, and JSON configuration files
//! - **Environment Overrides**: `KHR_*` variables and `${VAR}` placeholders
//!
//! ## Quick Start
//!
//! ```
//! use khr_config::{AuthorityConfig, ConfigFormat, ConfigLoader};
//!
//! let config = ConfigLoader::new()
//!     .with_env_vars(false)
//!     .load_from_str("session_lifetime = \"15m\"", ConfigFormat::Toml)
//!     .unwrap();
//!
//! assert_eq!(config.session_lifetime.as_secs(), 900);
//! assert_eq!(config.secret_lifetime, AuthorityConfig::default().secret_lifetime);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, ConfigFormat, ConfigLoader};
pub use schema::{AdminConfig, AuthorityConfig};
