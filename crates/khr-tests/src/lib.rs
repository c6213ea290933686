// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Koality Session Integration Tests
//!
//! Integration tests for the session authority and its supporting crates.
//!
//! ## Module Structure
//!
//! - [`common`]: Shared test utilities
//!   - `fixtures`: Known accounts, passwords, hashes and legacy tokens
//!   - `mocks`: In-memory credential store with error injection
//!   - `harness`: An authority wired to a manual clock
//!   - `assertions`: Principal and access assertions
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p khr-tests
//! cargo test -p khr-tests --test integration_session
//! cargo test -p khr-tests -- --nocapture
//! ```
//!
//! ## Test Categories
//!
//! - `integration_core.rs`: digest, salts, token codec, legacy tokens
//! - `integration_config.rs`: file formats, validation, environment overrides
//! - `integration_session.rs`: authentication, resolution, expiry, rotation, login
//! - `integration_access.rs`: authorization decisions end to end

pub mod common;
