// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # folio-observability
//!
//! Logging setup shared by the folio binaries, with per-crate debug flags.
//!
//! ## Features
//! - `file-logging`: JSON log files with daily rotation and run retention

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

pub use cli::*;
pub use config::*;
pub use init::*;

/// Known folio crate names (tracing targets) for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "folio-api",
    "folio-catalog",
    "folio-config",
    "folio-server",
    "folio-ui",
];
