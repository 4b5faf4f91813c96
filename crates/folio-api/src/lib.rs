// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// folio page router
//
// Renders the site pages from the catalog, answers the small JSON API and
// serves static assets. Unknown paths render the 404 page.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod common;
pub mod endpoints;
pub mod middleware;
pub mod transports;
pub mod views;

// Re-export commonly used types
pub use common::{ApiError, ApiErrorCode, ApiResult, ApiState, PageError, SiteSettings};
pub use transports::http::{create_http_server, serve, ServerError};
