// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # folio - portfolio website
//!
//! Server-rendered portfolio site with a small JSON API and a client-side
//! interaction controller. This crate re-exports the components and ships
//! the `folio-server` binary.
//!
//! ## Components
//! - **`config`**: TOML configuration with environment and CLI overrides
//! - **`observability`**: logging setup and per-crate debug flags
//! - **`catalog`**: site profile and project catalog
//! - **`api`**: page router, JSON endpoints and static assets
//! - **`ui`**: browser interactions as an event/effect state machine
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use folio::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = folio::config::load_config(None, None)?;
//! let catalog = Catalog::load_or_builtin(config.catalog.path.as_deref())?;
//! let service: Arc<dyn CatalogService> = Arc::new(InMemoryCatalogService::new(catalog));
//! folio::api::serve(&config.server, service).await?;
//! # Ok(())
//! # }
//! ```

pub use folio_api as api;
pub use folio_catalog as catalog;
pub use folio_config as config;
pub use folio_observability as observability;
pub use folio_ui as ui;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::api::{create_http_server, ApiState, SiteSettings};
    pub use crate::catalog::{Catalog, CatalogService, InMemoryCatalogService, Project, SiteProfile};
    pub use crate::config::FolioConfig;
    pub use crate::ui::{DomEffect, InteractionController, UiEvent};
}
