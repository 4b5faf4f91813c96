// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# folio content provider

The static, read-only catalog behind every page: one [`SiteProfile`] and an
ordered list of [`Project`]s.

```text
 catalog JSON (embedded or file) -> Catalog (validated) -> CatalogService -> router
```

Lookups have exactly one failure mode, "not found", expressed as `None`.
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod catalog;
pub mod error;
pub mod service;
pub mod types;

pub use catalog::{Catalog, DEFAULT_CATALOG_JSON};
pub use error::{CatalogError, CatalogResult};
pub use service::{CatalogService, InMemoryCatalogService};
pub use types::{CatalogDocument, Project, ProjectId, SiteProfile};
