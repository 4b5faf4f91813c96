// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use chrono::Datelike;
use folio_catalog::CatalogService;
use std::sync::Arc;

/// Presentation settings shared by every page
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// `lang` attribute on the root element
    pub lang: String,
    /// Year shown in the footer
    pub copyright_year: i32,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            lang: "it".to_string(),
            copyright_year: chrono::Local::now().year(),
        }
    }
}

/// Application state shared across all HTTP handlers
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<dyn CatalogService>,
    pub site: Arc<SiteSettings>,
}

impl ApiState {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog,
            site: Arc::new(SiteSettings::default()),
        }
    }

    pub fn with_site(mut self, site: SiteSettings) -> Self {
        self.site = Arc::new(site);
        self
    }
}
