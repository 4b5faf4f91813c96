// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Catalog service trait.

The boundary the HTTP layer depends on. Implementations must be cheap to
query concurrently; the in-memory one holds no locks.
*/

use crate::catalog::Catalog;
use crate::types::{Project, ProjectId, SiteProfile};

/// Content provider (transport-agnostic)
pub trait CatalogService: Send + Sync {
    /// Site identity shared by every page
    fn get_profile(&self) -> &SiteProfile;

    /// All projects in display order
    fn list_projects(&self) -> &[Project];

    /// Project by id, `None` when unknown
    fn find_project(&self, id: ProjectId) -> Option<&Project>;

    /// Project by raw path segment; non-numeric keys are simply unknown
    fn find_project_by_key(&self, key: &str) -> Option<&Project> {
        key.parse::<ProjectId>()
            .ok()
            .and_then(|id| self.find_project(id))
    }

    /// Distinct project categories in first-seen order
    fn categories(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.list_projects()
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

/// Default implementation backed by an immutable [`Catalog`]
#[derive(Debug, Clone)]
pub struct InMemoryCatalogService {
    catalog: Catalog,
}

impl InMemoryCatalogService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl CatalogService for InMemoryCatalogService {
    fn get_profile(&self) -> &SiteProfile {
        self.catalog.profile()
    }

    fn list_projects(&self) -> &[Project] {
        self.catalog.projects()
    }

    fn find_project(&self, id: ProjectId) -> Option<&Project> {
        self.catalog.find_project(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_service_through_trait_object() {
        let service: Arc<dyn CatalogService> =
            Arc::new(InMemoryCatalogService::new(Catalog::builtin().unwrap()));

        assert_eq!(service.get_profile().name, "Jacopo");
        assert_eq!(service.list_projects().len(), 2);
        assert_eq!(
            service.find_project(1).map(|p| p.title.as_str()),
            Some("Campagna Social Media")
        );
        assert!(service.find_project_by_key("1x").is_none());
        assert_eq!(service.find_project_by_key("2").map(|p| p.id), Some(2));
        assert_eq!(service.categories(), vec!["Social Media", "Branding"]);
    }

    #[test]
    fn test_find_project_by_key() {
        let service = InMemoryCatalogService::new(Catalog::builtin().unwrap());

        assert_eq!(service.find_project_by_key("2").map(|p| p.id), Some(2));
        assert!(service.find_project_by_key("999").is_none());
        assert!(service.find_project_by_key("abc").is_none());
        assert!(service.find_project_by_key("-1").is_none());
        assert!(service.find_project_by_key("0").is_none());
        assert!(service.find_project_by_key("").is_none());
    }
}
