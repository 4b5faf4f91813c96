// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
The read-only portfolio catalog.

Built once at startup, from the embedded default document or from a JSON
file, and validated before it is handed to the router. Project order is
insertion order and is also display order.
*/

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};
use crate::types::{CatalogDocument, Project, ProjectId, SiteProfile};

/// Embedded default catalog (loaded at compile time)
pub const DEFAULT_CATALOG_JSON: &str = include_str!("../catalogs/default_catalog.json");

/// Site profile plus ordered project list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    profile: SiteProfile,
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, rejecting non-positive ids, duplicate ids and empty titles
    pub fn new(profile: SiteProfile, projects: Vec<Project>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if project.id == 0 {
                return Err(CatalogError::InvalidId {
                    title: project.title.clone(),
                });
            }
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
            if project.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(project.id));
            }
        }

        Ok(Self { profile, projects })
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json_str(DEFAULT_CATALOG_JSON)
    }

    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    pub fn from_document(document: CatalogDocument) -> CatalogResult<Self> {
        Self::new(document.profile, document.projects)
    }

    /// Load a catalog document from disk
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        info!(
            target: "folio-catalog",
            "Loaded catalog from {} ({} projects)",
            path.display(),
            catalog.projects.len()
        );
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise use the built-in catalog
    pub fn load_or_builtin(path: Option<&Path>) -> CatalogResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!(target: "folio-catalog", "Using built-in catalog");
                Self::builtin()
            }
        }
    }

    pub fn profile(&self) -> &SiteProfile {
        &self.profile
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Linear scan by id
    pub fn find_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
