// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Catalog record types.

These are the shapes served to templates and to the JSON API. They are
immutable once the catalog is built.
*/

use serde::{Deserialize, Serialize};

/// Stable project identifier used in `/project/:id` and `/api/project/:id`
pub type ProjectId = u32;

/// A portfolio work item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Static asset path or absolute URL
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    /// Free-form display label
    pub category: String,
}

impl Project {
    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }
}

/// Site identity shared by every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// On-disk catalog layout: profile fields flattened next to the project list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(flatten)]
    pub profile: SiteProfile,
    #[serde(default)]
    pub projects: Vec<Project>,
}
