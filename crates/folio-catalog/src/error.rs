// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Catalog construction errors.

These only surface at startup. Lookups never fail; a missing project is
`None`.
*/

use crate::types::ProjectId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Project id must be a positive integer (project '{title}')")]
    InvalidId { title: String },

    #[error("Duplicate project id {0}")]
    DuplicateId(ProjectId),

    #[error("Project {0} has an empty title")]
    EmptyTitle(ProjectId),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
