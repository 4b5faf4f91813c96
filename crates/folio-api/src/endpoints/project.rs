// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Project JSON endpoint

use axum::{
    extract::{Path, State},
    Json,
};

use crate::common::{ApiError, ApiResult, ApiState, ProjectEnvelope};

/// GET /api/project/:id
pub async fn get_project(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectEnvelope>> {
    let project = state
        .catalog
        .find_project_by_key(&id)
        .ok_or_else(|| ApiError::not_found("Project", id.as_str()))?;

    Ok(Json(ProjectEnvelope {
        project: project.clone(),
    }))
}
