// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// HTML page endpoints

use askama::Template;
use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::common::{ApiState, PageError};
use crate::views::{ContactPage, IndexPage, NavSection, NotFoundPage, PortfolioPage, ProjectPage};

/// Result type for page handlers
pub type PageResult = Result<Response, PageError>;

fn render<T: Template>(status: StatusCode, page: &T) -> PageResult {
    let html = page.render()?;
    Ok((status, Html(html)).into_response())
}

/// GET /
pub async fn home(State(state): State<ApiState>) -> PageResult {
    let page = IndexPage {
        site: &state.site,
        profile: state.catalog.get_profile(),
        projects: state.catalog.list_projects(),
        active: NavSection::Home.as_str(),
    };
    render(StatusCode::OK, &page)
}

/// GET /portfolio
pub async fn portfolio(State(state): State<ApiState>) -> PageResult {
    let page = PortfolioPage {
        site: &state.site,
        profile: state.catalog.get_profile(),
        projects: state.catalog.list_projects(),
        categories: state.catalog.categories(),
        active: NavSection::Portfolio.as_str(),
    };
    render(StatusCode::OK, &page)
}

/// GET /project/:id
pub async fn project(State(state): State<ApiState>, Path(id): Path<String>) -> PageResult {
    match state.catalog.find_project_by_key(&id) {
        Some(project) => {
            let page = ProjectPage {
                site: &state.site,
                profile: state.catalog.get_profile(),
                project,
                active: NavSection::Portfolio.as_str(),
            };
            render(StatusCode::OK, &page)
        }
        None => {
            tracing::debug!(target: "folio-api", "Project page requested for unknown id '{}'", id);
            render_not_found(&state)
        }
    }
}

/// GET /contact
pub async fn contact(State(state): State<ApiState>) -> PageResult {
    let page = ContactPage {
        site: &state.site,
        profile: state.catalog.get_profile(),
        active: NavSection::Contact.as_str(),
    };
    render(StatusCode::OK, &page)
}

/// Fallback for every path no route or static asset matched
pub async fn not_found(State(state): State<ApiState>, uri: Uri) -> PageResult {
    tracing::debug!(target: "folio-api", "No route or asset for {}", uri);
    render_not_found(&state)
}

pub fn render_not_found(state: &ApiState) -> PageResult {
    let page = NotFoundPage {
        site: &state.site,
        profile: state.catalog.get_profile(),
        active: NavSection::None.as_str(),
    };
    render(StatusCode::NOT_FOUND, &page)
}
