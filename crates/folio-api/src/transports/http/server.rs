// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// HTTP server implementation (Axum)
//
// This module sets up the site router with Axum, including page and API
// routes, static assets, middleware and state management.

use axum::{
    handler::Handler,
    middleware,
    routing::{get, post},
    Router,
};
use folio_catalog::CatalogService;
use folio_config::ServerConfig;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::common::ApiState;
use crate::endpoints::{contact, pages, project};
use crate::middleware::{create_cors_layer, log_request_response_bodies};

/// Server startup/runtime failures
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Create the main HTTP application
///
/// Unmatched paths are looked up in `public_dir`; anything that is not a
/// file there renders the 404 page. A routed path requested with another
/// method also renders the 404 page instead of an empty 405.
pub fn create_http_server(state: ApiState, public_dir: &Path) -> Router {
    let not_found = pages::not_found.with_state(state.clone());
    let assets = ServeDir::new(public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found);

    Router::new()
        // Pages
        .route("/", get(pages::home).fallback(pages::not_found))
        .route("/portfolio", get(pages::portfolio).fallback(pages::not_found))
        .route("/project/:id", get(pages::project).fallback(pages::not_found))
        .route("/contact", get(pages::contact).fallback(pages::not_found))
        // JSON API
        .route("/api/contact", post(contact::submit_contact).fallback(pages::not_found))
        .route("/api/project/:id", get(project::get_project).fallback(pages::not_found))
        // Static assets, then the 404 page
        .fallback_service(assets)
        // Add state
        .with_state(state)
        // Add middleware
        .layer(middleware::from_fn(log_request_response_bodies))
        .layer(create_cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::span!(
                        target: "folio-api",
                        tracing::Level::DEBUG,
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    tracing::debug!(target: "folio-api", "📥 Incoming request: {} {}", request.method(), request.uri());
                })
                .on_response(|response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::debug!(
                        target: "folio-api",
                        "📤 Response: status={}, latency={:?}",
                        response.status(),
                        latency
                    );
                })
                .on_failure(|error: tower_http::classify::ServerErrorsFailureClass, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::error!(target: "folio-api", "❌ Request failed: {}, latency={:?}", error, latency);
                }),
        )
}

/// Bind `host:port` and serve until Ctrl-C
pub async fn serve(config: &ServerConfig, catalog: Arc<dyn CatalogService>) -> Result<(), ServerError> {
    let app = create_http_server(ApiState::new(catalog), &config.public_dir);
    let address = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

    tracing::info!(target: "folio-api", "Server running on http://{}", address);
    tracing::info!(target: "folio-api", "Serving static assets from {}", config.public_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(target: "folio-api", "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(target: "folio-api", "Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!(target: "folio-api", "Shutdown signal received");
}
