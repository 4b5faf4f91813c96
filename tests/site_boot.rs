// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file -> catalog -> router, wired the way the server binary does it

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use folio::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;
use tower::ServiceExt;

const CATALOG: &str = r#"{
    "name": "Studio",
    "title": "Creative Studio",
    "description": "Small agency",
    "skills": ["Video"],
    "projects": [
        {"id": 7, "title": "Spot TV", "description": "30s", "image": "/images/spot.jpg",
         "category": "Video"}
    ]
}"#;

#[tokio::test]
async fn test_configured_catalog_is_served() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    let public_dir = dir.path().join("public");
    fs::create_dir_all(public_dir.join("css")).unwrap();
    fs::write(public_dir.join("css/style.css"), "body{}").unwrap();
    fs::write(&catalog_path, CATALOG).unwrap();

    let config_path = dir.path().join("folio_configuration.toml");
    fs::write(&config_path, "[server]\nport = 4100\n").unwrap();

    let mut cli = HashMap::new();
    cli.insert("catalog".to_string(), catalog_path.display().to_string());
    cli.insert("public_dir".to_string(), public_dir.display().to_string());
    let config = folio::config::load_config(Some(&config_path), Some(&cli)).unwrap();

    let catalog = Catalog::load_or_builtin(config.catalog.path.as_deref()).unwrap();
    let service: Arc<dyn CatalogService> = Arc::new(InMemoryCatalogService::new(catalog));
    let app = create_http_server(ApiState::new(service), &config.server.public_dir);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/project/7").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["project"]["title"], "Spot TV");
    assert!(json["project"].get("video").is_none());

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/project/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(Request::builder().uri("/css/style.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(folio::config::load_config(Some(&missing), None).is_err());
}

/// The shipped assets, served from the repository's `public/` directory
fn shipped_site() -> axum::Router {
    let public_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
    let service: Arc<dyn CatalogService> =
        Arc::new(InMemoryCatalogService::new(Catalog::builtin().unwrap()));
    create_http_server(ApiState::new(service), &public_dir)
}

async fn fetch(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn test_client_loader_survives_missing_wasm_bundle() {
    let (status, script) = fetch(shipped_site(), "/js/main.js").await;
    assert_eq!(status, StatusCode::OK);

    // A static import of a missing module aborts the whole script; the bundle
    // must be pulled in dynamically so the fallback can hide the loader.
    assert!(script.contains("import('./pkg/folio_ui.js')"));
    assert!(!script.lines().any(|line| line.trim_start().starts_with("import ")));
    assert!(script.contains(".catch("));
    assert!(script.contains("loading-screen"));
}

#[tokio::test]
async fn test_loading_screen_hides_without_script() {
    let (status, css) = fetch(shipped_site(), "/css/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(css.contains("animation: loader-auto-hide"));
    assert!(css.contains("@keyframes loader-auto-hide"));

    let (_, page) = fetch(shipped_site(), "/").await;
    assert!(page.contains("id=\"loading-screen\""));
    assert!(page.contains("/js/main.js"));
}
