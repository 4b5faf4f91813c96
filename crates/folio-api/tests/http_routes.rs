// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Route-level tests driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use folio_api::{create_http_server, ApiState, SiteSettings};
use folio_catalog::{Catalog, InMemoryCatalogService};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn app_with_public(public_dir: &Path) -> Router {
    let catalog = Arc::new(InMemoryCatalogService::new(Catalog::builtin().unwrap()));
    let state = ApiState::new(catalog).with_site(SiteSettings {
        lang: "it".to_string(),
        copyright_year: 2025,
    });
    create_http_server(state, public_dir)
}

fn app() -> (Router, TempDir) {
    let public = tempfile::tempdir().unwrap();
    (app_with_public(public.path()), public)
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().method(method).uri(uri).body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    send(app, Method::GET, uri, Body::empty()).await
}

#[tokio::test]
async fn test_home_lists_profile_and_projects() {
    let (app, _public) = app();
    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Jacopo"));
    assert!(body.contains("Campagna Social Media"));
    assert!(body.contains("Brand Identity"));
    assert!(body.contains("id=\"loading-screen\""));
    assert!(body.contains("class=\"typewriter-text\""));
    assert!(body.contains("data-count=\"2\""));
}

#[tokio::test]
async fn test_portfolio_page() {
    let (app, _public) = app();
    let (status, body) = get(app, "/portfolio").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/project/1"));
    assert!(body.contains("/project/2"));
    assert!(body.contains("data-video=\"/videos/project2.mp4\""));
}

#[tokio::test]
async fn test_project_page_known_id() {
    let (app, _public) = app();
    let (status, body) = get(app, "/project/1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Campagna Social Media"));
    assert!(body.contains("Strategia di comunicazione per brand emergente"));
}

#[tokio::test]
async fn test_project_page_unknown_or_malformed_id() {
    for uri in ["/project/999", "/project/abc", "/project/-1", "/project/0"] {
        let (app, _public) = app();
        let (status, body) = get(app, uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(body.contains("404"), "{}", uri);
    }
}

#[tokio::test]
async fn test_contact_page() {
    let (app, _public) = app();
    let (status, body) = get(app, "/contact").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id=\"contact-form\""));
    assert!(body.contains("Jacopo"));
}

#[tokio::test]
async fn test_api_project_json() {
    let (app, _public) = app();
    let (status, body) = get(app, "/api/project/1").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    let project = &json["project"];
    assert_eq!(project["id"], 1);
    assert_eq!(project["title"], "Campagna Social Media");
    assert_eq!(project["description"], "Strategia di comunicazione per brand emergente");
    assert_eq!(project["image"], "/images/project1.jpg");
    assert_eq!(project["video"], "/videos/project1.mp4");
    assert_eq!(project["category"], "Social Media");
}

#[tokio::test]
async fn test_api_project_unknown_id() {
    let (app, _public) = app();
    let (status, body) = get(app, "/api/project/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].is_string());
    assert!(json.get("project").is_none());
}

#[tokio::test]
async fn test_contact_submission_accepts_any_body() {
    let bodies: [(&str, &[u8]); 4] = [
        ("application/json", br#"{"name":"Ada","email":"ada@example.com","message":"Ciao"}"#),
        ("application/x-www-form-urlencoded", b"name=Ada&message=Ciao"),
        ("text/plain", b""),
        ("application/octet-stream", &[0xde, 0xad, 0xbe, 0xef]),
    ];

    for (content_type, body) in bodies {
        let (app, _public) = app();
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, content_type)
                    .body(Body::from(body.to_vec()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{}", content_type);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["message"].is_string());
    }
}

#[tokio::test]
async fn test_unknown_path_renders_404_page() {
    let (app, _public) = app();
    let (status, body) = get(app, "/nonexistent-path").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404"));
    assert!(body.contains("<html"));
}

#[tokio::test]
async fn test_unknown_path_with_post_renders_404_page() {
    let (app, _public) = app();
    let (status, _body) = send(app, Method::POST, "/nowhere", Body::empty()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_routed_path_with_other_method_renders_404_page() {
    let cases = [
        (Method::POST, "/portfolio"),
        (Method::GET, "/api/contact"),
        (Method::DELETE, "/project/1"),
        (Method::POST, "/"),
        (Method::PUT, "/contact"),
        (Method::DELETE, "/api/project/1"),
    ];

    for (method, uri) in cases {
        let (app, _public) = app();
        let (status, body) = send(app, method.clone(), uri, Body::empty()).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert!(body.contains("<html"), "{} {} should render the 404 page", method, uri);
        assert!(body.contains("404"));
    }
}

#[tokio::test]
async fn test_oversized_contact_submission_is_still_acknowledged() {
    let (app, _public) = app();
    let big = vec![b'a'; 3 * 1024 * 1024];
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "text/plain")
        .header(header::CONTENT_LENGTH, big.len())
        .body(Body::from(big))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn test_static_asset_served_unchanged() {
    let public = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(public.path().join("css")).unwrap();
    std::fs::write(public.path().join("css/style.css"), "body { margin: 0; }").unwrap();

    let (status, body) = get(app_with_public(public.path()), "/css/style.css").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body { margin: 0; }");
}

#[tokio::test]
async fn test_page_escapes_catalog_text() {
    let json = r#"{"name":"<b>Ada</b>","title":"t","description":"d","projects":[
        {"id":7,"title":"x\" onload=\"alert(1)","description":"","image":"/i.jpg",
         "video":"/v.mp4\"><script>","category":"c"}]}"#;
    let catalog = Arc::new(InMemoryCatalogService::new(Catalog::from_json_str(json).unwrap()));
    let public = tempfile::tempdir().unwrap();
    let app = create_http_server(ApiState::new(catalog), public.path());

    let (status, body) = get(app, "/project/7").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<b>Ada</b>"));
    assert!(!body.contains("<script>"));
    assert!(!body.contains("\" onload=\""));
}
