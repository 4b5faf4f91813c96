// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Request/response body logging

use axum::{
    body::{Body, Bytes, HttpBody},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;

/// Response bodies at or above this size are not logged
const MAX_LOGGED_RESPONSE_BYTES: usize = 10_000;

/// Request bodies are buffered for logging only up to this known size
const MAX_LOGGED_REQUEST_BYTES: usize = 10_000;

/// Log small request bodies of write requests and small JSON response bodies
/// at `debug`. Only bodies of known size under the limits are buffered; they
/// are passed through unchanged. Larger or streamed bodies go through
/// untouched and are not logged.
pub async fn log_request_response_bodies(
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();

    let should_log_request = matches!(parts.method.as_str(), "POST" | "PUT" | "PATCH");

    let known_small = body
        .size_hint()
        .upper()
        .is_some_and(|len| len <= MAX_LOGGED_REQUEST_BYTES as u64);

    let request = if should_log_request && known_small {
        let bytes = axum::body::to_bytes(body, MAX_LOGGED_REQUEST_BYTES)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;
        if !bytes.is_empty() {
            tracing::debug!(
                target: "folio-api",
                "📥 Request body: {}",
                String::from_utf8_lossy(&bytes)
            );
        }
        Request::from_parts(parts, Body::from(bytes))
    } else {
        if should_log_request {
            tracing::debug!(
                target: "folio-api",
                "📥 Request body not logged (size hint {:?})",
                body.size_hint().upper()
            );
        }
        Request::from_parts(parts, body)
    };

    let response = next.run(request).await;

    if !is_json(&response) {
        return Ok(response);
    }

    let (parts, body) = response.into_parts();
    let bytes: Bytes = body
        .collect()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .to_bytes();

    if bytes.len() < MAX_LOGGED_RESPONSE_BYTES {
        if let Ok(body_str) = std::str::from_utf8(&bytes) {
            tracing::debug!(target: "folio-api", "📤 Response body: {}", body_str);
        }
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("application/json"))
        .unwrap_or(false)
}
