// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Contact form submission endpoint
//
// Submissions are logged and acknowledged. Nothing is stored or forwarded.

use axum::{body::Body, http::HeaderMap, Json};
use http_body_util::BodyExt;

use crate::common::ContactAck;

/// Longest body excerpt written to the log
const MAX_LOGGED_CHARS: usize = 500;

/// Only this much of a submission is ever read
pub const MAX_CONTACT_BODY_BYTES: usize = 64 * 1024;

/// POST /api/contact
///
/// Accepts any body shape or size (JSON, urlencoded, empty or garbage) and
/// always acknowledges. Bodies larger than [`MAX_CONTACT_BODY_BYTES`] are cut
/// off; the rest is never buffered.
pub async fn submit_contact(headers: HeaderMap, body: Body) -> Json<ContactAck> {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("none");

    let (prefix, truncated) = read_prefix(body, MAX_CONTACT_BODY_BYTES).await;

    tracing::info!(
        target: "folio-api",
        content_type = content_type,
        bytes = prefix.len(),
        truncated = truncated,
        "Contact form submission: {}",
        summarize_body(&prefix)
    );

    Json(ContactAck::received())
}

/// Read at most `limit` bytes. Returns the bytes and whether the body had
/// more. A broken body just ends the read.
async fn read_prefix(mut body: Body, limit: usize) -> (Vec<u8>, bool) {
    let mut prefix = Vec::new();
    while let Some(frame) = body.frame().await {
        let Ok(frame) = frame else {
            tracing::debug!(target: "folio-api", "Contact body ended with an error");
            break;
        };
        let Ok(data) = frame.into_data() else {
            continue;
        };
        let room = limit - prefix.len();
        if data.len() > room {
            prefix.extend_from_slice(&data[..room]);
            return (prefix, true);
        }
        prefix.extend_from_slice(&data);
    }
    (prefix, false)
}

/// Lossy, length-capped rendering of a request body for logs
fn summarize_body(body: &[u8]) -> String {
    if body.is_empty() {
        return "<empty>".to_string();
    }
    let text = String::from_utf8_lossy(body);
    let mut summary: String = text.chars().take(MAX_LOGGED_CHARS).collect();
    if text.chars().count() > MAX_LOGGED_CHARS {
        summary.push('…');
    }
    summary
}
