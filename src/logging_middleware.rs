// src/logging_middleware.rs
//! Request id tagging plus request/response body logging at debug level

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Bodies above this size are passed through without being logged
const MAX_LOGGED_BODY: usize = 64 * 1024;

/// Reuse the caller's `x-request-id` or mint one
fn request_id(request: &Request) -> String {
    request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

fn render_body(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() || bytes.len() > MAX_LOGGED_BODY {
        return None;
    }
    let text = std::str::from_utf8(bytes).ok()?;
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(json) => Some(serde_json::to_string_pretty(&json).unwrap_or_else(|_| text.to_string())),
        Err(_) => Some(text.to_string()),
    }
}

pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let id = request_id(&request);
    let (mut parts, body) = request.into_parts();

    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(body) = render_body(&bytes) {
        debug!(
            request_id = %id,
            method = %parts.method,
            uri = %parts.uri,
            request_body = %body,
            "📥 Request"
        );
    }

    let header = HeaderValue::from_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    parts.headers.insert(REQUEST_ID_HEADER, header.clone());
    let response = next.run(Request::from_parts(parts, Body::from(bytes))).await;

    let (mut parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(body) = render_body(&bytes) {
        debug!(
            request_id = %id,
            status = %parts.status,
            response_body = %body,
            "📤 Response"
        );
    }

    parts.headers.insert(REQUEST_ID_HEADER, header);
    Ok(Response::from_parts(parts, Body::from(bytes)))
}
