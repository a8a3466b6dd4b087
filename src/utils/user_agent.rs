//! `User-Agent` header extraction.

use axum::http::{HeaderMap, header};

/// Returns the `User-Agent` header value, if present and valid UTF-8.
pub fn user_agent(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
}
