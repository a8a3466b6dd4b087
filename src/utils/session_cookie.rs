//! Dashboard session cookie.

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Extracts the session token from the `Cookie` header.
///
/// Handles multiple cookies in one header by splitting on semicolons and
/// ignoring every pair except `session`. An empty value counts as missing.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(SESSION_COOKIE), Some(value)) if !value.is_empty() => {
                        Some(value.to_string())
                    }
                    _ => None,
                }
            })
        })
}

/// `Set-Cookie` value opening a session.
pub fn session_cookie(token: &str, secure: bool) -> HeaderValue {
    build(&format!("{SESSION_COOKIE}={token}"), secure)
}

/// `Set-Cookie` value removing the session cookie from the browser.
pub fn expired_session_cookie(secure: bool) -> HeaderValue {
    build(&format!("{SESSION_COOKIE}=; Max-Age=0"), secure)
}

fn build(prefix: &str, secure: bool) -> HeaderValue {
    let mut cookie = format!("{prefix}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    // Tokens are hex, so the value is always a visible ASCII string.
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static("session=; Max-Age=0"))
}
