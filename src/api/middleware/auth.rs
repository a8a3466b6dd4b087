//! Session cookie authentication middleware for the JSON API.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::utils::session_cookie::session_token;
use crate::{error::AppError, state::AppState};

/// Authenticates API requests using the dashboard session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: session=<token>
/// ```
///
/// The token is obtained by logging in through `POST /login`, so scripts and
/// the dashboard's own JavaScript share one session.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - The `session` cookie is missing
/// - The token does not belong to an open session
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/api/links", get(list_links_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = session_token(req.headers()).ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Session cookie is missing"}),
        )
    })?;

    if !st.session_service.is_authenticated(&token).await? {
        return Err(AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Session is invalid or expired"}),
        ));
    }

    Ok(next.run(req).await)
}
