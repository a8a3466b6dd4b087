//! Cookie-based session middleware for the dashboard pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;
use crate::utils::session_cookie::session_token;

/// Lets requests with an open session through, redirects the rest to `/login`.
///
/// # Cookie Format
///
/// ```text
/// Cookie: session=<token>
/// ```
///
/// Unlike the API auth middleware, which returns `401 Unauthorized`, this
/// middleware redirects so a browser lands on the login page.
///
/// # Errors
///
/// Returns `Redirect` to `/login` if:
/// - The `session` cookie is missing
/// - The session was closed by a logout
/// - The session store fails
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let Some(token) = session_token(req.headers()) else {
        return Err(Redirect::to("/login"));
    };

    match st.session_service.is_authenticated(&token).await {
        Ok(true) => Ok(next.run(req).await),
        Ok(false) => Err(Redirect::to("/login")),
        Err(e) => {
            tracing::warn!(error = %e, "session lookup failed");
            Err(Redirect::to("/login"))
        }
    }
}
