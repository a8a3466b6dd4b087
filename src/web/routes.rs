//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    analytics_page_handler, create_link_handler, dashboard_handler, delete_link_handler,
    edit_link_handler, hub_page_handler, login_page_handler, login_submit_handler,
    logout_handler, move_link_handler, new_link_handler, root_handler, toggle_link_handler,
    update_link_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Pages requiring a dashboard session.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET  /dashboard`                   - Link list
/// - `GET  /dashboard/links/new`         - Add link form
/// - `POST /dashboard/links`             - Create link
/// - `POST /dashboard/links/move`        - Move link (`from`, `to`)
/// - `GET  /dashboard/links/{id}/edit`   - Edit link form
/// - `POST /dashboard/links/{id}`        - Update link
/// - `POST /dashboard/links/{id}/toggle` - Enable or disable link
/// - `POST /dashboard/links/{id}/delete` - Delete link
/// - `GET  /analytics`                   - Analytics page
/// - `POST /logout`                      - End the session
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/dashboard/links", post(create_link_handler))
        .route("/dashboard/links/new", get(new_link_handler))
        .route("/dashboard/links/move", post(move_link_handler))
        .route("/dashboard/links/{id}", post(update_link_handler))
        .route("/dashboard/links/{id}/edit", get(edit_link_handler))
        .route("/dashboard/links/{id}/toggle", post(toggle_link_handler))
        .route("/dashboard/links/{id}/delete", post(delete_link_handler))
        .route("/analytics", get(analytics_page_handler))
        .route("/logout", post(logout_handler))
}

/// Public pages.
///
/// # Endpoints
///
/// - `GET /`    - Redirect to the hub
/// - `GET /hub` - Link hub
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/hub", get(hub_page_handler))
}

/// Login page and form.
///
/// # Endpoints
///
/// - `GET  /login` - Login page
/// - `POST /login` - Open a session
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", get(login_page_handler).post(login_submit_handler))
}
