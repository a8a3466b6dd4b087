//! API route configuration.
//!
//! Everything except `/hub` requires a dashboard session via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    analytics_handler, create_link_handler, delete_link_handler, get_link_handler, hub_handler,
    list_links_handler, move_link_handler, reorder_links_handler, toggle_link_handler,
    update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Session-protected API routes.
///
/// # Endpoints
///
/// - `GET    /links`             - List all links
/// - `POST   /links`             - Create a link
/// - `GET    /links/{id}`        - Read a link
/// - `PATCH  /links/{id}`        - Partially update a link
/// - `DELETE /links/{id}`        - Delete a link
/// - `POST   /links/{id}/toggle` - Flip the enabled flag
/// - `POST   /links/move`        - Move one link (`{from, to}`)
/// - `PUT    /links/order`       - Replace the whole order (`{ids}`)
/// - `GET    /analytics`         - Click analytics report
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/links",
            get(list_links_handler).post(create_link_handler),
        )
        .route("/links/move", post(move_link_handler))
        .route("/links/order", put(reorder_links_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .patch(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/links/{id}/toggle", post(toggle_link_handler))
        .route("/analytics", get(analytics_handler))
}

/// Public API routes.
///
/// # Endpoints
///
/// - `GET /hub` - Links visible to the current visitor
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/hub", get(hub_handler))
}
