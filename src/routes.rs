//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`, `/hub`     - Public link hub page
//! - `GET  /health`       - Health check (public)
//! - `/login`, `/logout`  - Session gate
//! - `/dashboard/*`       - Link management pages (session required)
//! - `GET  /analytics`    - Analytics page (session required)
//! - `/api/hub`           - Public hub JSON
//! - `/api/*`             - JSON API (session required)
//! - `/static/*`          - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on public routes, stricter on login
//! - **Authentication** - Session cookie: 401 for the API, redirect for pages
//!
//! Trailing-slash normalization wraps the router in [`crate::server::run`].

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limited` - apply per-IP rate limits; the server must then provide
///   `ConnectInfo<SocketAddr>`, which in-process test clients do not
pub fn app_router(state: AppState, rate_limited: bool) -> Router {
    let mut public = Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"));
    let mut public_api = api::routes::public_routes();
    let mut login = web::routes::login_routes();

    if rate_limited {
        public = public.layer(rate_limit::layer());
        public_api = public_api.layer(rate_limit::layer());
        login = login.layer(rate_limit::secure_layer());
    }

    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .merge(public_api);

    let web_protected = web::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), web_auth::layer),
    );

    Router::new()
        .merge(public)
        .merge(login)
        .merge(web_protected)
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}
