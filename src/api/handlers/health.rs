//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "link_store": { "status": "ok", "message": "3 links" },
///     "session_store": { "status": "ok", "message": "1 active sessions" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let link_check = check_link_store(&state).await;
    let session_check = check_session_store(&state).await;

    let all_healthy = link_check.status == "ok" && session_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            link_store: link_check,
            session_store: session_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_link_store(state: &AppState) -> CheckStatus {
    match state.link_service.list_links().await {
        Ok(links) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} links", links.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Link store error: {}", e)),
        },
    }
}

async fn check_session_store(state: &AppState) -> CheckStatus {
    match state.session_service.active_sessions().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} active sessions", count)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Session store error: {}", e)),
        },
    }
}
