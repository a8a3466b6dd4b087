//! Handler for the public hub JSON endpoint.

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
};
use chrono::Local;

use crate::api::dto::hub::{HubProfile, HubQuery, HubResponse};
use crate::api::extract::AppQuery;
use crate::domain::entities::link::hhmm;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::user_agent::user_agent;

/// Returns the links a visitor currently sees on the hub, in display order.
///
/// # Endpoint
///
/// `GET /api/hub?device=mobile`
///
/// # Device Resolution
///
/// 1. `device` query parameter (`mobile`, `tablet` or `desktop`)
/// 2. `User-Agent` classification, when `HUB_DETECT_DEVICE` is enabled
/// 3. `HUB_DEVICE` (default `desktop`)
///
/// Time-range rules only apply when `HUB_TIME_RULES` is enabled; the response
/// then carries the local time they were evaluated at.
///
/// # Errors
///
/// Returns 400 Bad Request for `device=all` or an unknown device.
pub async fn hub_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(query): AppQuery<HubQuery>,
) -> Result<Json<HubResponse>, AppError> {
    let hub = &state.hub_service;
    let ctx = hub.context_for(
        query.requested_device()?,
        user_agent(&headers),
        Local::now().time(),
    );
    let links = hub.visible_links(&ctx).await?;
    let settings = hub.settings();

    Ok(Json(HubResponse {
        profile: HubProfile {
            name: settings.profile_name.clone(),
            bio: settings.profile_bio.clone(),
        },
        device: ctx.device,
        time: ctx.time.map(|t| t.format(hhmm::FORMAT).to_string()),
        links,
    }))
}
