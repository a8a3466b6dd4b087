//! Public link hub page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::HeaderMap,
    response::Redirect,
};
use chrono::Local;

use crate::api::dto::hub::HubQuery;
use crate::api::extract::AppQuery;
use crate::domain::entities::Link;
use crate::domain::entities::link::hhmm;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::user_agent::user_agent;

/// Template for the public hub page.
#[derive(Template, WebTemplate)]
#[template(path = "hub.html")]
pub struct HubTemplate {
    pub profile_name: String,
    pub profile_bio: String,
    pub device: String,
    /// Local time the time-range rules were evaluated at, empty when disabled.
    pub time: String,
    pub links: Vec<Link>,
}

/// Renders the links visible to the current visitor.
///
/// # Endpoint
///
/// `GET /hub` (`?device=mobile|tablet|desktop` to preview another device)
///
/// # Errors
///
/// Returns 400 Bad Request for `device=all`.
pub async fn hub_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(query): AppQuery<HubQuery>,
) -> Result<HubTemplate, AppError> {
    let hub = &state.hub_service;
    let ctx = hub.context_for(
        query.requested_device()?,
        user_agent(&headers),
        Local::now().time(),
    );
    let links = hub.visible_links(&ctx).await?;
    let settings = hub.settings();

    Ok(HubTemplate {
        profile_name: settings.profile_name.clone(),
        profile_bio: settings.profile_bio.clone(),
        device: ctx.device.to_string(),
        time: ctx
            .time
            .map(|t| t.format(hhmm::FORMAT).to_string())
            .unwrap_or_default(),
        links,
    })
}

/// `GET /` sends visitors to the hub.
pub async fn root_handler() -> Redirect {
    Redirect::to("/hub")
}
