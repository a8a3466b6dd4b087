//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, UpdateLinkRequest};
use crate::api::dto::reorder::{MoveRequest, ReorderRequest};
use crate::api::extract::AppJson;
use crate::domain::entities::{Link, LinkId};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all links in dashboard order, including disabled ones.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Link>>, AppError> {
    Ok(Json(state.link_service.list_links().await?))
}

/// Returns one link.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has this id.
pub async fn get_link_handler(
    Path(id): Path<LinkId>,
    State(state): State<AppState>,
) -> Result<Json<Link>, AppError> {
    Ok(Json(state.link_service.get_link(&id).await?))
}

/// Creates a link and appends it at the end of the list.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or validation fails.
pub async fn create_link_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateLinkRequest>,
) -> Result<(StatusCode, Json<Link>), AppError> {
    payload.validate()?;

    let link = state.link_service.add_link(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(link)))
}

/// Partially updates a link.
///
/// # Endpoint
///
/// `PATCH /api/links/{id}`
///
/// # Request Body
///
/// All fields are optional. Only provided fields are changed.
///
/// ```json
/// {
///   "title": "Portfolio",
///   "enabled": false,
///   "rules": null
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if no link has this id.
/// Returns 400 Bad Request if validation fails.
pub async fn update_link_handler(
    Path(id): Path<LinkId>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateLinkRequest>,
) -> Result<Json<Link>, AppError> {
    payload.validate()?;

    let link = state.link_service.update_link(&id, payload.into()).await?;

    Ok(Json(link))
}

/// Flips the enabled flag of a link.
///
/// # Endpoint
///
/// `POST /api/links/{id}/toggle`
///
/// # Errors
///
/// Returns 404 Not Found if no link has this id.
pub async fn toggle_link_handler(
    Path(id): Path<LinkId>,
    State(state): State<AppState>,
) -> Result<Json<Link>, AppError> {
    Ok(Json(state.link_service.toggle_link(&id).await?))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// Click counters of the deleted link stay in the analytics totals.
///
/// # Errors
///
/// Returns 404 Not Found if no link has this id.
pub async fn delete_link_handler(
    Path(id): Path<LinkId>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Moves one link to another position and returns the new order.
///
/// # Endpoint
///
/// `POST /api/links/move`
///
/// ```json
/// { "from": 0, "to": 2 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if either index is out of range.
pub async fn move_link_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<MoveRequest>,
) -> Result<Json<Vec<Link>>, AppError> {
    let links = state
        .link_service
        .move_link(payload.from, payload.to)
        .await?;

    Ok(Json(links))
}

/// Replaces the whole order.
///
/// # Endpoint
///
/// `PUT /api/links/order`
///
/// ```json
/// { "ids": ["3", "1", "2"] }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request unless `ids` lists every current link exactly once.
pub async fn reorder_links_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ReorderRequest>,
) -> Result<Json<Vec<Link>>, AppError> {
    let links = state.link_service.reorder_by_ids(&payload.ids).await?;
    Ok(Json(links))
}
