//! DTOs for reordering links.

use serde::Deserialize;

use crate::domain::entities::LinkId;

/// Request body for `POST /api/links/move`.
///
/// Moves the link at position `from` to position `to`; the links in between
/// shift by one.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub from: usize,
    pub to: usize,
}

/// Request body for `PUT /api/links/order`.
///
/// Must name every current link exactly once.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub ids: Vec<LinkId>,
}
