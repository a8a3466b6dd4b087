//! Link management service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkId, LinkPatch, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;
use tracing::info;

/// Service for creating, editing, deleting and reordering links.
///
/// All dashboard intents go through this service; it is the only writer of the
/// [`LinkRepository`].
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns all links in dashboard order.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn get_link(&self, id: &LinkId) -> Result<Link, AppError> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| link_not_found(id))
    }

    /// Appends a new link at the end of the sequence.
    pub async fn add_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = self.repository.create(new_link).await?;
        info!(id = %link.id, title = %link.title, "link added");
        Ok(link)
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn update_link(&self, id: &LinkId, patch: LinkPatch) -> Result<Link, AppError> {
        let link = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| link_not_found(id))?;
        info!(id = %link.id, "link updated");
        Ok(link)
    }

    /// Flips the enabled flag of a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn toggle_link(&self, id: &LinkId) -> Result<Link, AppError> {
        let link = self
            .repository
            .toggle(id)
            .await?
            .ok_or_else(|| link_not_found(id))?;
        info!(id = %link.id, enabled = link.enabled, "link toggled");
        Ok(link)
    }

    /// Removes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn delete_link(&self, id: &LinkId) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(link_not_found(id));
        }
        info!(id = %id, "link deleted");
        Ok(())
    }

    /// Moves the link at position `from` to position `to` (splice semantics).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either index is out of range.
    pub async fn move_link(&self, from: usize, to: usize) -> Result<Vec<Link>, AppError> {
        let reordered = self.repository.move_link(from, to).await?;
        info!(from, to, "link moved");
        Ok(reordered)
    }

    /// Replaces the order with the given id sequence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] unless `ids` names every current link
    /// exactly once.
    pub async fn reorder_by_ids(&self, ids: &[LinkId]) -> Result<Vec<Link>, AppError> {
        let reordered = self.repository.reorder(ids).await?;
        info!(count = reordered.len(), "links reordered");
        Ok(reordered)
    }
}

fn link_not_found(id: &LinkId) -> AppError {
    AppError::not_found("Link not found", json!({ "id": id }))
}
