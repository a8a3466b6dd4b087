//! Repository trait for the ordered link collection.

use crate::domain::entities::{Link, LinkId, LinkPatch, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface owning the ordered sequence of links.
///
/// The order of [`LinkRepository::list`] is the order links appear on the
/// dashboard. Absent ids are never an error at this level: `update`, `toggle`
/// and `delete` report whether anything matched and otherwise do nothing.
///
/// Every method is one atomic step against the collection. Read-modify-write
/// operations (`toggle`, `move_link`, `reorder`) must not let another mutation
/// land between their read and their write.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns a snapshot of all links in display order.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Finds a link by id.
    async fn find(&self, id: &LinkId) -> Result<Option<Link>, AppError>;

    /// Appends a new link with a freshly generated id.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Merges `patch` into the link with `id`.
    ///
    /// Returns the updated link, or `None` if no link has that id.
    async fn update(&self, id: &LinkId, patch: LinkPatch) -> Result<Option<Link>, AppError>;

    /// Flips the enabled flag of the link with `id`.
    ///
    /// Returns the updated link, or `None` if no link has that id.
    async fn toggle(&self, id: &LinkId) -> Result<Option<Link>, AppError>;

    /// Removes the link with `id`. Returns `false` if it did not exist.
    async fn delete(&self, id: &LinkId) -> Result<bool, AppError>;

    /// Replaces the whole sequence.
    ///
    /// The caller is responsible for passing a permutation of the current links;
    /// the repository stores whatever it is given.
    async fn replace_all(&self, links: Vec<Link>) -> Result<(), AppError>;

    /// Splice-moves the link at position `from` to position `to` and returns
    /// the new sequence.
    ///
    /// Fails with a validation error if either index is out of range.
    async fn move_link(&self, from: usize, to: usize) -> Result<Vec<Link>, AppError>;

    /// Rearranges the sequence into the order of `ids` and returns it.
    ///
    /// Fails with a validation error unless `ids` names every link exactly once.
    async fn reorder(&self, ids: &[LinkId]) -> Result<Vec<Link>, AppError>;
}
