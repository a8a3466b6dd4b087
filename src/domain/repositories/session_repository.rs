//! Repository trait for dashboard sessions.

use crate::error::AppError;
use async_trait::async_trait;

/// Set of live session tokens.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemorySessionRepository`] - process-local set
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Registers a new session token.
    async fn insert(&self, token: String) -> Result<(), AppError>;

    /// Returns true if `token` belongs to a live session.
    async fn contains(&self, token: &str) -> Result<bool, AppError>;

    /// Ends a session. Returns `false` if the token was unknown.
    async fn remove(&self, token: &str) -> Result<bool, AppError>;

    /// Number of live sessions.
    async fn count(&self) -> Result<usize, AppError>;
}
