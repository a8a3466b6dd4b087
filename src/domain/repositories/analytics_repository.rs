//! Repository trait for analytics counters.

use crate::domain::entities::AnalyticsSnapshot;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to visitor and click counters.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::StaticAnalyticsRepository`] - fixed snapshot
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Returns the current counters.
    async fn snapshot(&self) -> Result<AnalyticsSnapshot, AppError>;
}
