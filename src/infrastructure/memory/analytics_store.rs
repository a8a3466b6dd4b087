//! Fixed analytics counters.

use async_trait::async_trait;

use crate::domain::entities::AnalyticsSnapshot;
use crate::domain::repositories::AnalyticsRepository;
use crate::error::AppError;

/// Serves the snapshot it was created with. Nothing mutates it.
#[derive(Debug, Clone, Default)]
pub struct StaticAnalyticsRepository {
    snapshot: AnalyticsSnapshot,
}

impl StaticAnalyticsRepository {
    pub fn new(snapshot: AnalyticsSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl AnalyticsRepository for StaticAnalyticsRepository {
    async fn snapshot(&self) -> Result<AnalyticsSnapshot, AppError> {
        Ok(self.snapshot.clone())
    }
}
