//! Click analytics service.

use std::sync::Arc;

use crate::domain::aggregation::{AnalyticsReport, aggregate};
use crate::domain::repositories::{AnalyticsRepository, LinkRepository};
use crate::error::AppError;

/// Service producing the analytics report from the current links and counters.
pub struct AnalyticsService<L: LinkRepository, A: AnalyticsRepository> {
    links: Arc<L>,
    analytics: Arc<A>,
}

impl<L: LinkRepository, A: AnalyticsRepository> AnalyticsService<L, A> {
    /// Creates a new analytics service.
    pub fn new(links: Arc<L>, analytics: Arc<A>) -> Self {
        Self { links, analytics }
    }

    /// Aggregates the counters over the current link collection.
    pub async fn report(&self) -> Result<AnalyticsReport, AppError> {
        let links = self.links.list().await?;
        let snapshot = self.analytics.snapshot().await?;

        Ok(aggregate(&links, &snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AnalyticsSnapshot;
    use crate::domain::repositories::{MockAnalyticsRepository, MockLinkRepository};
    use crate::infrastructure::seed::{sample_analytics, sample_links};

    #[tokio::test]
    async fn test_report_over_seed_data() {
        let mut links = MockLinkRepository::new();
        links.expect_list().times(1).returning(|| Ok(sample_links()));
        let mut analytics = MockAnalyticsRepository::new();
        analytics
            .expect_snapshot()
            .times(1)
            .returning(|| Ok(sample_analytics()));

        let service = AnalyticsService::new(Arc::new(links), Arc::new(analytics));
        let report = service.report().await.unwrap();

        assert_eq!(report.total_visitors, 1247);
        assert_eq!(report.total_clicks, 1147);
        assert_eq!(report.top.unwrap().title, "Portfolio Website");
        assert_eq!(report.least.unwrap().title, "LinkedIn");
    }

    #[tokio::test]
    async fn test_report_without_links() {
        let mut links = MockLinkRepository::new();
        links.expect_list().returning(|| Ok(Vec::new()));
        let mut analytics = MockAnalyticsRepository::new();
        analytics
            .expect_snapshot()
            .returning(|| Ok(AnalyticsSnapshot::default()));

        let service = AnalyticsService::new(Arc::new(links), Arc::new(analytics));
        let report = service.report().await.unwrap();

        assert_eq!(report.total_clicks, 0);
        assert!(report.top.is_none());
        assert_eq!(report.click_rate_label(), "0");
    }
}
