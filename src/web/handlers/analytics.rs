//! Analytics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::aggregation::{ChartBar, RankedLink};
use crate::error::AppError;
use crate::state::AppState;

/// Template for the analytics page.
///
/// Renders `templates/analytics.html` with:
/// - Visitor, click, top link and click rate cards
/// - Clicks per link bar chart
/// - Ranking table and best/worst performer insights
#[derive(Template, WebTemplate)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate {
    pub active: &'static str,
    pub total_visitors: String,
    pub total_clicks: String,
    pub click_rate: String,
    pub top: Option<RankedLink>,
    pub least: Option<RankedLink>,
    pub chart: Vec<ChartBar>,
    pub ranking: Vec<RankedLink>,
}

/// Renders the analytics page.
///
/// # Endpoint
///
/// `GET /analytics`
pub async fn analytics_page_handler(
    State(state): State<AppState>,
) -> Result<AnalyticsTemplate, AppError> {
    let report = state.analytics_service.report().await?;

    Ok(AnalyticsTemplate {
        active: "analytics",
        total_visitors: with_thousands_separator(report.total_visitors),
        total_clicks: with_thousands_separator(report.total_clicks),
        click_rate: report.click_rate_label(),
        top: report.top,
        least: report.least,
        chart: report.chart,
        ranking: report.ranking,
    })
}

/// Formats `1247` as `1,247`.
fn with_thousands_separator(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_separator() {
        assert_eq!(with_thousands_separator(0), "0");
        assert_eq!(with_thousands_separator(999), "999");
        assert_eq!(with_thousands_separator(1247), "1,247");
        assert_eq!(with_thousands_separator(1_000_000), "1,000,000");
    }
}
