//! Handler for the analytics report endpoint.

use axum::{Json, extract::State};

use crate::domain::aggregation::AnalyticsReport;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click analytics for the current links.
///
/// # Endpoint
///
/// `GET /api/analytics`
///
/// # Response
///
/// ```json
/// {
///   "total_visitors": 1247,
///   "total_clicks": 1147,
///   "click_rate": 91.98,
///   "per_link": [{ "id": "1", "title": "Portfolio Website", "clicks": 543 }],
///   "ranking": [{ "rank": 1, "id": "1", "title": "Portfolio Website", "clicks": 543, "standing": "top" }],
///   "top": { "rank": 1, "...": "..." },
///   "least": { "rank": 3, "...": "..." },
///   "chart": [{ "label": "Portfolio Websi...", "clicks": 543, "percent": 100 }]
/// }
/// ```
///
/// `total_clicks` includes counters of deleted links; `ranking` does not.
pub async fn analytics_handler(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsReport>, AppError> {
    let report = state.analytics_service.report().await?;
    Ok(Json(report))
}
