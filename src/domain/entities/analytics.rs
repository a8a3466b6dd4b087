//! Analytics snapshot entity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::link::LinkId;

/// Visitor and click counters for the hub.
///
/// `clicks` is keyed by [`LinkId`] but not tied to the link collection: an entry
/// may reference a link that no longer exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_visitors: u64,
    #[serde(default)]
    pub clicks: BTreeMap<LinkId, u64>,
}

impl AnalyticsSnapshot {
    pub fn new(total_visitors: u64, clicks: BTreeMap<LinkId, u64>) -> Self {
        Self {
            total_visitors,
            clicks,
        }
    }

    /// Click count recorded for `id`, or 0.
    pub fn clicks_for(&self, id: &LinkId) -> u64 {
        self.clicks.get(id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clicks_for_defaults_to_zero() {
        let snapshot = AnalyticsSnapshot::new(10, BTreeMap::from([(LinkId::from("1"), 4)]));

        assert_eq!(snapshot.clicks_for(&LinkId::from("1")), 4);
        assert_eq!(snapshot.clicks_for(&LinkId::from("2")), 0);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot: AnalyticsSnapshot = serde_json::from_value(json!({
            "totalVisitors": 1247,
            "clicks": { "1": 543, "2": 389 }
        }))
        .unwrap();

        assert_eq!(snapshot.total_visitors, 1247);
        assert_eq!(snapshot.clicks.len(), 2);
    }
}
