//! Sample data loaded at startup.

use std::collections::BTreeMap;

use crate::domain::entities::{AnalyticsSnapshot, DeviceClass, Link, LinkId, LinkRules};

/// Visitor count of the sample analytics snapshot.
pub const SAMPLE_TOTAL_VISITORS: u64 = 1247;

/// Three sample links covering each device rule.
pub fn sample_links() -> Vec<Link> {
    vec![
        sample_link(
            "1",
            "Portfolio Website",
            "https://example.com/portfolio",
            DeviceClass::All,
            1,
        ),
        sample_link(
            "2",
            "Instagram Profile",
            "https://instagram.com/user",
            DeviceClass::Mobile,
            2,
        ),
        sample_link(
            "3",
            "LinkedIn",
            "https://linkedin.com/in/user",
            DeviceClass::Desktop,
            3,
        ),
    ]
}

/// Fixed visitor and click counters matching [`sample_links`].
pub fn sample_analytics() -> AnalyticsSnapshot {
    AnalyticsSnapshot::new(
        SAMPLE_TOTAL_VISITORS,
        BTreeMap::from([
            (LinkId::from("1"), 543),
            (LinkId::from("2"), 389),
            (LinkId::from("3"), 215),
        ]),
    )
}

fn sample_link(id: &str, title: &str, url: &str, device: DeviceClass, priority: i32) -> Link {
    Link::new(
        LinkId::from(id),
        title.to_string(),
        url.to_string(),
        true,
        Some(LinkRules {
            time_range: None,
            device: Some(device),
            priority: Some(priority),
        }),
    )
}
