//! Derived click statistics for the analytics page.

use serde::Serialize;

use crate::domain::entities::{AnalyticsSnapshot, Link, LinkId};

/// Maximum number of title characters shown under a chart bar.
pub const CHART_LABEL_MAX_CHARS: usize = 15;

/// Click count of one link in collection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkClicks {
    pub id: LinkId,
    pub title: String,
    pub clicks: u64,
}

/// Position of a link in the ranking table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    Top,
    Lowest,
    Active,
}

impl Standing {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Lowest => "Lowest",
            Self::Active => "Active",
        }
    }
}

/// One row of the ranking table. `rank` starts at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedLink {
    pub rank: usize,
    pub id: LinkId,
    pub title: String,
    pub clicks: u64,
    pub standing: Standing,
}

/// One bar of the clicks-per-link chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub clicks: u64,
    /// Bar length relative to the busiest link, 0..=100.
    pub percent: u64,
}

/// Everything the analytics page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub total_visitors: u64,
    pub total_clicks: u64,
    /// `total_clicks / total_visitors * 100`, or 0 without visitors.
    pub click_rate: f64,
    pub per_link: Vec<LinkClicks>,
    pub ranking: Vec<RankedLink>,
    pub top: Option<RankedLink>,
    pub least: Option<RankedLink>,
    pub chart: Vec<ChartBar>,
}

impl AnalyticsReport {
    /// Click rate with one decimal, or `"0"` when there were no visitors.
    pub fn click_rate_label(&self) -> String {
        if self.total_visitors > 0 {
            format!("{:.1}", self.click_rate)
        } else {
            "0".to_string()
        }
    }
}

/// Computes the analytics report for the current links.
///
/// The total counts every entry of `snapshot.clicks`, including entries for
/// links that no longer exist; the ranking only covers `links`.
pub fn aggregate(links: &[Link], snapshot: &AnalyticsSnapshot) -> AnalyticsReport {
    let total_clicks = snapshot
        .clicks
        .values()
        .fold(0u64, |total, &clicks| total.saturating_add(clicks));

    let per_link: Vec<LinkClicks> = links
        .iter()
        .map(|link| LinkClicks {
            id: link.id.clone(),
            title: link.title.clone(),
            clicks: snapshot.clicks_for(&link.id),
        })
        .collect();

    let ranking = rank(&per_link);
    let top = ranking.first().cloned();
    let least = ranking.last().cloned();

    AnalyticsReport {
        total_visitors: snapshot.total_visitors,
        total_clicks,
        click_rate: click_rate(total_clicks, snapshot.total_visitors),
        chart: chart(&per_link),
        per_link,
        ranking,
        top,
        least,
    }
}

/// Clicks as a percentage of visitors; 0 when there are no visitors.
pub fn click_rate(total_clicks: u64, total_visitors: u64) -> f64 {
    if total_visitors == 0 {
        0.0
    } else {
        total_clicks as f64 / total_visitors as f64 * 100.0
    }
}

/// Stable descending sort by clicks.
fn rank(per_link: &[LinkClicks]) -> Vec<RankedLink> {
    let mut sorted: Vec<&LinkClicks> = per_link.iter().collect();
    sorted.sort_by(|a, b| b.clicks.cmp(&a.clicks));

    let last = sorted.len().saturating_sub(1);
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RankedLink {
            rank: index + 1,
            id: entry.id.clone(),
            title: entry.title.clone(),
            clicks: entry.clicks,
            standing: if index == 0 {
                Standing::Top
            } else if index == last {
                Standing::Lowest
            } else {
                Standing::Active
            },
        })
        .collect()
}

fn chart(per_link: &[LinkClicks]) -> Vec<ChartBar> {
    let max = per_link.iter().map(|l| l.clicks).max().unwrap_or(0);

    per_link
        .iter()
        .map(|entry| ChartBar {
            label: chart_label(&entry.title),
            clicks: entry.clicks,
            percent: bar_percent(entry.clicks, max),
        })
        .collect()
}

/// `clicks` relative to `max` as 0..=100, computed without overflow.
fn bar_percent(clicks: u64, max: u64) -> u64 {
    if max == 0 {
        return 0;
    }
    let percent = u128::from(clicks) * 100 / u128::from(max);
    u64::try_from(percent).unwrap_or(100)
}

/// Shortens long titles to [`CHART_LABEL_MAX_CHARS`] characters plus `...`.
pub fn chart_label(title: &str) -> String {
    if title.chars().count() > CHART_LABEL_MAX_CHARS {
        let head: String = title.chars().take(CHART_LABEL_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn link(id: &str, title: &str) -> Link {
        Link::new(
            LinkId::from(id),
            title.to_string(),
            format!("https://example.com/{id}"),
            true,
            None,
        )
    }

    fn snapshot(visitors: u64, clicks: &[(&str, u64)]) -> AnalyticsSnapshot {
        AnalyticsSnapshot::new(
            visitors,
            clicks
                .iter()
                .map(|(id, n)| (LinkId::from(*id), *n))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    #[test]
    fn test_seed_scenario() {
        let links = vec![link("1", "A"), link("2", "B"), link("3", "C")];
        let report = aggregate(
            &links,
            &snapshot(1247, &[("1", 543), ("2", 389), ("3", 215)]),
        );

        assert_eq!(report.total_clicks, 1147);
        let order: Vec<(&str, u64)> = report
            .ranking
            .iter()
            .map(|r| (r.id.as_str(), r.clicks))
            .collect();
        assert_eq!(order, vec![("1", 543), ("2", 389), ("3", 215)]);
        assert_eq!(report.top.as_ref().unwrap().id.as_str(), "1");
        assert_eq!(report.least.as_ref().unwrap().id.as_str(), "3");
        assert_eq!(report.click_rate_label(), "92.0");
    }

    #[test]
    fn test_stale_clicks_count_in_total_only() {
        let links = vec![link("1", "A")];
        let report = aggregate(&links, &snapshot(100, &[("1", 10), ("gone", 90)]));

        assert_eq!(report.total_clicks, 100);
        assert_eq!(report.ranking.len(), 1);
        assert_eq!(report.ranking[0].clicks, 10);
    }

    #[test]
    fn test_missing_click_entry_defaults_to_zero() {
        let links = vec![link("1", "A"), link("2", "B")];
        let report = aggregate(&links, &snapshot(5, &[("1", 3)]));

        assert_eq!(report.per_link[1].clicks, 0);
        assert_eq!(report.least.as_ref().unwrap().id.as_str(), "2");
    }

    #[test]
    fn test_empty_collection() {
        let report = aggregate(&[], &snapshot(10, &[("1", 4)]));

        assert_eq!(report.total_clicks, 4);
        assert!(report.ranking.is_empty());
        assert!(report.top.is_none());
        assert!(report.least.is_none());
        assert!(report.chart.is_empty());
    }

    #[test]
    fn test_click_rate_without_visitors() {
        let report = aggregate(&[link("1", "A")], &snapshot(0, &[("1", 50)]));

        assert_eq!(report.click_rate, 0.0);
        assert_eq!(report.click_rate_label(), "0");
    }

    #[test]
    fn test_ranking_is_stable_for_ties() {
        let links = vec![link("1", "A"), link("2", "B"), link("3", "C")];
        let report = aggregate(&links, &snapshot(1, &[("1", 5), ("2", 7), ("3", 5)]));

        let order: Vec<&str> = report.ranking.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_standings() {
        let links = vec![link("1", "A"), link("2", "B"), link("3", "C")];
        let report = aggregate(&links, &snapshot(1, &[("1", 3), ("2", 2), ("3", 1)]));

        let standings: Vec<Standing> = report.ranking.iter().map(|r| r.standing).collect();
        assert_eq!(
            standings,
            vec![Standing::Top, Standing::Active, Standing::Lowest]
        );

        let single = aggregate(&links[..1], &snapshot(1, &[("1", 3)]));
        assert_eq!(single.ranking[0].standing, Standing::Top);
    }

    #[test]
    fn test_chart_bars() {
        let links = vec![
            link("1", "Portfolio Website"),
            link("2", "Blog"),
            link("3", "Empty"),
        ];
        let report = aggregate(&links, &snapshot(1, &[("1", 200), ("2", 50)]));

        assert_eq!(report.chart[0].label, "Portfolio Websi...");
        assert_eq!(report.chart[0].percent, 100);
        assert_eq!(report.chart[1].label, "Blog");
        assert_eq!(report.chart[1].percent, 25);
        assert_eq!(report.chart[2].percent, 0);
    }

    #[test]
    fn test_chart_label() {
        assert_eq!(chart_label("exactly fifteen"), "exactly fifteen");
        assert_eq!(chart_label("sixteen chars!!!"), "sixteen chars!!...");
    }

    #[test]
    fn test_huge_counters_saturate() {
        let links = vec![link("1", "Viral")];
        let snapshot = AnalyticsSnapshot::new(
            10,
            BTreeMap::from([(LinkId::from("1"), u64::MAX), (LinkId::from("2"), 1)]),
        );

        let report = aggregate(&links, &snapshot);

        assert_eq!(report.total_clicks, u64::MAX);
        assert_eq!(report.chart[0].percent, 100);
        assert_eq!(report.top.unwrap().clicks, u64::MAX);
    }

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(0, 0), 0);
        assert_eq!(bar_percent(215, 543), 39);
        assert_eq!(bar_percent(u64::MAX / 2, u64::MAX), 49);
        assert_eq!(bar_percent(u64::MAX, u64::MAX), 100);
    }
}
