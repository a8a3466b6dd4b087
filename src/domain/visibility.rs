//! Public visibility of links on the hub page.
//!
//! A link is visible when it is enabled, its device rule admits the viewer's
//! device and, if the viewing context carries a time of day, its time-range
//! rule contains that time. Visible links are ordered by ascending priority;
//! links without a priority sort after every explicit one.

use chrono::NaiveTime;

use crate::domain::entities::{DeviceClass, Link};

/// Priority assumed for links that do not set one.
pub const DEFAULT_PRIORITY: i32 = 999;

/// Who is looking at the hub, and when.
///
/// `time` is optional: without it time-range rules are not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewingContext {
    pub device: DeviceClass,
    pub time: Option<NaiveTime>,
}

impl ViewingContext {
    pub fn new(device: DeviceClass) -> Self {
        Self { device, time: None }
    }

    /// Same context, evaluated at `time`.
    pub fn at(self, time: NaiveTime) -> Self {
        Self {
            time: Some(time),
            ..self
        }
    }
}

/// Returns the links to show for `ctx`, ordered by priority.
///
/// The sort is stable, so links with equal priority keep their relative order
/// from `links`. The input is never modified.
pub fn visible_links(links: &[Link], ctx: &ViewingContext) -> Vec<Link> {
    let mut visible: Vec<Link> = links
        .iter()
        .filter(|link| is_visible(link, ctx))
        .cloned()
        .collect();

    visible.sort_by_key(effective_priority);
    visible
}

/// Returns true if `link` passes every rule for `ctx`.
pub fn is_visible(link: &Link, ctx: &ViewingContext) -> bool {
    link.enabled && device_allows(link.device(), ctx.device) && time_allows(link, ctx.time)
}

/// Priority used for ordering.
///
/// Only a missing priority falls back to [`DEFAULT_PRIORITY`]; an explicit `0`
/// is a real priority and sorts ahead of `1`.
pub fn effective_priority(link: &Link) -> i32 {
    link.priority().unwrap_or(DEFAULT_PRIORITY)
}

fn device_allows(rule: Option<DeviceClass>, viewer: DeviceClass) -> bool {
    match rule {
        None | Some(DeviceClass::All) => true,
        Some(device) => device == viewer,
    }
}

fn time_allows(link: &Link, now: Option<NaiveTime>) -> bool {
    match (link.time_range(), now) {
        (Some(range), Some(now)) => range.contains(now),
        _ => true,
    }
}
