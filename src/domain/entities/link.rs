//! Link entity and its visibility rules.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::device::DeviceClass;

/// Opaque identifier of a link.
///
/// Rendered as a decimal string. Uniqueness within the collection is guaranteed
/// by the store that assigns it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(String);

impl LinkId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LinkId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LinkId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Daily window during which a link is shown.
///
/// Serialized as `{"start": "HH:MM", "end": "HH:MM"}`. A window whose start is
/// after its end wraps past midnight; equal bounds cover the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Returns true if `time` falls inside the window (start inclusive, end exclusive).
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.start == self.end {
            true
        } else if self.start < self.end {
            self.start <= time && time < self.end
        } else {
            time >= self.start || time < self.end
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format(hhmm::FORMAT),
            self.end.format(hhmm::FORMAT)
        )
    }
}

/// Optional visibility rules attached to a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// A link shown on the hub page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub title: String,
    pub url: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<LinkRules>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: LinkId,
        title: String,
        url: String,
        enabled: bool,
        rules: Option<LinkRules>,
    ) -> Self {
        Self {
            id,
            title,
            url,
            enabled,
            rules,
        }
    }

    /// Builds a link from creation data and a freshly assigned id.
    pub fn from_new(id: LinkId, new_link: NewLink) -> Self {
        Self::new(
            id,
            new_link.title,
            new_link.url,
            new_link.enabled,
            new_link.rules,
        )
    }

    pub fn device(&self) -> Option<DeviceClass> {
        self.rules.as_ref().and_then(|r| r.device)
    }

    pub fn priority(&self) -> Option<i32> {
        self.rules.as_ref().and_then(|r| r.priority)
    }

    pub fn time_range(&self) -> Option<TimeRange> {
        self.rules.as_ref().and_then(|r| r.time_range)
    }

    /// Merges a partial update into this link. `None` fields are left unchanged.
    pub fn apply(&mut self, patch: LinkPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(rules) = patch.rules {
            self.rules = rules;
        }
    }
}

/// Input data for creating a new link. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub title: String,
    pub url: String,
    pub enabled: bool,
    pub rules: Option<LinkRules>,
}

/// Partial update for an existing link.
///
/// `None` fields are left unchanged. `rules` replaces the whole rule set:
/// `Some(None)` clears it, `Some(Some(r))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub enabled: Option<bool>,
    pub rules: Option<Option<LinkRules>>,
}

impl LinkPatch {
    /// Patch that only flips the enabled flag.
    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Self::default()
        }
    }
}

/// Parses an `HH:MM` time of day.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value.trim(), hhmm::FORMAT)
}

/// Serde adapter for `HH:MM` strings.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_hhmm(&raw).map_err(D::Error::custom)
    }
}
