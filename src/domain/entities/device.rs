//! Device classes used by link visibility rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Class of device a visitor is browsing from, or that a link is restricted to.
///
/// `All` only makes sense as a rule value: a link restricted to `All` is shown
/// everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
    All,
}

/// Error returned when parsing an unknown device name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device class '{0}' (expected mobile, tablet, desktop or all)")]
pub struct UnknownDevice(pub String);

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
            Self::All => "all",
        }
    }

    /// Human-readable label used by the dashboard form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mobile => "Mobile Only",
            Self::Tablet => "Tablet Only",
            Self::Desktop => "Desktop Only",
            Self::All => "All Devices",
        }
    }

    /// Every class in form display order.
    pub fn options() -> [DeviceClass; 4] {
        [Self::All, Self::Mobile, Self::Tablet, Self::Desktop]
    }

    /// Classifies a `User-Agent` header value.
    ///
    /// Tablet markers win over phone markers (iPad user agents also mention
    /// "Mobile"; Android tablets omit it). Anything unrecognised is a desktop.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();

        if ua.contains("ipad")
            || ua.contains("tablet")
            || (ua.contains("android") && !ua.contains("mobile"))
        {
            Self::Tablet
        } else if ua.contains("mobi") || ua.contains("iphone") || ua.contains("ipod") {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceClass {
    type Err = UnknownDevice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Self::Mobile),
            "tablet" => Ok(Self::Tablet),
            "desktop" => Ok(Self::Desktop),
            "all" => Ok(Self::All),
            other => Err(UnknownDevice(other.to_string())),
        }
    }
}
