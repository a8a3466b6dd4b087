//! Public link hub service.

use std::sync::Arc;

use chrono::NaiveTime;

use crate::domain::entities::{DeviceClass, Link};
use crate::domain::repositories::LinkRepository;
use crate::domain::visibility::{ViewingContext, visible_links};
use crate::error::AppError;

/// Settings for the public hub page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubSettings {
    /// Device assumed when the visitor's device is neither requested nor detected.
    pub default_device: DeviceClass,
    /// Classify the visitor's `User-Agent` when no device is requested.
    pub detect_device: bool,
    /// Evaluate time-range rules against the current time of day.
    pub time_rules: bool,
    pub profile_name: String,
    pub profile_bio: String,
}

impl Default for HubSettings {
    fn default() -> Self {
        Self {
            default_device: DeviceClass::Desktop,
            detect_device: false,
            time_rules: false,
            profile_name: "Your Name".to_string(),
            profile_bio: "Welcome to my link hub! Connect with me on all platforms.".to_string(),
        }
    }
}

/// Computes what the public hub shows.
pub struct HubService<R: LinkRepository> {
    repository: Arc<R>,
    settings: HubSettings,
}

impl<R: LinkRepository> HubService<R> {
    /// Creates a new hub service.
    pub fn new(repository: Arc<R>, settings: HubSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub fn settings(&self) -> &HubSettings {
        &self.settings
    }

    /// Resolves the viewing context for one request.
    ///
    /// Device precedence: explicitly `requested` device, then the `User-Agent`
    /// (only when detection is enabled), then the configured default. `now` is
    /// attached only when time-range rules are enabled.
    pub fn context_for(
        &self,
        requested: Option<DeviceClass>,
        user_agent: Option<&str>,
        now: NaiveTime,
    ) -> ViewingContext {
        let device = requested
            .or_else(|| {
                self.settings
                    .detect_device
                    .then(|| user_agent.map(DeviceClass::from_user_agent))
                    .flatten()
            })
            .unwrap_or(self.settings.default_device);

        let ctx = ViewingContext::new(device);
        if self.settings.time_rules {
            ctx.at(now)
        } else {
            ctx
        }
    }

    /// Returns the links visible in `ctx`, ordered by priority.
    pub async fn visible_links(&self, ctx: &ViewingContext) -> Result<Vec<Link>, AppError> {
        let links = self.repository.list().await?;
        Ok(visible_links(&links, ctx))
    }
}
