//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    AnalyticsService, HubService, HubSettings, LinkService, SessionService,
};
use crate::domain::entities::{AnalyticsSnapshot, Link};
use crate::infrastructure::memory::{
    InMemoryLinkRepository, InMemorySessionRepository, StaticAnalyticsRepository,
};

pub type AppLinkService = LinkService<InMemoryLinkRepository>;
pub type AppHubService = HubService<InMemoryLinkRepository>;
pub type AppAnalyticsService = AnalyticsService<InMemoryLinkRepository, StaticAnalyticsRepository>;
pub type AppSessionService = SessionService<InMemorySessionRepository>;

/// Services over one shared link store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub hub_service: Arc<AppHubService>,
    pub analytics_service: Arc<AppAnalyticsService>,
    pub session_service: Arc<AppSessionService>,
    /// Adds the `Secure` attribute to the session cookie.
    pub secure_cookies: bool,
}

impl AppState {
    /// Wires all services around the given initial links and analytics counters.
    pub fn new(
        links: Vec<Link>,
        analytics: AnalyticsSnapshot,
        hub_settings: HubSettings,
        secure_cookies: bool,
    ) -> Self {
        let link_repository = Arc::new(InMemoryLinkRepository::with_links(links));
        let analytics_repository = Arc::new(StaticAnalyticsRepository::new(analytics));
        let session_repository = Arc::new(InMemorySessionRepository::new());

        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            hub_service: Arc::new(HubService::new(link_repository.clone(), hub_settings)),
            analytics_service: Arc::new(AnalyticsService::new(
                link_repository,
                analytics_repository,
            )),
            session_service: Arc::new(SessionService::new(session_repository)),
            secure_cookies,
        }
    }
}
