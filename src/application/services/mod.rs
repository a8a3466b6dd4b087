//! Business logic services for the application layer.

pub mod analytics_service;
pub mod hub_service;
pub mod link_service;
pub mod session_service;

pub use analytics_service::AnalyticsService;
pub use hub_service::{HubService, HubSettings};
pub use link_service::LinkService;
pub use session_service::SessionService;
