//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and the pure functions of [`crate::domain`]. Services consume repository
//! traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Add, edit, toggle, delete and reorder links
//! - [`services::hub_service::HubService`] - Viewing context and visible links for the hub
//! - [`services::analytics_service::AnalyticsService`] - Click totals and ranking
//! - [`services::session_service::SessionService`] - Dashboard login sessions

pub mod services;
