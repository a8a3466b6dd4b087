//! # SmartLinks
//!
//! A single-user "link in bio" service: a dashboard to manage links with
//! device, time and priority rules, a public hub page showing the links that
//! apply to the current visitor, and click analytics.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, visibility rules, reordering,
//!   analytics aggregation and repository traits
//! - **Application Layer** ([`application`]) - Services orchestrating the domain
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory stores and seed data
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered pages
//!
//! All state lives in memory for the lifetime of the process.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # open http://localhost:3000/login, any email and password will do
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AnalyticsService, HubService, HubSettings, LinkService, SessionService,
    };
    pub use crate::domain::entities::{
        AnalyticsSnapshot, DeviceClass, Link, LinkId, LinkPatch, LinkRules, NewLink, TimeRange,
    };
    pub use crate::domain::visibility::ViewingContext;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
