//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract state
//! access following the Repository pattern. Implementations live in
//! `crate::infrastructure::memory`; services only ever see the traits, so the
//! core stays testable without any HTTP or UI layer.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Ordered link collection
//! - [`AnalyticsRepository`] - Visitor and click counters
//! - [`SessionRepository`] - Dashboard session tokens
//!
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod analytics_repository;
pub mod link_repository;
pub mod session_repository;

pub use analytics_repository::AnalyticsRepository;
pub use link_repository::LinkRepository;
pub use session_repository::SessionRepository;

#[cfg(test)]
pub use analytics_repository::MockAnalyticsRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
