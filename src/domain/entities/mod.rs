//! Core domain entities representing the link hub data model.
//!
//! Entities are plain data structures; filtering, ordering and aggregation live
//! in the sibling modules of [`crate::domain`].
//!
//! # Entity Types
//!
//! - [`Link`] - A link with optional visibility rules
//! - [`AnalyticsSnapshot`] - Visitor and per-link click counters
//! - [`DeviceClass`] - Device a visitor uses or a link is restricted to
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewLink` - For creating new records (id assigned by the store)
//! - `LinkPatch` - For partial updates

pub mod analytics;
pub mod device;
pub mod link;

pub use analytics::AnalyticsSnapshot;
pub use device::{DeviceClass, UnknownDevice};
pub use link::{Link, LinkId, LinkPatch, LinkRules, NewLink, TimeRange, parse_hhmm};
