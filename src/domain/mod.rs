//! Domain layer containing business entities and logic.
//!
//! This module implements the core of the link hub independent of HTTP,
//! templates or storage.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (links, rules, analytics counters)
//! - [`repositories`] - State access trait definitions
//! - [`visibility`] - Which links the public hub shows, and in what order
//! - [`reorder`] - Splice-move of one link and full reorder by id list
//! - [`aggregation`] - Click totals, ranking and chart data
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Filtering, reordering and aggregation are pure functions over slices
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod aggregation;
pub mod entities;
pub mod reorder;
pub mod repositories;
pub mod visibility;
