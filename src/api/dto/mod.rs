//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Links themselves are returned as
//! [`crate::domain::entities::Link`], whose JSON shape is the public contract.

pub mod health;
pub mod hub;
pub mod link;
pub mod reorder;
