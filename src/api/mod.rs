//! JSON API layer.
//!
//! Exposes the same link operations as the dashboard, for scripts and the
//! dashboard's drag-and-drop reordering.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Body and query extractors reporting errors as JSON
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
