//! Web layer for browser-based UI.
//!
//! Server-rendered pages for the login gate, the dashboard, the public link
//! hub and analytics. Uses Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`forms`] - Form payloads and their validation
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Session middleware
//! - [`routes`] - Page route configuration

pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
