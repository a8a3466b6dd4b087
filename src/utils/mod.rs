//! Helpers shared by the API and web layers.
//!
//! - [`session_cookie`] - Reading and building the dashboard session cookie
//! - [`user_agent`] - `User-Agent` extraction for device detection

pub mod session_cookie;
pub mod user_agent;
