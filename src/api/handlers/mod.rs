//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analytics;
pub mod health;
pub mod hub;
pub mod links;

pub use analytics::analytics_handler;
pub use health::health_handler;
pub use hub::hub_handler;
pub use links::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    move_link_handler, reorder_links_handler, toggle_link_handler, update_link_handler,
};
