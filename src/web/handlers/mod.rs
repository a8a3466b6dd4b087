//! HTML template rendering handlers.

mod analytics;
mod dashboard;
mod hub;
mod link_form;
mod login;

pub use analytics::analytics_page_handler;
pub use dashboard::{dashboard_handler, delete_link_handler, move_link_handler, toggle_link_handler};
pub use hub::{hub_page_handler, root_handler};
pub use link_form::{create_link_handler, edit_link_handler, new_link_handler, update_link_handler};
pub use login::{login_page_handler, login_submit_handler, logout_handler};
