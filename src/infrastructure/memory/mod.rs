//! Process-local repository implementations.
//!
//! All state lives for the lifetime of the process; nothing is persisted.

mod analytics_store;
mod id_generator;
mod link_store;
mod session_store;

pub use analytics_store::StaticAnalyticsRepository;
pub use id_generator::LinkIdGenerator;
pub use link_store::InMemoryLinkRepository;
pub use session_store::InMemorySessionRepository;
