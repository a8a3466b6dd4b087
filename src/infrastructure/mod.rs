//! Infrastructure layer providing concrete state storage.
//!
//! This layer implements the repository interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`memory`] - In-memory repositories (links, analytics, sessions)
//! - [`seed`] - Sample links and analytics loaded at startup

pub mod memory;
pub mod seed;
