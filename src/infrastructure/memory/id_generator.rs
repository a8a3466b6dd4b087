//! Link id generation.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::domain::entities::LinkId;

/// Hands out unique link ids.
///
/// Ids are decimal strings counting up from a starting value. Seeding from the
/// wall clock keeps them in the same shape as timestamp ids while two links
/// created within the same millisecond still get distinct ids.
#[derive(Debug)]
pub struct LinkIdGenerator {
    next: AtomicU64,
}

impl LinkIdGenerator {
    /// Starts counting at the current Unix time in milliseconds.
    pub fn from_clock() -> Self {
        let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        Self::starting_at(millis)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn next_id(&self) -> LinkId {
        LinkId::new(self.next.fetch_add(1, Ordering::Relaxed).to_string())
    }
}

impl Default for LinkIdGenerator {
    fn default() -> Self {
        Self::from_clock()
    }
}
