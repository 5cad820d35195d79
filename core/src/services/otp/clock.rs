//! Time source for expiry decisions

use chrono::{DateTime, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current UTC timestamp
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
