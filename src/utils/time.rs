//! Time utilities: the injectable clock and ISO timestamp formatting.

use chrono::{DateTime, Local};

/// Source of "now" for everything that stamps rows.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in server local time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a given instant, for tests.
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now
    }
}

/// Naive local ISO-8601 timestamp with microseconds, e.g.
/// `2025-03-14T09:30:00.000000`. Lexicographic order equals
/// chronological order, which the log listing relies on.
pub fn iso_timestamp(at: &DateTime<Local>) -> String {
    at.naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
