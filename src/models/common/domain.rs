#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

use crate::models::common::Duration;

/// Represents a time window with inclusive bounds.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TimeWindow {
    /// Start of the time window.
    pub start: Duration,
    /// End of the time window.
    pub end: Duration,
}

impl TimeWindow {
    /// Creates a new instance of `TimeWindow`.
    pub fn new(start: Duration, end: Duration) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Returns an unlimited time window.
    pub fn max() -> Self {
        Self { start: 0, end: Duration::MAX }
    }

    /// Checks whether the time window contains the given time.
    pub fn contains(&self, time: Duration) -> bool {
        self.start <= time && time <= self.end
    }

    /// Returns the length of the time window.
    pub fn length(&self) -> Duration {
        self.end - self.start
    }
}
