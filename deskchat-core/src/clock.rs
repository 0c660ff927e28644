//! Time source abstraction so message timestamps stay testable.

use chrono::NaiveDateTime;

/// Supplies the current local time for message timestamping.
///
/// The directory is generic over its clock, so tests can pin time to a
/// known instant while production code reads the system clock.
pub trait Clock {
    /// Returns the current moment in local time.
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time from the operating system.
///
/// Local time, which can step backward across a DST change; readings
/// carry no ordering guarantee.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    #[must_use]
    pub const fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}
