//! Time abstraction traits for platform-agnostic scheduling.
//!
//! Patterns never look at time; only the device loop uses these to decide
//! when to sample, report and tick.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Fires at most once per period.
///
/// The first poll fires immediately. After that a poll fires once at least
/// `period` has passed since the last firing; a late poll does not make up
/// for missed periods.
#[derive(Debug, Clone, Copy)]
pub struct Interval<I: TimeInstant> {
    period: I::Duration,
    last: Option<I>,
}

impl<I: TimeInstant> Interval<I> {
    /// Creates an interval of `period` milliseconds.
    pub fn from_millis(period: u64) -> Self {
        Self {
            period: I::Duration::from_millis(period),
            last: None,
        }
    }

    /// Returns true, and restarts the period, if the interval is due at `now`.
    pub fn poll(&mut self, now: I) -> bool {
        let due = match self.last {
            None => true,
            Some(last) => now.duration_since(last).as_millis() >= self.period.as_millis(),
        };

        if due {
            self.last = Some(now);
        }
        due
    }

    /// Returns the period.
    pub fn period(&self) -> I::Duration {
        self.period
    }
}
