//! Time abstraction traits for platform-agnostic timing.
//!
//! The state machine never reads a clock itself. Callers pass instants in
//! (or hand a [`TimeSource`] to a [`ButtonPanel`](crate::ButtonPanel)), so any
//! monotonic millisecond-resolution clock works: `embassy_time::Instant`, a
//! SysTick counter, or a mock in tests.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
///
/// Instants handed to the library must be monotonically non-decreasing.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
