//! Shared test infrastructure for button-gesture integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use button_gesture::{ButtonInput, ButtonState, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Input
// ============================================================================

/// Mock button input whose level is set directly by the test
pub struct MockInput {
    actuated: bool,
    reads: u32,
}

impl MockInput {
    pub fn new() -> Self {
        Self {
            actuated: false,
            reads: 0,
        }
    }

    pub fn set(&mut self, actuated: bool) {
        self.actuated = actuated;
    }

    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl ButtonInput for MockInput {
    fn is_actuated(&mut self) -> bool {
        self.reads += 1;
        self.actuated
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Polling period used by `hold` and `press_and_release`
pub const TICK_MS: u64 = 10;

/// Samples `raw` every tick over `[from, to)`
pub fn hold(button: &mut ButtonState<TestInstant>, raw: bool, from: u64, to: u64) {
    let mut t = from;
    while t < to {
        button.sample(raw, TestInstant(t));
        t += TICK_MS;
    }
}

/// Presses the button at `press_at` and releases it at `release_at`, then keeps
/// polling released until `settle_until`
pub fn press_and_release(
    button: &mut ButtonState<TestInstant>,
    press_at: u64,
    release_at: u64,
    settle_until: u64,
) {
    hold(button, true, press_at, release_at);
    hold(button, false, release_at, settle_until);
}
