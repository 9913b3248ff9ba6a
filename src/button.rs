//! Debounced button state machine with gesture detection.
//!
//! Provides [`ButtonState`], which turns a noisy raw "is the button held"
//! signal into a stable pressed state plus latched gesture flags, and the
//! [`ButtonInput`] trait for reading raw signals from hardware.

use crate::time::{TimeDuration, TimeInstant};
use crate::types::Gesture;
use crate::{DEBOUNCE_INTERVAL_MS, DOUBLE_CLICK_WINDOW_MS, LONG_PRESS_THRESHOLD_MS};

/// Trait for abstracting raw button hardware.
///
/// Implement this for your input hardware (GPIO pin, touch zone, I/O expander
/// bit, etc.) so a [`ButtonPanel`](crate::ButtonPanel) can poll it.
pub trait ButtonInput {
    /// Returns `true` while the button is physically actuated.
    ///
    /// Implementations should translate pin polarity themselves (an active-low
    /// pin reads `true` when low) and handle any hardware errors internally -
    /// this method cannot fail.
    fn is_actuated(&mut self) -> bool;
}

/// Debounce and gesture state for a single physical button.
///
/// Call [`sample`](Self::sample) once per polling tick with the raw signal and
/// the current instant, then read the gesture queries. The `was_*` queries are
/// consuming reads: each reports an occurrence once and then clears it.
/// Occurrences of the same gesture that happen between two reads are merged
/// into one report.
///
/// Instants passed to [`sample`](Self::sample) and
/// [`press_duration`](Self::press_duration) must never go backwards.
///
/// A new button has no previous press, so its first accepted press is never a
/// double click, however soon after power-up it happens. Clocks that start at
/// zero therefore do not report a spurious double click during the first
/// [`DOUBLE_CLICK_WINDOW_MS`] of uptime.
///
/// # Type Parameters
/// * `I` - Time instant type
#[derive(Debug, Clone, Copy)]
pub struct ButtonState<I: TimeInstant> {
    raw_signal_last: bool,
    stable_pressed: bool,
    press_started_at: Option<I>,
    last_press_started_at: Option<I>,
    last_debounce_change_at: Option<I>,
    pressed_flag: bool,
    released_flag: bool,
    click_flag: bool,
    long_press_flag: bool,
    double_click_flag: bool,
}

impl<I: TimeInstant> ButtonState<I> {
    /// Creates a released button with no history.
    pub const fn new() -> Self {
        Self {
            raw_signal_last: false,
            stable_pressed: false,
            press_started_at: None,
            last_press_started_at: None,
            last_debounce_change_at: None,
            pressed_flag: false,
            released_flag: false,
            click_flag: false,
            long_press_flag: false,
            double_click_flag: false,
        }
    }

    /// Feeds one raw sample into the state machine.
    ///
    /// Every change of the raw signal restarts the debounce timer. Once the
    /// raw signal has held its value for strictly longer than
    /// [`DEBOUNCE_INTERVAL_MS`], it becomes the stable state, and the accepted
    /// press or release is classified:
    ///
    /// - a press starting less than [`DOUBLE_CLICK_WINDOW_MS`] after the
    ///   previous press started latches a double click
    /// - a release after a hold of at least [`LONG_PRESS_THRESHOLD_MS`]
    ///   latches a long press, any shorter hold latches a click
    pub fn sample(&mut self, raw_signal: bool, now: I) {
        if raw_signal != self.raw_signal_last {
            self.last_debounce_change_at = Some(now);
            self.raw_signal_last = raw_signal;
        }

        // No edge seen yet, so the raw signal still matches the stable state.
        let Some(changed_at) = self.last_debounce_change_at else {
            return;
        };

        if now.duration_since(changed_at).as_millis() <= DEBOUNCE_INTERVAL_MS {
            return;
        }

        match (self.stable_pressed, self.raw_signal_last) {
            (false, true) => self.accept_press(now),
            (true, false) => self.accept_release(now),
            _ => {}
        }
    }

    fn accept_press(&mut self, now: I) {
        let double_click = self.last_press_started_at.is_some_and(|previous| {
            now.duration_since(previous).as_millis() < DOUBLE_CLICK_WINDOW_MS
        });

        self.double_click_flag |= double_click;
        self.press_started_at = Some(now);
        self.last_press_started_at = Some(now);
        self.stable_pressed = true;
        self.pressed_flag = true;

        #[cfg(feature = "defmt")]
        defmt::trace!("button press accepted, double click: {}", double_click);
    }

    fn accept_release(&mut self, now: I) {
        let held_millis = self
            .press_started_at
            .map_or(0, |start| now.duration_since(start).as_millis());
        let long_press = held_millis >= LONG_PRESS_THRESHOLD_MS;

        self.long_press_flag |= long_press;
        self.click_flag |= !long_press;
        self.stable_pressed = false;
        self.released_flag = true;

        #[cfg(feature = "defmt")]
        defmt::trace!("button release accepted after {} ms, long press: {}", held_millis, long_press);
    }

    /// Returns the debounced pressed state.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.stable_pressed
    }

    /// Returns the most recent raw sample, before debouncing.
    #[inline]
    pub fn raw_signal(&self) -> bool {
        self.raw_signal_last
    }

    /// Returns true once per accepted press.
    pub fn was_pressed(&mut self) -> bool {
        take(&mut self.pressed_flag)
    }

    /// Returns true once per accepted release.
    pub fn was_released(&mut self) -> bool {
        take(&mut self.released_flag)
    }

    /// Returns true once per accepted release that was not a long press.
    pub fn was_clicked(&mut self) -> bool {
        take(&mut self.click_flag)
    }

    /// Returns true once per accepted release that was a long press.
    pub fn was_long_pressed(&mut self) -> bool {
        take(&mut self.long_press_flag)
    }

    /// Returns true once per press that started inside the double-click window.
    pub fn was_double_clicked(&mut self) -> bool {
        take(&mut self.double_click_flag)
    }

    /// Returns how long the button has been held, or zero while released.
    pub fn press_duration(&self, now: I) -> I::Duration {
        match self.press_started_at {
            Some(start) if self.stable_pressed => now.duration_since(start),
            _ => I::Duration::ZERO,
        }
    }

    /// Consumes and returns the next pending gesture.
    ///
    /// Pending gestures are yielded in the order they occur within a
    /// press/release cycle: `Press`, `DoubleClick`, `Release`, then `Click` or
    /// `LongPress`. Returns `None` once nothing is pending.
    pub fn take_gesture(&mut self) -> Option<Gesture> {
        if self.was_pressed() {
            Some(Gesture::Press)
        } else if self.was_double_clicked() {
            Some(Gesture::DoubleClick)
        } else if self.was_released() {
            Some(Gesture::Release)
        } else if self.was_clicked() {
            Some(Gesture::Click)
        } else if self.was_long_pressed() {
            Some(Gesture::LongPress)
        } else {
            None
        }
    }

    /// Returns true if any gesture is waiting to be read.
    pub fn has_pending_gesture(&self) -> bool {
        self.pressed_flag
            || self.double_click_flag
            || self.released_flag
            || self.click_flag
            || self.long_press_flag
    }

    /// Returns the button to its initial released state, dropping all history
    /// and pending gestures.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<I: TimeInstant> Default for ButtonState<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn take(flag: &mut bool) -> bool {
    core::mem::replace(flag, false)
}
