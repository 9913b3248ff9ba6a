#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonState`**: Debounces one button and latches its gestures
//! - **`ButtonInput`**: Trait to implement for your button hardware
//! - **`ButtonPanel`**: Samples a fixed set of buttons from one polling loop
//! - **`Gesture`**: A classified event (`Press`, `DoubleClick`, `Release`, `Click`, `LongPress`)
//! - **`GestureEvent`**: A gesture tagged with the `ButtonId` that produced it
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Timing policy is fixed: a raw level must hold for more than
//! [`DEBOUNCE_INTERVAL_MS`] to be accepted, holds of [`LONG_PRESS_THRESHOLD_MS`]
//! or more are long presses, and presses starting within
//! [`DOUBLE_CLICK_WINDOW_MS`] of the previous press are double clicks.

pub mod time;
pub mod types;
pub mod button;
pub mod panel;

pub use button::{ButtonInput, ButtonState};
pub use panel::{ButtonPanel, PanelError};
pub use types::{ButtonId, Gesture, GestureEvent};
pub use time::{TimeDuration, TimeInstant, TimeSource};

/// How long a raw level must hold, exclusive, before it becomes the stable state.
pub const DEBOUNCE_INTERVAL_MS: u64 = 50;

/// Minimum hold for a release to count as a long press rather than a click.
pub const LONG_PRESS_THRESHOLD_MS: u64 = 1000;

/// Maximum gap between two press starts, exclusive, for a double click.
pub const DOUBLE_CLICK_WINDOW_MS: u64 = 400;
