//! Core types for gesture reporting.

/// A classified button event.
///
/// Variants are listed in the order they occur within one press/release cycle,
/// which is also the order [`ButtonState::take_gesture`](crate::ButtonState::take_gesture)
/// yields them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Debounced press accepted.
    Press,

    /// Press started within the double-click window of the previous press.
    DoubleClick,

    /// Debounced release accepted.
    Release,

    /// Release after a hold shorter than the long-press threshold.
    Click,

    /// Release after a hold of at least the long-press threshold.
    LongPress,
}

/// An identifier for a button within a [`ButtonPanel`](crate::ButtonPanel).
///
/// Wraps the slot index so that button IDs cannot be confused with other
/// integers. IDs must be below the panel's `MAX_BUTTONS` capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(pub usize);

impl From<usize> for ButtonId {
    fn from(id: usize) -> Self {
        ButtonId(id)
    }
}

impl From<ButtonId> for usize {
    fn from(id: ButtonId) -> Self {
        id.0
    }
}

/// A gesture tagged with the button that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureEvent {
    pub button: ButtonId,
    pub gesture: Gesture,
}

impl GestureEvent {
    /// Creates event.
    #[inline]
    pub fn new(button: ButtonId, gesture: Gesture) -> Self {
        Self { button, gesture }
    }
}
