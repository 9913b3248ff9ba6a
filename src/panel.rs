use crate::button::{ButtonInput, ButtonState};
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ButtonId, GestureEvent};

/// Errors that can occur during panel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// The specified button ID does not exist in the panel.
    InvalidButtonId(ButtonId),

    /// Attempted to add a button with an ID that already exists.
    DuplicateButtonId(ButtonId),

    /// The button ID exceeds the panel's capacity.
    ButtonIdOutOfBounds { id: ButtonId, capacity: usize },
}

impl core::fmt::Display for PanelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PanelError::InvalidButtonId(id) => {
                write!(f, "button ID {} does not exist in panel", id.0)
            }
            PanelError::DuplicateButtonId(id) => {
                write!(f, "button ID {} already exists in panel", id.0)
            }
            PanelError::ButtonIdOutOfBounds { id, capacity } => {
                write!(
                    f,
                    "button ID {} exceeds panel capacity of {}",
                    id.0, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PanelError {}

struct Slot<I: TimeInstant, P: ButtonInput> {
    input: P,
    state: ButtonState<I>,
}

/// A fixed set of buttons sampled together from one polling loop.
///
/// Each button is identified by a user-specified `ButtonId` and owns its raw
/// input. A single call to [`update`](Self::update) reads the time source once
/// and samples every button at that instant, so all buttons see the same tick.
/// Gesture queries take the button ID and consume the gesture like their
/// [`ButtonState`] counterparts.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Input implementation type (must be same for all buttons in panel)
/// * `T` - Time source implementation type
/// * `MAX_BUTTONS` - Maximum number of buttons this panel can hold
pub struct ButtonPanel<'t, I: TimeInstant, P: ButtonInput, T: TimeSource<I>, const MAX_BUTTONS: usize> {
    slots: [Option<Slot<I, P>>; MAX_BUTTONS],
    time_source: &'t T,
}

impl<'t, I, P, T, const MAX_BUTTONS: usize> ButtonPanel<'t, I, P, T, MAX_BUTTONS>
where
    I: TimeInstant,
    P: ButtonInput,
    T: TimeSource<I>,
{
    /// Creates a new empty panel.
    ///
    /// # Arguments
    /// * `time_source` - Reference to the time source used to timestamp samples
    pub fn new(time_source: &'t T) -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
            time_source,
        }
    }

    /// Adds a released button with the specified ID.
    ///
    /// # Errors
    /// * `DuplicateButtonId` - A button with this ID already exists
    /// * `ButtonIdOutOfBounds` - The ID exceeds the panel's capacity
    pub fn add_button(&mut self, id: ButtonId, input: P) -> Result<(), PanelError> {
        let idx = id.0;

        if idx >= MAX_BUTTONS {
            return Err(PanelError::ButtonIdOutOfBounds {
                id,
                capacity: MAX_BUTTONS,
            });
        }

        if self.slots[idx].is_some() {
            return Err(PanelError::DuplicateButtonId(id));
        }

        self.slots[idx] = Some(Slot {
            input,
            state: ButtonState::new(),
        });

        #[cfg(feature = "defmt")]
        defmt::debug!("button {} added to panel", id);

        Ok(())
    }

    /// Polls every button's input and feeds it to its state machine.
    ///
    /// Call once per tick, before reading gestures for that tick.
    pub fn update(&mut self) {
        let now = self.time_source.now();

        for slot in self.slots.iter_mut().flatten() {
            let raw = slot.input.is_actuated();
            slot.state.sample(raw, now);
        }
    }

    /// Feeds a raw sample for one button at the current time, bypassing its
    /// input.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn sample(&mut self, id: ButtonId, raw_signal: bool) -> Result<(), PanelError> {
        let now = self.time_source.now();
        self.slot_mut(id)?.state.sample(raw_signal, now);
        Ok(())
    }

    /// Returns the debounced pressed state of the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn is_pressed(&self, id: ButtonId) -> Result<bool, PanelError> {
        Ok(self.slot(id)?.state.is_pressed())
    }

    /// Consumes a pending press of the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn was_pressed(&mut self, id: ButtonId) -> Result<bool, PanelError> {
        Ok(self.slot_mut(id)?.state.was_pressed())
    }

    /// Consumes a pending release of the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn was_released(&mut self, id: ButtonId) -> Result<bool, PanelError> {
        Ok(self.slot_mut(id)?.state.was_released())
    }

    /// Consumes a pending click of the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn was_clicked(&mut self, id: ButtonId) -> Result<bool, PanelError> {
        Ok(self.slot_mut(id)?.state.was_clicked())
    }

    /// Consumes a pending long press of the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn was_long_pressed(&mut self, id: ButtonId) -> Result<bool, PanelError> {
        Ok(self.slot_mut(id)?.state.was_long_pressed())
    }

    /// Consumes a pending double click of the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn was_double_clicked(&mut self, id: ButtonId) -> Result<bool, PanelError> {
        Ok(self.slot_mut(id)?.state.was_double_clicked())
    }

    /// Returns how long the specified button has been held as of now, or zero
    /// while it is released.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn press_duration(&self, id: ButtonId) -> Result<I::Duration, PanelError> {
        let now = self.time_source.now();
        Ok(self.slot(id)?.state.press_duration(now))
    }

    /// Returns the state machine of the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn button(&self, id: ButtonId) -> Result<&ButtonState<I>, PanelError> {
        Ok(&self.slot(id)?.state)
    }

    /// Returns the raw input of the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn input_mut(&mut self, id: ButtonId) -> Result<&mut P, PanelError> {
        Ok(&mut self.slot_mut(id)?.input)
    }

    /// Consumes the next pending gesture across all buttons.
    ///
    /// Buttons are scanned in ascending ID order; all pending gestures of a
    /// lower ID are returned before those of a higher one.
    pub fn next_event(&mut self) -> Option<GestureEvent> {
        self.slots
            .iter_mut()
            .enumerate()
            .find_map(|(idx, slot_opt)| {
                let gesture = slot_opt.as_mut()?.state.take_gesture()?;
                Some(GestureEvent::new(ButtonId(idx), gesture))
            })
    }

    /// Collects up to `Q` pending gestures.
    ///
    /// Gestures that do not fit stay pending and are returned by the next call.
    pub fn drain_events<const Q: usize>(&mut self) -> heapless::Vec<GestureEvent, Q> {
        let mut events = heapless::Vec::new();

        while !events.is_full() {
            match self.next_event() {
                Some(event) => {
                    // Capacity checked above
                    let _ = events.push(event);
                }
                None => break,
            }
        }

        events
    }

    /// Returns the number of buttons currently in the panel.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if the panel contains no buttons.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the panel contains a button with the given ID.
    pub fn contains(&self, id: ButtonId) -> bool {
        let idx = id.0;
        idx < MAX_BUTTONS && self.slots[idx].is_some()
    }

    fn slot(&self, id: ButtonId) -> Result<&Slot<I, P>, PanelError> {
        self.slots
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(PanelError::InvalidButtonId(id))
    }

    fn slot_mut(&mut self, id: ButtonId) -> Result<&mut Slot<I, P>, PanelError> {
        self.slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(PanelError::InvalidButtonId(id))
    }
}
