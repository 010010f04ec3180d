//=========================================================================
// Input Buffer
//
// Collects converted input events between two redraws.
//
// Responsibilities:
// - Store incoming key/button events in arrival order
// - Drop back-to-back duplicates (OS key repeat floods)
// - Hand the whole frame over in one `drain()`
//
// Notes:
// The buffer lives on the platform thread and is emptied on every
// `RedrawRequested`.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================
//
// Transient event store for one frame of input.
//
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates enough room for a frame of frantic key mashing.
    //
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 64;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Event Handling ---------------------------------------------------
    //
    // Appends an event unless it repeats the previous one exactly. A held
    // key produces a stream of identical KeyDown events; one is enough.
    //
    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events, or `None` when nothing arrived so the
    // caller can skip sending an empty message.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.events))
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, Modifiers};

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyW));
        buffer.push(key_down(KeyCode::KeyW));
        buffer.push(key_down(KeyCode::KeyD));
        assert_eq!(
            buffer.drain(),
            Some(vec![key_down(KeyCode::KeyW), key_down(KeyCode::KeyD)])
        );
    }

    #[test]
    fn tap_pairs_survive() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyR));
        buffer.push(key_up(KeyCode::KeyR));
        buffer.push(key_down(KeyCode::KeyR));

        assert_eq!(
            buffer.drain(),
            Some(vec![key_down(KeyCode::KeyR), key_up(KeyCode::KeyR), key_down(KeyCode::KeyR)])
        );
    }

    #[test]
    fn drain_empties_and_reports_none_when_idle() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyA));

        assert!(buffer.drain().is_some());
        assert_eq!(buffer.drain(), None);
    }
}
