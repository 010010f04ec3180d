//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state with per-frame deltas.
//
// Architecture:
//   InputEvent → process_events() → Switches<KeyCode> / Switches<MouseButton>
//                        └─► fresh press edges (fed to the action mapper)
//
// Frame lifecycle: begin_frame() → process_events() → query
//
// The drills poll held keys every tick for movement and react to the
// press edge for restart, so both views are kept side by side.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== Switches ============================================================

/// Held set plus the edges observed during the current frame.
#[derive(Debug)]
struct Switches<T: Copy + Eq + Hash> {
    held: HashSet<T>,
    pressed: HashSet<T>,
    released: HashSet<T>,
}

impl<T: Copy + Eq + Hash> Switches<T> {
    fn new() -> Self {
        Self {
            held: HashSet::new(),
            pressed: HashSet::new(),
            released: HashSet::new(),
        }
    }

    fn clear_edges(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    // A repeated down (OS key repeat) is not a new press.
    fn press(&mut self, item: T) -> bool {
        let fresh = self.held.insert(item);
        if fresh {
            self.pressed.insert(item);
        }
        fresh
    }

    // An up without a matching down is ignored.
    fn release(&mut self, item: T) {
        if self.held.remove(&item) {
            self.released.insert(item);
        }
    }

    fn release_all(&mut self) {
        for item in self.held.drain() {
            self.released.insert(item);
        }
    }
}

//=== StateTracker ========================================================

/// Tracks held keys/buttons and the press/release edges of the current frame.
#[derive(Debug)]
pub struct StateTracker {
    keys: Switches<KeyCode>,
    buttons: Switches<MouseButton>,
    modifiers: Modifiers,
}

impl StateTracker {
    /// Creates a tracker with nothing held.
    pub fn new() -> Self {
        Self {
            keys: Switches::new(),
            buttons: Switches::new(),
            modifiers: Modifiers::NONE,
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Drops last frame's pressed/released edges. Held state survives.
    pub(crate) fn begin_frame(&mut self) {
        self.keys.clear_edges();
        self.buttons.clear_edges();
    }

    /// Applies a batch of events in arrival order.
    ///
    /// Returns the events that were new press edges. A down for a key or
    /// button that is already held (OS auto-repeat) is not among them.
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) -> Vec<InputEvent> {
        events
            .iter()
            .filter(|event| self.process_event(event))
            .copied()
            .collect()
    }

    /// Applies one event; `true` for a new press edge.
    fn process_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::KeyDown { key, modifiers } => {
                self.modifiers = modifiers;
                self.keys.press(key)
            }
            InputEvent::KeyUp { key, modifiers } => {
                self.modifiers = modifiers;
                self.keys.release(key);
                false
            }
            InputEvent::MouseButtonDown { button, modifiers } => {
                self.modifiers = modifiers;
                self.buttons.press(button)
            }
            InputEvent::MouseButtonUp { button, modifiers } => {
                self.modifiers = modifiers;
                self.buttons.release(button);
                false
            }
            InputEvent::FocusLost => {
                self.release_all();
                false
            }
            InputEvent::Unidentified => false,
        }
    }

    fn release_all(&mut self) {
        self.keys.release_all();
        self.buttons.release_all();
        self.modifiers = Modifiers::NONE;
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` on the frame the key went down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.pressed.contains(&key)
    }

    /// Returns `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.held.contains(&key)
    }

    /// Returns `true` on the frame the key went up.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys.released.contains(&key)
    }

    /// Iterates all keys currently held.
    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys.held.iter()
    }

    //=====================================================================
    // Query API - Mouse Buttons
    //=====================================================================

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.pressed.contains(&button)
    }

    /// Like [`is_key_down`](Self::is_key_down) but for mouse buttons.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons.held.contains(&button)
    }

    /// Like [`is_key_released`](Self::is_key_released) but for mouse buttons.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.buttons.released.contains(&button)
    }

    //=====================================================================
    // Query API - Modifiers
    //=====================================================================

    /// Modifier state carried by the most recent key/button event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    fn click(button: MouseButton) -> InputEvent {
        InputEvent::MouseButtonDown { button, modifiers: Modifiers::NONE }
    }

    fn unclick(button: MouseButton) -> InputEvent {
        InputEvent::MouseButtonUp { button, modifiers: Modifiers::NONE }
    }

    //--- Keyboard ---------------------------------------------------------

    #[test]
    fn pressed_only_on_transition_frame() {
        let mut tracker = StateTracker::new();

        tracker.begin_frame();
        tracker.process_events(&[key_down(KeyCode::KeyR)]);
        assert!(tracker.is_key_pressed(KeyCode::KeyR));
        assert!(tracker.is_key_down(KeyCode::KeyR));

        tracker.begin_frame();
        tracker.process_events(&[]);
        assert!(!tracker.is_key_pressed(KeyCode::KeyR));
        assert!(tracker.is_key_down(KeyCode::KeyR));

        tracker.begin_frame();
        tracker.process_events(&[key_up(KeyCode::KeyR)]);
        assert!(!tracker.is_key_down(KeyCode::KeyR));
        assert!(tracker.is_key_released(KeyCode::KeyR));
    }

    #[test]
    fn held_movement_keys_persist_across_frames() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::KeyW), key_down(KeyCode::KeyD)]);

        for _ in 0..10 {
            tracker.begin_frame();
            tracker.process_events(&[]);
            assert!(tracker.is_key_down(KeyCode::KeyW));
            assert!(tracker.is_key_down(KeyCode::KeyD));
        }

        let mut held: Vec<_> = tracker.keys_down().copied().collect();
        held.sort_by_key(|k| format!("{:?}", k));
        assert_eq!(held, vec![KeyCode::KeyD, KeyCode::KeyW]);
    }

    #[test]
    fn fast_tap_registers_both_edges() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::KeyR), key_up(KeyCode::KeyR)]);

        assert!(tracker.is_key_pressed(KeyCode::KeyR));
        assert!(tracker.is_key_released(KeyCode::KeyR));
        assert!(!tracker.is_key_down(KeyCode::KeyR));
    }

    #[test]
    fn key_repeat_is_not_a_new_press() {
        let mut tracker = StateTracker::new();
        assert_eq!(tracker.process_events(&[key_down(KeyCode::KeyA)]), vec![key_down(KeyCode::KeyA)]);
        tracker.begin_frame();
        assert!(tracker.process_events(&[key_down(KeyCode::KeyA)]).is_empty());

        assert!(!tracker.is_key_pressed(KeyCode::KeyA));
        assert!(tracker.is_key_down(KeyCode::KeyA));
    }

    #[test]
    fn spurious_release_is_ignored() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_up(KeyCode::KeyS)]);
        assert!(!tracker.is_key_released(KeyCode::KeyS));
    }

    //--- Mouse ------------------------------------------------------------

    #[test]
    fn mouse_button_edges_and_hold() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[click(MouseButton::Left)]);
        assert!(tracker.is_button_pressed(MouseButton::Left));
        assert!(tracker.is_button_down(MouseButton::Left));

        tracker.begin_frame();
        tracker.process_events(&[unclick(MouseButton::Left)]);
        assert!(!tracker.is_button_pressed(MouseButton::Left));
        assert!(tracker.is_button_released(MouseButton::Left));
        assert!(!tracker.is_button_down(MouseButton::Left));
    }

    //--- Modifiers / focus ------------------------------------------------

    #[test]
    fn modifiers_follow_latest_event() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[InputEvent::KeyDown {
            key: KeyCode::KeyR,
            modifiers: Modifiers::CTRL,
        }]);
        assert_eq!(tracker.modifiers(), Modifiers::CTRL);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[
            click(MouseButton::Left),
            InputEvent::KeyDown { key: KeyCode::KeyW, modifiers: Modifiers::SHIFT },
        ]);
        assert_eq!(tracker.modifiers(), Modifiers::SHIFT);

        tracker.begin_frame();
        tracker.process_events(&[InputEvent::FocusLost]);

        assert_eq!(tracker.modifiers(), Modifiers::NONE);
        assert!(!tracker.is_key_down(KeyCode::KeyW));
        assert!(tracker.is_key_released(KeyCode::KeyW));
        assert!(!tracker.is_button_down(MouseButton::Left));
    }

    #[test]
    fn unidentified_events_change_nothing() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[InputEvent::Unidentified]);
        assert_eq!(tracker.keys_down().count(), 0);
    }
}
