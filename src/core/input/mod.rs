//=========================================================================
// Input System
//
// High-level input handling for scenes.
//
// Responsibilities:
// - Fold each frame's platform batches into the `StateTracker`
// - Resolve press events into actions (restart, launch, quit...)
// - Resolve held bindings into held actions (movement)
//
// Notes:
// The system is owned by `GlobalSystems` and updated on the logic thread.
// Scenes never see it directly: they read the resolved actions and the
// raw tracker through `GlobalContext`.
//
//=========================================================================

//=== Submodules ==========================================================

mod action;
mod action_mapper;
pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use action::{Action, InputContext};
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use state_tracker::StateTracker;

//=== External Dependencies ===============================================

use std::collections::HashSet;

use log::trace;

//=== Internal Dependencies ===============================================

use action_mapper::{ActionMapper, Trigger};

//=== InputSystem =========================================================

/// Binding registry and per-frame action resolver.
///
/// ```
/// # use disaster_drills::prelude::*;
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Walk { Up, Restart }
/// impl Action for Walk {}
///
/// let mut input = InputSystem::<Walk>::new();
/// input.bind_key(KeyCode::KeyW, Walk::Up, InputContext::Primary);
/// input.bind_key(KeyCode::KeyR, Walk::Restart, InputContext::Primary);
/// ```
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
    pressed: Vec<A>,
    held: HashSet<A>,
}

impl<A: Action> InputSystem<A> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::new(),
            pressed: Vec::new(),
            held: HashSet::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key (no modifiers) to an action.
    pub fn bind_key(&mut self, key: KeyCode, action: A, context: InputContext) {
        self.mapper
            .bind(Trigger::Key(key), Modifiers::NONE, action, context);
    }

    /// Binds a mouse button (no modifiers) to an action.
    pub fn bind_mouse(&mut self, button: MouseButton, action: A, context: InputContext) {
        self.mapper
            .bind(Trigger::Button(button), Modifiers::NONE, action, context);
    }

    //--- Context ----------------------------------------------------------

    /// Activates a binding context.
    pub fn set_context(&mut self, context: InputContext) {
        if context != self.mapper.current_context() {
            trace!("Input context {:?} -> {:?}", self.mapper.current_context(), context);
            self.mapper.set_context(context);
        }
    }

    /// Returns the active binding context.
    pub fn context(&self) -> InputContext {
        self.mapper.current_context()
    }

    //--- Frame Processing -------------------------------------------------

    /// Applies this frame's input batches and resolves actions.
    ///
    /// Pressed actions fire once per physical press, in arrival order.
    /// Auto-repeat downs of a held key only keep its held action alive.
    pub fn process_frame(&mut self, state: &mut StateTracker, batches: &[Vec<InputEvent>]) {
        state.begin_frame();
        self.pressed.clear();

        for batch in batches {
            let fresh = state.process_events(batch);
            self.pressed
                .extend(fresh.iter().filter_map(|event| self.mapper.map_event(event)));
        }

        self.held = self.mapper.held_actions(state);

        if !self.pressed.is_empty() {
            trace!("Actions this frame: {:?}", self.pressed);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Actions triggered by presses during the last processed frame.
    pub fn actions(&self) -> &[A] {
        &self.pressed
    }

    /// Actions whose bindings were held at the end of the last frame.
    pub fn held(&self) -> &HashSet<A> {
        &self.held
    }
}

impl<A: Action> Default for InputSystem<A> {
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

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Up,
        Restart,
        Launch,
    }

    impl Action for TestAction {}

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    fn system() -> InputSystem<TestAction> {
        let mut input = InputSystem::new();
        input.bind_key(KeyCode::KeyW, TestAction::Up, InputContext::Primary);
        input.bind_key(KeyCode::KeyR, TestAction::Restart, InputContext::Primary);
        input.bind_key(KeyCode::Enter, TestAction::Launch, InputContext::custom(0));
        input
    }

    #[test]
    fn press_produces_action_for_one_frame() {
        let mut input = system();
        let mut state = StateTracker::new();

        input.process_frame(&mut state, &[vec![key_down(KeyCode::KeyR)]]);
        assert_eq!(input.actions(), &[TestAction::Restart]);

        input.process_frame(&mut state, &[]);
        assert!(input.actions().is_empty());
    }

    #[test]
    fn held_key_produces_held_action_until_release() {
        let mut input = system();
        let mut state = StateTracker::new();

        input.process_frame(&mut state, &[vec![key_down(KeyCode::KeyW)]]);
        assert!(input.held().contains(&TestAction::Up));

        input.process_frame(&mut state, &[]);
        assert!(input.held().contains(&TestAction::Up));

        input.process_frame(&mut state, &[vec![key_up(KeyCode::KeyW)]]);
        assert!(input.held().is_empty());
    }

    #[test]
    fn batches_are_processed_in_order() {
        let mut input = system();
        let mut state = StateTracker::new();

        input.process_frame(
            &mut state,
            &[
                vec![key_down(KeyCode::KeyR), key_up(KeyCode::KeyR)],
                vec![key_down(KeyCode::KeyR)],
            ],
        );

        assert_eq!(input.actions(), &[TestAction::Restart, TestAction::Restart]);
        assert!(state.is_key_down(KeyCode::KeyR));
    }

    #[test]
    fn switching_context_changes_resolution() {
        let mut input = system();
        let mut state = StateTracker::new();

        input.set_context(InputContext::custom(0));
        assert_eq!(input.context(), InputContext::custom(0));

        input.process_frame(&mut state, &[vec![key_down(KeyCode::Enter), key_down(KeyCode::KeyR)]]);
        assert_eq!(input.actions(), &[TestAction::Launch]);
    }

    #[test]
    fn auto_repeat_fires_pressed_action_once() {
        let mut input = system();
        input.set_context(InputContext::custom(0));
        let mut state = StateTracker::new();

        let fired: usize = (0..5)
            .map(|_| {
                input.process_frame(&mut state, &[vec![key_down(KeyCode::Enter)]]);
                input.actions().len()
            })
            .sum();
        assert_eq!(fired, 1);

        input.process_frame(&mut state, &[vec![key_up(KeyCode::Enter)]]);
        input.process_frame(&mut state, &[vec![key_down(KeyCode::Enter)]]);
        assert_eq!(input.actions(), &[TestAction::Launch]);
    }

    #[test]
    fn repeat_within_one_frame_is_not_a_second_press() {
        let mut input = system();
        let mut state = StateTracker::new();

        input.process_frame(
            &mut state,
            &[vec![key_down(KeyCode::KeyR)], vec![key_down(KeyCode::KeyR)]],
        );
        assert_eq!(input.actions(), &[TestAction::Restart]);
    }

    #[test]
    fn focus_loss_stops_held_movement() {
        let mut input = system();
        let mut state = StateTracker::new();

        input.process_frame(&mut state, &[vec![key_down(KeyCode::KeyW)]]);
        assert!(input.held().contains(&TestAction::Up));

        input.process_frame(&mut state, &[vec![InputEvent::FocusLost]]);
        assert!(input.held().is_empty());

        for _ in 0..3 {
            input.process_frame(&mut state, &[]);
            assert!(input.held().is_empty());
        }
    }
}
