//=========================================================================
// Action Mapper
//=========================================================================
//
// Resolves raw input to game actions through configured bindings.
//
// Architecture:
//   (Trigger, Modifiers, InputContext) → HashMap → Action
//
// Two views are produced each frame:
// - pressed actions: one per press event, exact modifier match
// - held actions: every binding whose trigger is currently held,
//   modifiers ignored (continuous movement)
//
// Only bindings in the active context resolve.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

//=== Internal Dependencies ===============================================

use super::{
    action::{Action, InputContext},
    event::{InputEvent, KeyCode, Modifiers, MouseButton},
    state_tracker::StateTracker,
};

//=== Trigger =============================================================

/// Physical input a binding listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Trigger {
    Key(KeyCode),
    Button(MouseButton),
}

impl Trigger {
    fn is_held(&self, state: &StateTracker) -> bool {
        match *self {
            Trigger::Key(key) => state.is_key_down(key),
            Trigger::Button(button) => state.is_button_down(button),
        }
    }
}

//=== ActionMapper ========================================================

type BindingKey = (Trigger, Modifiers, InputContext);

/// Maps input to actions via (trigger, modifiers, context) lookups.
pub(crate) struct ActionMapper<A: Action> {
    bindings: HashMap<BindingKey, A>,
    current_context: InputContext,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a mapper with the Primary context active and no bindings.
    pub(crate) fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            current_context: InputContext::Primary,
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a trigger with exact modifiers to an action.
    ///
    /// Rebinding the same (trigger, modifiers, context) replaces the
    /// previous action.
    pub(crate) fn bind(
        &mut self,
        trigger: Trigger,
        modifiers: Modifiers,
        action: A,
        context: InputContext,
    ) {
        self.bindings.insert((trigger, modifiers, context), action);
    }

    //--- Context ----------------------------------------------------------

    pub(crate) fn set_context(&mut self, context: InputContext) {
        self.current_context = context;
    }

    pub(crate) fn current_context(&self) -> InputContext {
        self.current_context
    }

    //--- Resolution -------------------------------------------------------

    /// Maps a press event to an action in the active context.
    pub(crate) fn map_event(&self, event: &InputEvent) -> Option<A> {
        let (trigger, modifiers) = match *event {
            InputEvent::KeyDown { key, modifiers } => (Trigger::Key(key), modifiers),
            InputEvent::MouseButtonDown { button, modifiers } => {
                (Trigger::Button(button), modifiers)
            }
            _ => return None,
        };

        self.bindings
            .get(&(trigger, modifiers, self.current_context))
            .copied()
    }

    /// Collects every action whose trigger is currently held.
    pub(crate) fn held_actions(&self, state: &StateTracker) -> HashSet<A> {
        self.bindings
            .iter()
            .filter(|((trigger, _, ctx), _)| {
                *ctx == self.current_context && trigger.is_held(state)
            })
            .map(|(_, action)| *action)
            .collect()
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
        Left,
        Restart,
        Launch,
    }

    impl Action for TestAction {}

    const MENU: InputContext = InputContext::custom(0);

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn bind_key(mapper: &mut ActionMapper<TestAction>, key: KeyCode, action: TestAction) {
        mapper.bind(Trigger::Key(key), Modifiers::NONE, action, InputContext::Primary);
    }

    #[test]
    fn press_maps_to_bound_action() {
        let mut mapper = ActionMapper::new();
        bind_key(&mut mapper, KeyCode::KeyR, TestAction::Restart);

        assert_eq!(mapper.map_event(&key_down(KeyCode::KeyR)), Some(TestAction::Restart));
        assert_eq!(mapper.map_event(&key_down(KeyCode::KeyW)), None);
    }

    #[test]
    fn release_events_never_map() {
        let mut mapper = ActionMapper::new();
        bind_key(&mut mapper, KeyCode::KeyR, TestAction::Restart);

        let up = InputEvent::KeyUp { key: KeyCode::KeyR, modifiers: Modifiers::NONE };
        assert_eq!(mapper.map_event(&up), None);
    }

    #[test]
    fn pressed_modifiers_must_match_exactly() {
        let mut mapper = ActionMapper::new();
        bind_key(&mut mapper, KeyCode::KeyR, TestAction::Restart);

        let ctrl_r = InputEvent::KeyDown { key: KeyCode::KeyR, modifiers: Modifiers::CTRL };
        assert_eq!(mapper.map_event(&ctrl_r), None);
    }

    #[test]
    fn mouse_button_binding() {
        let mut mapper = ActionMapper::new();
        mapper.bind(
            Trigger::Button(MouseButton::Left),
            Modifiers::NONE,
            TestAction::Restart,
            InputContext::Primary,
        );

        let click = InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        };
        assert_eq!(mapper.map_event(&click), Some(TestAction::Restart));
    }

    #[test]
    fn context_scopes_bindings() {
        let mut mapper = ActionMapper::new();
        bind_key(&mut mapper, KeyCode::Enter, TestAction::Restart);
        mapper.bind(Trigger::Key(KeyCode::Enter), Modifiers::NONE, TestAction::Launch, MENU);

        assert_eq!(mapper.map_event(&key_down(KeyCode::Enter)), Some(TestAction::Restart));

        mapper.set_context(MENU);
        assert_eq!(mapper.current_context(), MENU);
        assert_eq!(mapper.map_event(&key_down(KeyCode::Enter)), Some(TestAction::Launch));
    }

    #[test]
    fn held_actions_ignore_modifiers_and_other_contexts() {
        let mut mapper = ActionMapper::new();
        bind_key(&mut mapper, KeyCode::KeyW, TestAction::Up);
        bind_key(&mut mapper, KeyCode::ArrowUp, TestAction::Up);
        bind_key(&mut mapper, KeyCode::KeyA, TestAction::Left);
        mapper.bind(Trigger::Key(KeyCode::KeyW), Modifiers::NONE, TestAction::Launch, MENU);

        let mut state = StateTracker::new();
        state.process_events(&[
            InputEvent::KeyDown { key: KeyCode::KeyW, modifiers: Modifiers::SHIFT },
            key_down(KeyCode::ArrowUp),
        ]);

        let held = mapper.held_actions(&state);
        assert_eq!(held.len(), 1);
        assert!(held.contains(&TestAction::Up));
    }
}
