//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - input_state: low-level input state (keys, mouse buttons, modifiers)
// - actions / held: this tick's resolved actions
// - clock: tick timing
// - transitions: command queue for scene changes
// - title / exit: requests forwarded to the platform thread
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::FrameClock;
use crate::core::input::{Action, InputContext, StateTracker};
use crate::core::scene::{SceneKey, SceneTransition, TransitionQueue};

//=== GlobalContext =======================================================

/// Data scenes see during their lifecycle hooks.
///
/// Engine systems fill in input and timing before scenes update; scenes
/// write back transitions and platform requests, which the engine drains
/// after the update.
pub struct GlobalContext<S: SceneKey, A: Action> {
    input_state: StateTracker,
    actions: Vec<A>,
    held: HashSet<A>,
    clock: FrameClock,
    transitions: TransitionQueue<S>,
    requested_context: Option<InputContext>,
    title: Option<String>,
    exit_requested: bool,
}

impl<S: SceneKey, A: Action> GlobalContext<S, A> {
    /// Creates a context with nothing held and the clock at zero.
    pub fn new() -> Self {
        Self {
            input_state: StateTracker::new(),
            actions: Vec::new(),
            held: HashSet::new(),
            clock: FrameClock::new(),
            transitions: TransitionQueue::new(),
            requested_context: None,
            title: None,
            exit_requested: false,
        }
    }

    //=====================================================================
    // Scene-facing API
    //=====================================================================

    //--- Input ------------------------------------------------------------

    /// Raw key/button state for this tick.
    pub fn input(&self) -> &StateTracker {
        &self.input_state
    }

    /// Actions pressed this tick, in arrival order.
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// Returns `true` if `action` was pressed this tick.
    pub fn was_pressed(&self, action: A) -> bool {
        self.actions.contains(&action)
    }

    /// Returns `true` while a binding of `action` is held.
    pub fn is_held(&self, action: A) -> bool {
        self.held.contains(&action)
    }

    /// Asks the input system to switch binding context.
    ///
    /// Applied before the next batch of input is resolved.
    pub fn set_input_context(&mut self, context: InputContext) {
        self.requested_context = Some(context);
    }

    //--- Timing -----------------------------------------------------------

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    //--- Scene flow -------------------------------------------------------

    /// Queues a scene transition for the end of this tick.
    pub fn push_transition(&mut self, transition: SceneTransition<S>) {
        self.transitions.push(transition);
    }

    //--- Platform requests ------------------------------------------------

    /// Sets the window title. Only the last title set in a tick is sent.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Asks the engine to close the window and shut down.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    //=====================================================================
    // Engine-facing API
    //=====================================================================

    pub(crate) fn input_state_mut(&mut self) -> &mut StateTracker {
        &mut self.input_state
    }

    pub(crate) fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    /// Replaces this tick's resolved actions.
    pub(crate) fn set_actions(&mut self, pressed: &[A], held: &HashSet<A>) {
        self.actions.clear();
        self.actions.extend_from_slice(pressed);
        self.held.clone_from(held);
    }

    pub(crate) fn take_transitions(&mut self) -> Vec<SceneTransition<S>> {
        self.transitions.take()
    }

    pub(crate) fn take_requested_context(&mut self) -> Option<InputContext> {
        self.requested_context.take()
    }

    pub(crate) fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }
}

impl<S: SceneKey, A: Action> Default for GlobalContext<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
