//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains systems that process input, manage scenes, and coordinate
// game logic. Systems operate on GlobalContext data.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::{Action, InputEvent, InputSystem};
use crate::core::scene::{SceneKey, SceneManager};

//=== GlobalSystems =======================================================

/// Engine-level logic systems, configured through [`crate::Engine::init`].
///
/// - `input`: bindings and per-tick action resolution
/// - `scene_manager`: scene registry and stack
pub struct GlobalSystems<S: SceneKey, A: Action> {
    pub input: InputSystem<A>,
    pub scene_manager: SceneManager<S, A>,
}

impl<S: SceneKey, A: Action> GlobalSystems<S, A> {
    pub(crate) fn new() -> Self {
        Self {
            input: InputSystem::new(),
            scene_manager: SceneManager::new(),
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Enters the initial scenes. Called once on the logic thread.
    pub(crate) fn start(&mut self, context: &mut GlobalContext<S, A>) {
        self.scene_manager.start(context);
        self.scene_manager.process_transitions(context);
        self.apply_context_request(context);
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick.
    ///
    /// 1. Advance the frame clock by the measured step
    /// 2. Fold input batches into the tracker and resolve actions
    /// 3. Update active scenes
    /// 4. Apply queued transitions and input context requests
    pub(crate) fn update(
        &mut self,
        context: &mut GlobalContext<S, A>,
        batches: &[Vec<InputEvent>],
        measured_dt: f32,
    ) {
        context.clock_mut().advance(measured_dt);

        self.input.process_frame(context.input_state_mut(), batches);
        context.set_actions(self.input.actions(), self.input.held());

        self.scene_manager.update(context);
        self.scene_manager.process_transitions(context);

        self.apply_context_request(context);
    }

    fn apply_context_request(&mut self, context: &mut GlobalContext<S, A>) {
        if let Some(requested) = context.take_requested_context() {
            self.input.set_context(requested);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
