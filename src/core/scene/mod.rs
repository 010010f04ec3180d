//=========================================================================
// Scene System
//=========================================================================
//
// Scene lifecycle and stack-based scene switching.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene<S, A>>>
//     └─ stack: Vec<S>
//
// Flow:
//   update() → collect_active_scenes() → Scene::update()
//   process_transitions() → on_exit / on_enter
//
// A drill process registers a single drill scene; the launcher process
// registers the menu scene. Both go through the same manager.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::input::Action;

//=== Module Declarations =================================================

mod scene_manager;
mod transition_queue;

//=== Public API ==========================================================

pub use scene_manager::{SceneKey, SceneManager, SceneTransition};
pub use transition_queue::TransitionQueue;

//=== Scene Trait =========================================================

/// Scene behavior: lifecycle hooks plus a per-tick update.
///
/// Scenes keep their own state between activations. They read input and
/// the frame clock from the [`GlobalContext`] and write back transitions,
/// HUD text and exit requests.
///
/// ```rust
/// # use disaster_drills::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Main }
/// # impl SceneKey for Screen {}
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Walk { Up }
/// # impl Action for Walk {}
/// struct Idle;
///
/// impl Scene<Screen, Walk> for Idle {
///     fn update(&mut self, context: &mut GlobalContext<Screen, Walk>) {
///         context.set_title("idle");
///     }
/// }
/// ```
pub trait Scene<S: SceneKey, A: Action>: Send {
    /// Called when the scene enters the active stack.
    fn on_enter(&mut self, _context: &mut GlobalContext<S, A>) {}

    /// Called when the scene leaves the active stack.
    fn on_exit(&mut self, _context: &mut GlobalContext<S, A>) {}

    /// Called every tick while the scene is active.
    fn update(&mut self, context: &mut GlobalContext<S, A>);

    /// Whether scenes below this one keep updating.
    ///
    /// Opaque scenes (the default) block updates to the rest of the stack.
    fn is_transparent(&self) -> bool {
        false
    }
}
