//=========================================================================
// Global Engine State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   GlobalSystems: InputSystem + SceneManager (owned by orchestrator)
//   GlobalContext: StateTracker + actions + FrameClock + TransitionQueue
//                  (passed to scenes)
//
//=========================================================================

//=== Module Declarations =================================================

mod frame_clock;
mod global_context;
mod global_systems;

//=== Public API ==========================================================

pub use frame_clock::{FrameClock, MAX_FRAME_DT};
pub use global_context::GlobalContext;
pub use global_systems::GlobalSystems;
