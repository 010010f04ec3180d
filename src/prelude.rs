//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use disaster_drills::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::error::{DrillError, DrillResult};

// Global systems and context
pub use crate::core::globals::{FrameClock, GlobalContext, GlobalSystems};

// Input system
pub use crate::core::input::{Action, InputContext, InputSystem, KeyCode, Modifiers, MouseButton};

// Scene system
pub use crate::core::scene::{Scene, SceneKey, SceneManager, SceneTransition};

// Drills
pub use crate::drill::{DrillConfig, DrillKind, DrillRound, MoveInput, RoundOutcome};
