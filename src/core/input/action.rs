//=========================================================================
// Action Trait & Input Context
//=========================================================================
//
// Actions are game-defined identifiers the engine routes without
// interpreting (move, restart, launch...). Contexts let the same key mean
// different things in different scenes (gameplay vs launcher menu).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// # Example
///
/// ```
/// use disaster_drills::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Walk { Up, Down }
///
/// impl Action for Walk {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== InputContext ========================================================

/// Identifies which set of bindings is active.
///
/// Scenes select their context on enter; bindings registered under any
/// other context are ignored until it becomes active again. Raw key
/// queries on the [`StateTracker`](super::StateTracker) work regardless
/// of context.
///
/// ```
/// # use disaster_drills::prelude::*;
/// const GAMEPLAY: InputContext = InputContext::Primary;
/// const MENU: InputContext = InputContext::custom(0);
/// assert_ne!(GAMEPLAY, MENU);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputContext {
    /// Default context (drill gameplay).
    #[default]
    Primary,

    /// User-defined context.
    Custom(u32),
}

impl InputContext {
    /// Creates a custom context.
    #[inline]
    pub const fn custom(id: u32) -> Self {
        Self::Custom(id)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
