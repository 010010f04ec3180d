//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages exchanged between the platform (main) thread and the core
// (logic) thread, plus the platform's error type.
//
//   platform ── PlatformEvent ──► core
//   platform ◄── CoreEvent ────── core
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlatformEvent {
    /// Input captured since the previous redraw, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window close requested.
    WindowClosed,
}

//=== CoreEvent ===========================================================

/// Requests sent from core to platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CoreEvent {
    /// Replace the window title (the HUD line).
    Title(String),

    /// Close the window and leave the event loop.
    Exit,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// Event loop execution error.
    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error + 'static>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn events_compare_by_value() {
        assert_eq!(CoreEvent::Title("a".into()), CoreEvent::Title("a".into()));
        assert_ne!(PlatformEvent::WindowClosed, PlatformEvent::Inputs(Vec::new()));
    }
}
