//=========================================================================
// Platform Bridge
//=========================================================================
//
// The contract between the winit platform layer and core systems.
//
// Components:
// - `interface`: message and error types crossing the thread boundary
// - `event_collector`: core-side draining of platform messages
//
//=========================================================================

//=== Module Declarations =================================================

mod event_collector;
mod interface;

//=== Public API ==========================================================

pub use interface::PlatformError;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{CoreEvent, PlatformEvent};
