//=========================================================================
// Disaster Drills: Library Root
//
// Four short disaster-preparedness drills (earthquake, flood, heatwave,
// drought) and a launcher menu, on a small two-thread runtime.
//
// Responsibilities:
// - Expose the runtime facade (`Engine`, `EngineBuilder`)
// - Expose the drill model (`drill`), score persistence (`score`) and
//   the launcher (`launcher`)
// - Keep the windowing layer (`platform`) private
//
// Typical usage (one binary per drill):
// ```no_run
// use disaster_drills::{app, DrillKind};
//
// fn main() -> std::process::ExitCode {
//     app::init_logging();
//     app::exit_code(app::run_drill(DrillKind::Flood))
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the logic-thread systems (input, scenes, timing). It is
// public so scenes can be written outside the crate.
//
pub mod core;
pub mod app;
pub mod drill;
pub mod error;
pub mod launcher;
pub mod prelude;
pub mod score;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit window and event loop and is not part of the
// public API.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use drill::{DrillConfig, DrillKind};
pub use engine::{Engine, EngineBuilder};
pub use error::{DrillError, DrillResult};
