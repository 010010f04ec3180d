//=========================================================================
// Drills
//=========================================================================
//
// The four disaster drills as one parameterized round:
//
//   DrillConfig ─► DrillRound ─┬─ Avatar   (movement, ground clamp)
//                              ├─ Hazard   (debris, water, heat, sources)
//                              └─ Hud      (resource readout, messages)
//
//   DrillScene ticks the round from the engine and records successes.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod avatar;
pub mod config;
pub mod geometry;
pub mod hazard;
pub mod hud;
pub mod round;
mod scene;

//=== Public API ==========================================================

pub use avatar::{Avatar, MoveInput};
pub use config::{DrillConfig, DrillKind, CONFIG_ENV};
pub use geometry::{Vec2, Vec3};
pub use hazard::{Hazard, Particle, Shake, WaterSource};
pub use hud::{Hud, ResourceTone};
pub use round::{DrillRound, FailureCause, RoundOutcome, RoundState};
pub use scene::DrillScene;
