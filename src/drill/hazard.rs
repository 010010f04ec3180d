//=========================================================================
// Hazards
//=========================================================================
//
// The scripted environment of each drill.
//
// Hazards own the decorative entities (debris, heat shimmer, water
// sources). Entities are created once per process and moved in place
// every tick; the only ones that ever leave are collected water sources,
// and they come back on restart.
//
// The flood is the only hazard that can end a round on its own
// (drowning); the drought is the only one that feeds the resource.
//
//=========================================================================

//=== External Dependencies ===============================================

use fastrand::Rng;

//=== Internal Dependencies ===============================================

use super::config::DrillKind;
use super::geometry::{Vec2, Vec3};

//=== Tuning ==============================================================

/// Earthquake scene shake and falling debris.
pub mod quake {
    pub const SHAKE_X: (f32, f32) = (0.05, 15.0);
    pub const SHAKE_Y: (f32, f32) = (0.05, 20.0);
    pub const ROLL_DEGREES: (f32, f32) = (2.0, 10.0);

    pub const SPAWN_X: (f32, f32) = (-50.0, 50.0);
    pub const SPAWN_Y: (f32, f32) = (5.0, 15.0);
    pub const SPAWN_Z: (f32, f32) = (-10.0, 10.0);
    pub const FALL_SPEED: (f32, f32) = (3.0, 9.0);
    pub const SIZE: (f32, f32) = (0.05, 0.2);
    /// Sideways drift, units per second in either direction.
    pub const JITTER: f32 = 1.2;
    /// Debris comes to rest here.
    pub const FLOOR_Y: f32 = 0.1;
}

/// Flood water and floating debris.
pub mod flood {
    pub const BASE_RISE: f32 = 0.01;
    pub const RISE_GAIN: f32 = 0.1;

    pub const SPAWN_X: (f32, f32) = (-50.0, 50.0);
    pub const SPAWN_Y: (f32, f32) = (0.1, 1.0);
    pub const SPAWN_Z: (f32, f32) = (-10.0, 10.0);
    pub const SIZE: (f32, f32) = (0.05, 0.2);
    /// Debris bobs up to this far above the surface.
    pub const BOB: f32 = 0.1;
}

/// Heatwave shimmer particles.
pub mod heat {
    pub const SPAWN_X: (f32, f32) = (-50.0, 50.0);
    pub const SPAWN_Y: (f32, f32) = (1.0, 3.0);
    pub const SPAWN_Z: (f32, f32) = (-10.0, 10.0);
    pub const RISE_SPEED: (f32, f32) = (0.6, 3.0);
    pub const SIZE: f32 = 0.1;
    pub const RECYCLE_ABOVE: f32 = 5.0;
    pub const RECYCLE_TO: f32 = 1.0;
}

/// Drought water sources.
pub mod drought {
    pub const SPAWN_X: (f32, f32) = (-40.0, 40.0);
    pub const SPAWN_Y: f32 = 0.25;
    pub const SPAWN_Z: (f32, f32) = (-40.0, 40.0);
    pub const REACH: f32 = 1.0;
    pub const HYDRATION: f32 = 10.0;
}

//=== Entities ============================================================

/// A moving decorative entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Units per second along the particle's direction of travel.
    pub speed: f32,
    pub size: f32,
}

/// A drinkable water source (drought).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterSource {
    pub position: Vec3,
    pub visible: bool,
}

/// Earthquake displacement applied to the whole scene when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shake {
    pub x: f32,
    pub y: f32,
    pub roll_degrees: f32,
}

impl Shake {
    /// Shake at `t` seconds into the round.
    pub fn at(t: f32) -> Self {
        let wave = |(amplitude, frequency): (f32, f32)| amplitude * (t * frequency).sin();
        Self {
            x: wave(quake::SHAKE_X),
            y: wave(quake::SHAKE_Y),
            roll_degrees: wave(quake::ROLL_DEGREES),
        }
    }
}

//=== HazardFrame =========================================================

/// Round state a hazard may react to during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardFrame {
    pub dt: f32,
    /// Round time after this tick.
    pub elapsed: f32,
    /// Resource before this tick's drain.
    pub resource: f32,
    pub resource_start: f32,
}

//=== Hazard ==============================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Hazard {
    Earthquake { shake: Shake, debris: Vec<Particle> },
    Flood { water_height: f32, debris: Vec<Particle> },
    Heatwave { particles: Vec<Particle> },
    Drought { sources: Vec<WaterSource> },
}

impl Hazard {
    //--- Construction -----------------------------------------------------

    /// Places `count` entities uniformly at random.
    pub fn new(kind: DrillKind, count: usize, rng: &mut Rng) -> Self {
        match kind {
            DrillKind::Earthquake => Hazard::Earthquake {
                shake: Shake::default(),
                debris: (0..count)
                    .map(|_| Particle {
                        position: spawn(rng, quake::SPAWN_X, quake::SPAWN_Y, quake::SPAWN_Z),
                        speed: uniform(rng, quake::FALL_SPEED),
                        size: uniform(rng, quake::SIZE),
                    })
                    .collect(),
            },
            DrillKind::Flood => Hazard::Flood {
                water_height: 0.0,
                debris: (0..count)
                    .map(|_| Particle {
                        position: spawn(rng, flood::SPAWN_X, flood::SPAWN_Y, flood::SPAWN_Z),
                        speed: 0.0,
                        size: uniform(rng, flood::SIZE),
                    })
                    .collect(),
            },
            DrillKind::Heatwave => Hazard::Heatwave {
                particles: (0..count)
                    .map(|_| Particle {
                        position: spawn(rng, heat::SPAWN_X, heat::SPAWN_Y, heat::SPAWN_Z),
                        speed: uniform(rng, heat::RISE_SPEED),
                        size: heat::SIZE,
                    })
                    .collect(),
            },
            DrillKind::Drought => Hazard::Drought {
                sources: (0..count)
                    .map(|_| WaterSource {
                        position: Vec3::new(
                            uniform(rng, drought::SPAWN_X),
                            drought::SPAWN_Y,
                            uniform(rng, drought::SPAWN_Z),
                        ),
                        visible: true,
                    })
                    .collect(),
            },
        }
    }

    //--- Per-tick ---------------------------------------------------------

    /// Moves the hazard forward by one tick.
    pub fn advance(&mut self, frame: HazardFrame, rng: &mut Rng) {
        match self {
            Hazard::Earthquake { shake, debris } => {
                *shake = Shake::at(frame.elapsed);
                for d in debris.iter_mut() {
                    d.position.y = (d.position.y - d.speed * frame.dt).max(quake::FLOOR_Y);
                    d.position.x += uniform(rng, (-quake::JITTER, quake::JITTER)) * frame.dt;
                    d.position.z += uniform(rng, (-quake::JITTER, quake::JITTER)) * frame.dt;
                }
            }
            Hazard::Flood { water_height, debris } => {
                // Rises faster the longer the round has been running.
                let used = (frame.resource_start - frame.resource) / frame.resource_start;
                let rise_rate = flood::BASE_RISE + used * flood::RISE_GAIN;
                *water_height += rise_rate * frame.dt;

                let level = *water_height;
                for d in debris.iter_mut().filter(|d| d.position.y < level) {
                    d.position.y = level + uniform(rng, (0.0, flood::BOB));
                }
            }
            Hazard::Heatwave { particles } => {
                for p in particles.iter_mut() {
                    p.position.y += p.speed * frame.dt;
                    if p.position.y > heat::RECYCLE_ABOVE {
                        p.position.y = heat::RECYCLE_TO;
                    }
                }
            }
            Hazard::Drought { .. } => {}
        }
    }

    /// Collects every visible water source within reach of `body`.
    ///
    /// Returns how many were collected (always 0 outside the drought).
    pub fn collect_water(&mut self, body: Vec2) -> usize {
        let Hazard::Drought { sources } = self else {
            return 0;
        };

        let mut collected = 0;
        for source in sources
            .iter_mut()
            .filter(|s| s.visible && s.position.xy().is_near(body, drought::REACH))
        {
            source.visible = false;
            collected += 1;
        }
        collected
    }

    /// Flood only: the body is below the water line.
    pub fn has_drowned(&self, body: Vec2) -> bool {
        match self {
            Hazard::Flood { water_height, .. } => body.y < *water_height,
            _ => false,
        }
    }

    /// Restores the start-of-round state.
    ///
    /// Water drains, sources reappear and the ground stops shaking. Debris
    /// and shimmer stay where they are.
    pub fn reset(&mut self) {
        match self {
            Hazard::Earthquake { shake, .. } => *shake = Shake::default(),
            Hazard::Flood { water_height, .. } => *water_height = 0.0,
            Hazard::Heatwave { .. } => {}
            Hazard::Drought { sources } => sources.iter_mut().for_each(|s| s.visible = true),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Debris or shimmer particles (empty for the drought).
    pub fn particles(&self) -> &[Particle] {
        match self {
            Hazard::Earthquake { debris, .. } | Hazard::Flood { debris, .. } => debris,
            Hazard::Heatwave { particles } => particles,
            Hazard::Drought { .. } => &[],
        }
    }

    pub fn water_sources(&self) -> &[WaterSource] {
        match self {
            Hazard::Drought { sources } => sources,
            _ => &[],
        }
    }

    pub fn water_height(&self) -> Option<f32> {
        match self {
            Hazard::Flood { water_height, .. } => Some(*water_height),
            _ => None,
        }
    }

    pub fn shake(&self) -> Option<Shake> {
        match self {
            Hazard::Earthquake { shake, .. } => Some(*shake),
            _ => None,
        }
    }
}

//=== Sampling ============================================================

fn uniform(rng: &mut Rng, (low, high): (f32, f32)) -> f32 {
    low + rng.f32() * (high - low)
}

fn spawn(rng: &mut Rng, x: (f32, f32), y: (f32, f32), z: (f32, f32)) -> Vec3 {
    Vec3::new(uniform(rng, x), uniform(rng, y), uniform(rng, z))
}

//=========================================================================
// Unit Tests
//=========================================================================
