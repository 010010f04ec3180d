//=========================================================================
// Drill Round
//=========================================================================
//
// One attempt at a drill, from spawn to success or failure.
//
// ```text
//   Running ──avatar reaches goal──────────────► Ended(Success)
//      │    ──resource hits zero───────────────► Ended(Failure(Depleted))
//      │    ──flood: avatar below water────────► Ended(Failure(Drowned))
//      ▲                                              │
//      └────────────────── restart() ◄────────────────┘
// ```
//
// Per tick, while running:
// 1. Avatar steps and is clamped to the ground
// 2. Hazard advances
// 3. Resource drains (drought: water pickups refill it)
// 4. End conditions are checked: drowning, then goal, then depletion
// 5. HUD is refreshed
//
//=========================================================================

//=== External Dependencies ===============================================

use fastrand::Rng;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::avatar::{Avatar, MoveInput};
use super::config::DrillConfig;
use super::hazard::{drought, Hazard, HazardFrame};
use super::hud::{Hud, HYDRATED_MESSAGE};

/// Message shown when the flood catches the avatar.
pub const DROWNED_MESSAGE: &str = "Drowned! Drill Failed!";

/// Base points for a successful round.
pub const SUCCESS_POINTS: u64 = 100;

//=== State ===============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    /// Time, heat resistance or thirst ran out.
    Depleted,
    Drowned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Success,
    Failure(FailureCause),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Running,
    Ended(RoundOutcome),
}

//=== DrillRound ==========================================================

pub struct DrillRound {
    config: DrillConfig,
    state: RoundState,
    avatar: Avatar,
    resource: f32,
    elapsed: f32,
    hazard: Hazard,
    hud: Hud,
    rng: Rng,
}

impl DrillRound {
    pub fn new(config: DrillConfig, seed: u64) -> Self {
        let mut rng = Rng::with_seed(seed);
        let hazard = Hazard::new(config.kind, config.entity_count, &mut rng);
        let mut hud = Hud::new(config.instruction.clone());
        hud.show_resource(&config.resource_label, config.resource_start, config.low_threshold);

        Self {
            state: RoundState::Running,
            avatar: Avatar::new(),
            resource: config.resource_start,
            elapsed: 0.0,
            hazard,
            hud,
            rng,
            config,
        }
    }

    //--- Per-tick ---------------------------------------------------------

    /// Advances the round by `dt` seconds.
    ///
    /// Returns the outcome on the tick the round ends. Does nothing once
    /// ended.
    pub fn tick(&mut self, input: MoveInput, dt: f32) -> Option<RoundOutcome> {
        if self.state != RoundState::Running {
            return None;
        }

        //--- 1. Movement ----------------------------------------------------
        self.avatar.step(input, self.config.speed, dt);

        //--- 2. Hazard ------------------------------------------------------
        self.elapsed += dt;
        let frame = HazardFrame {
            dt,
            elapsed: self.elapsed,
            resource: self.resource,
            resource_start: self.config.resource_start,
        };
        self.hazard.advance(frame, &mut self.rng);

        //--- 3. Resource ----------------------------------------------------
        self.resource = (self.resource - self.config.drain_per_second * dt).max(0.0);

        let collected = self.hazard.collect_water(self.avatar.body());
        for _ in 0..collected {
            self.resource = (self.resource + drought::HYDRATION).min(self.config.resource_start);
            self.hud.show_status(HYDRATED_MESSAGE);
        }
        if collected > 0 {
            debug!("Collected {} water source(s), resource {:.1}", collected, self.resource);
        }
        self.hud.tick_status(if collected > 0 { 0.0 } else { dt });

        //--- 4. End conditions ----------------------------------------------
        let body = self.avatar.body();
        let outcome = if self.hazard.has_drowned(body) {
            Some(RoundOutcome::Failure(FailureCause::Drowned))
        } else if body.is_near(self.config.goal, self.config.goal_tolerance) {
            Some(RoundOutcome::Success)
        } else if self.resource <= 0.0 {
            Some(RoundOutcome::Failure(FailureCause::Depleted))
        } else {
            None
        };

        //--- 5. HUD ---------------------------------------------------------
        self.hud.show_resource(
            &self.config.resource_label,
            self.resource,
            self.config.low_threshold,
        );

        if let Some(outcome) = outcome {
            self.end(outcome);
        }
        outcome
    }

    fn end(&mut self, outcome: RoundOutcome) {
        let message = match outcome {
            RoundOutcome::Success => self.config.success_message.as_str(),
            RoundOutcome::Failure(FailureCause::Depleted) => self.config.failure_message.as_str(),
            RoundOutcome::Failure(FailureCause::Drowned) => DROWNED_MESSAGE,
        };

        info!(
            "{} drill ended after {:.1}s: {:?} (resource {:.1})",
            self.config.kind, self.elapsed, outcome, self.resource
        );

        self.hud.show_end(message);
        self.avatar.hide();
        self.state = RoundState::Ended(outcome);
    }

    /// Back to the start of the round.
    ///
    /// Debris and heat particles keep their current positions.
    pub fn restart(&mut self) {
        info!("Restarting {} drill", self.config.kind);

        self.avatar.reset();
        self.resource = self.config.resource_start;
        self.elapsed = 0.0;
        self.hazard.reset();
        self.hud.reset(&self.config.instruction);
        self.hud.show_resource(
            &self.config.resource_label,
            self.resource,
            self.config.low_threshold,
        );
        self.state = RoundState::Running;
    }

    //--- Queries ----------------------------------------------------------

    pub fn config(&self) -> &DrillConfig {
        &self.config
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RoundState::Running
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn resource(&self) -> f32 {
        self.resource
    }

    /// Seconds since the round (re)started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn hazard(&self) -> &Hazard {
        &self.hazard
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Points for finishing with the current resource left.
    pub fn round_score(&self) -> u64 {
        SUCCESS_POINTS + (2.0 * self.resource.max(0.0)).floor() as u64
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
