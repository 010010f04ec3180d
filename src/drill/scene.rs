//=========================================================================
// Drill Scene
//=========================================================================
//
// Drives a `DrillRound` from the engine tick.
//
// Per tick:
// 1. Escape requests exit
// 2. R / click restarts an ended round
// 3. Held movement actions step the round by the frame clock's dt
// 4. A success is added to the score book
// 5. The HUD is published as the window title when it changed
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use super::avatar::MoveInput;
use super::round::{DrillRound, RoundOutcome};
use crate::app::{GameAction, GameScene};
use crate::core::globals::GlobalContext;
use crate::core::input::InputContext;
use crate::core::scene::Scene;
use crate::score::ScoreBook;

type Context = GlobalContext<GameScene, GameAction>;

pub struct DrillScene {
    round: DrillRound,
    scores: ScoreBook,
    last_title: Option<String>,
}

impl DrillScene {
    pub fn new(round: DrillRound, scores: ScoreBook) -> Self {
        Self { round, scores, last_title: None }
    }

    pub fn round(&self) -> &DrillRound {
        &self.round
    }

    fn movement(context: &Context) -> MoveInput {
        MoveInput {
            up: context.is_held(GameAction::MoveUp),
            down: context.is_held(GameAction::MoveDown),
            left: context.is_held(GameAction::MoveLeft),
            right: context.is_held(GameAction::MoveRight),
        }
    }

    fn record_success(&self) {
        let drill = self.round.config().kind.key();
        let points = self.round.round_score();

        if let Err(e) = self.scores.record(drill, points) {
            error!("Could not save {} points for {}: {}", points, drill, e);
        }
    }

    fn publish_title(&mut self, context: &mut Context) {
        let title = self.round.hud().title(&self.round.config().title);
        if self.last_title.as_deref() != Some(title.as_str()) {
            context.set_title(title.clone());
            self.last_title = Some(title);
        }
    }
}

impl Scene<GameScene, GameAction> for DrillScene {
    fn on_enter(&mut self, context: &mut Context) {
        info!("Entering {} drill", self.round.config().kind);
        context.set_input_context(InputContext::Primary);
        self.last_title = None;
        self.publish_title(context);
    }

    fn update(&mut self, context: &mut Context) {
        if context.was_pressed(GameAction::Quit) {
            info!("Quit requested");
            context.request_exit();
            return;
        }

        if !self.round.is_running() && context.was_pressed(GameAction::Restart) {
            self.round.restart();
        }

        let input = Self::movement(context);
        if let Some(RoundOutcome::Success) = self.round.tick(input, context.clock().dt()) {
            self.record_success();
        }

        self.publish_title(context);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::PathBuf;

    use super::*;
    use crate::core::globals::MAX_FRAME_DT;
    use crate::drill::config::{DrillConfig, DrillKind};
    use crate::drill::geometry::Vec2;
    use crate::drill::round::RoundState;

    struct Fixture {
        scene: DrillScene,
        context: Context,
        scores: PathBuf,
    }

    impl Fixture {
        fn new(name: &str, config: DrillConfig) -> Self {
            let scores = std::env::temp_dir()
                .join(format!("disaster_drills_scene_{}_{}.json", name, std::process::id()));
            let _ = std::fs::remove_file(&scores);

            let mut context = Context::new();
            context.clock_mut().advance(MAX_FRAME_DT);

            Self {
                scene: DrillScene::new(DrillRound::new(config, 9), ScoreBook::new(&scores)),
                context,
                scores,
            }
        }

        fn tick(&mut self, pressed: &[GameAction], held: &[GameAction]) {
            let held: HashSet<GameAction> = held.iter().copied().collect();
            self.context.set_actions(pressed, &held);
            self.scene.update(&mut self.context);
        }

        fn total(&self) -> u64 {
            ScoreBook::new(&self.scores).total("heatwave").unwrap()
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.scores);
        }
    }

    /// Heatwave round that ends in success on the first tick.
    fn instant_win() -> DrillConfig {
        let mut config = DrillConfig::preset(DrillKind::Heatwave);
        config.goal = Vec2::new(-8.0, 0.5);
        config
    }

    #[test]
    fn enter_selects_gameplay_context_and_title() {
        let mut f = Fixture::new("enter", DrillConfig::preset(DrillKind::Flood));

        f.scene.on_enter(&mut f.context);

        assert_eq!(f.context.take_requested_context(), Some(InputContext::Primary));
        let title = f.context.take_title().unwrap();
        assert!(title.starts_with("Virtual Disaster Drill - Flood Simulation | Time Left: 60"));
    }

    #[test]
    fn held_movement_moves_the_avatar() {
        let mut f = Fixture::new("move", DrillConfig::preset(DrillKind::Drought));

        f.tick(&[], &[GameAction::MoveRight]);

        let body = f.scene.round().avatar().body();
        assert!((body.x - (-8.0 + 5.0 * MAX_FRAME_DT)).abs() < 1e-5);
    }

    #[test]
    fn success_is_scored_once() {
        let mut f = Fixture::new("score", instant_win());

        f.tick(&[], &[]);
        let first = f.total();
        assert_eq!(first, f.scene.round().round_score());

        f.tick(&[], &[]);
        assert_eq!(f.total(), first);
    }

    #[test]
    fn restart_only_after_the_round_ends() {
        let mut f = Fixture::new("restart", instant_win());

        f.tick(&[], &[]);
        assert!(matches!(f.scene.round().state(), RoundState::Ended(_)));

        // Restart, then the same tick wins again and scores again.
        f.tick(&[GameAction::Restart], &[]);
        assert_eq!(f.total(), 2 * f.scene.round().round_score());
    }

    #[test]
    fn restart_is_ignored_while_running() {
        let mut f = Fixture::new("running", DrillConfig::preset(DrillKind::Heatwave));

        f.tick(&[], &[GameAction::MoveRight]);
        let x = f.scene.round().avatar().body().x;
        f.tick(&[GameAction::Restart], &[]);

        assert_eq!(f.scene.round().avatar().body().x, x);
    }

    #[test]
    fn quit_requests_exit() {
        let mut f = Fixture::new("quit", DrillConfig::preset(DrillKind::Earthquake));
        f.tick(&[GameAction::Quit], &[]);
        assert!(f.context.exit_requested());
    }

    #[test]
    fn title_only_republished_on_change() {
        let mut f = Fixture::new("title", DrillConfig::preset(DrillKind::Flood));
        f.scene.on_enter(&mut f.context);
        assert!(f.context.take_title().is_some());

        // 60 -> 59.9 changes the readout, 59.9 -> 59.8 does not.
        f.tick(&[], &[]);
        assert!(f.context.take_title().unwrap().contains("Time Left: 59"));
        f.tick(&[], &[]);
        assert!(f.context.take_title().is_none());
    }
}
