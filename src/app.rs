//=========================================================================
// Application Wiring
//=========================================================================
//
// Scene keys, actions and key bindings shared by the drill binaries and
// the launcher, plus the `run_*` entry points each binary calls.
//
//   drill binary:  run_drill(kind)  → DrillScene    (Primary context)
//   launcher:      run_launcher()   → LauncherScene (MENU_CONTEXT)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::process::ExitCode;

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::input::{Action, InputContext, InputSystem, KeyCode, MouseButton};
use crate::core::scene::SceneKey;
use crate::drill::{DrillConfig, DrillKind, DrillRound, DrillScene};
use crate::engine::EngineBuilder;
use crate::error::DrillResult;
use crate::launcher::{LauncherScene, ProcessSpawner, LAUNCHER_TITLE, MENU_CONTEXT};
use crate::score::ScoreBook;

//=== Scenes & Actions ====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameScene {
    Launcher,
    Drill,
}

impl SceneKey for GameScene {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    //--- Drill (held) -----------------------------------------------------
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    //--- Drill (pressed) --------------------------------------------------
    Restart,

    //--- Launcher ---------------------------------------------------------
    MenuUp,
    MenuDown,
    Launch,
    Select(DrillKind),

    //--- Both -------------------------------------------------------------
    Quit,
}

impl Action for GameAction {}

//=== Bindings ============================================================

/// WASD or arrows to move, R or left click to restart, Escape to quit.
pub fn bind_drill_controls(input: &mut InputSystem<GameAction>) {
    let ctx = InputContext::Primary;

    for (keys, action) in [
        ([KeyCode::KeyW, KeyCode::ArrowUp], GameAction::MoveUp),
        ([KeyCode::KeyS, KeyCode::ArrowDown], GameAction::MoveDown),
        ([KeyCode::KeyA, KeyCode::ArrowLeft], GameAction::MoveLeft),
        ([KeyCode::KeyD, KeyCode::ArrowRight], GameAction::MoveRight),
    ] {
        for key in keys {
            input.bind_key(key, action, ctx);
        }
    }

    input.bind_key(KeyCode::KeyR, GameAction::Restart, ctx);
    input.bind_mouse(MouseButton::Left, GameAction::Restart, ctx);
    input.bind_key(KeyCode::Escape, GameAction::Quit, ctx);
}

/// Digits 1-4 pick and launch a drill; W/S or arrows move the cursor;
/// Enter or Space launches the highlighted drill.
pub fn bind_launcher_controls(input: &mut InputSystem<GameAction>) {
    let ctx = MENU_CONTEXT;

    for (key, kind) in KeyCode::MENU_DIGITS.into_iter().zip(DrillKind::MENU_ORDER) {
        input.bind_key(key, GameAction::Select(kind), ctx);
    }

    input.bind_key(KeyCode::KeyW, GameAction::MenuUp, ctx);
    input.bind_key(KeyCode::ArrowUp, GameAction::MenuUp, ctx);
    input.bind_key(KeyCode::KeyS, GameAction::MenuDown, ctx);
    input.bind_key(KeyCode::ArrowDown, GameAction::MenuDown, ctx);
    input.bind_key(KeyCode::Enter, GameAction::Launch, ctx);
    input.bind_key(KeyCode::Space, GameAction::Launch, ctx);
    input.bind_key(KeyCode::Escape, GameAction::Quit, ctx);
}

//=== Entry Points ========================================================

/// Runs one drill until its window closes.
///
/// Tuning comes from the preset plus `$DRILL_CONFIG`; scores go to
/// `$DRILL_SCORE_FILE`.
pub fn run_drill(kind: DrillKind) -> DrillResult<()> {
    let config = DrillConfig::from_env(kind)?;
    let scores = ScoreBook::from_env();
    let seed = fastrand::u64(..);
    info!(
        "Starting {} drill (seed {}, scores in {})",
        kind,
        seed,
        scores.path().display()
    );

    let title = config.title.clone();
    let scene = DrillScene::new(DrillRound::new(config, seed), scores);

    EngineBuilder::<GameScene, GameAction>::new()
        .with_title(title)
        .build()
        .init(move |systems| {
            bind_drill_controls(&mut systems.input);
            systems.scene_manager.register_default_scene(GameScene::Drill, scene);
        })
        .run()
}

/// Runs the drill menu. Drills start as separate processes next to this
/// executable.
pub fn run_launcher() -> DrillResult<()> {
    let spawner = ProcessSpawner::beside_current_exe()?;
    let scores = ScoreBook::from_env();
    info!("Starting launcher (drills in {})", spawner.dir().display());

    let scene = LauncherScene::new(spawner, scores);

    EngineBuilder::<GameScene, GameAction>::new()
        .with_title(LAUNCHER_TITLE)
        .build()
        .init(move |systems| {
            bind_launcher_controls(&mut systems.input);
            systems.scene_manager.register_default_scene(GameScene::Launcher, scene);
        })
        .run()
}

//=== Process Helpers =====================================================

/// Installs `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Logs a failed run and maps it to a non-zero exit status.
pub fn exit_code(result: DrillResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, Modifiers, StateTracker};

    fn press(input: &mut InputSystem<GameAction>, key: KeyCode) -> Vec<GameAction> {
        let mut state = StateTracker::new();
        let batch = vec![InputEvent::KeyDown { key, modifiers: Modifiers::NONE }];
        input.process_frame(&mut state, &[batch]);
        input.actions().to_vec()
    }

    fn drill_input() -> InputSystem<GameAction> {
        let mut input = InputSystem::new();
        bind_drill_controls(&mut input);
        input.set_context(InputContext::Primary);
        input
    }

    fn launcher_input() -> InputSystem<GameAction> {
        let mut input = InputSystem::new();
        bind_launcher_controls(&mut input);
        input.set_context(MENU_CONTEXT);
        input
    }

    #[test]
    fn movement_keys_and_arrows_are_held_actions() {
        let mut input = drill_input();
        let mut state = StateTracker::new();
        let batch = vec![
            InputEvent::KeyDown { key: KeyCode::KeyD, modifiers: Modifiers::NONE },
            InputEvent::KeyDown { key: KeyCode::ArrowUp, modifiers: Modifiers::NONE },
        ];

        input.process_frame(&mut state, &[batch]);

        assert!(input.held().contains(&GameAction::MoveRight));
        assert!(input.held().contains(&GameAction::MoveUp));
        assert!(!input.held().contains(&GameAction::MoveLeft));
    }

    #[test]
    fn restart_on_r_and_left_click() {
        let mut input = drill_input();
        assert_eq!(press(&mut input, KeyCode::KeyR), vec![GameAction::Restart]);

        let mut state = StateTracker::new();
        let click = vec![InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        }];
        input.process_frame(&mut state, &[click]);
        assert_eq!(input.actions(), &[GameAction::Restart]);
    }

    #[test]
    fn digits_follow_menu_order() {
        let mut input = launcher_input();
        assert_eq!(
            press(&mut input, KeyCode::Digit1),
            vec![GameAction::Select(DrillKind::Flood)]
        );
        assert_eq!(
            press(&mut input, KeyCode::Digit2),
            vec![GameAction::Select(DrillKind::Earthquake)]
        );
        assert_eq!(
            press(&mut input, KeyCode::Digit4),
            vec![GameAction::Select(DrillKind::Drought)]
        );
    }

    #[test]
    fn contexts_keep_bindings_apart() {
        let mut input = InputSystem::new();
        bind_drill_controls(&mut input);
        bind_launcher_controls(&mut input);

        input.set_context(MENU_CONTEXT);
        assert_eq!(press(&mut input, KeyCode::KeyW), vec![GameAction::MenuUp]);
        assert!(press(&mut input, KeyCode::KeyR).is_empty());

        input.set_context(InputContext::Primary);
        assert!(press(&mut input, KeyCode::Digit1).is_empty());
        assert_eq!(press(&mut input, KeyCode::Escape), vec![GameAction::Quit]);
    }
}
