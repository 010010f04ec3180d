//=========================================================================
// Launcher
//=========================================================================
//
// Drill menu: lists the four drills with their cumulative scores and
// starts the chosen one as a separate process.
//
//   1  FLOOD SIMULATION      (digit keys launch directly,
//   2  EARTHQUAKE DRILL       W/S + Enter launch the highlighted row)
//   3  HEATWAVE SAFETY
//   4  DROUGHT AWARENESS
//
// Drills never talk back; the menu picks up new totals by re-reading the
// score file.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::app::{GameAction, GameScene};
use crate::core::globals::GlobalContext;
use crate::core::input::InputContext;
use crate::core::scene::Scene;
use crate::drill::DrillKind;
use crate::error::{DrillError, DrillResult};
use crate::score::{ScoreBook, ScoreTotals};

/// Binding context for the menu.
pub const MENU_CONTEXT: InputContext = InputContext::custom(0);

pub const LAUNCHER_TITLE: &str = "Prajakavach Quest - Disaster Preparedness & Safety Training";

/// Seconds between score file re-reads while the menu is open.
pub const REFRESH_SECONDS: f32 = 2.0;

type Context = GlobalContext<GameScene, GameAction>;

//=== Spawning ============================================================

/// Starts a drill without waiting for it.
pub trait DrillSpawner: Send {
    fn spawn(&mut self, kind: DrillKind) -> DrillResult<()>;

    /// Collects drills that have finished. Returns how many still run.
    fn reap_finished(&mut self) -> usize {
        0
    }
}

/// Runs drill binaries from one directory (`<dir>/flood`, `<dir>/drought`...).
///
/// Started drills are kept until they exit and are reaped on the next
/// spawn or score refresh.
#[derive(Debug)]
pub struct ProcessSpawner {
    dir: PathBuf,
    running: Vec<Child>,
}

impl ProcessSpawner {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), running: Vec::new() }
    }

    /// Drills installed next to the running executable.
    pub fn beside_current_exe() -> DrillResult<Self> {
        let exe = std::env::current_exe().map_err(|e| DrillError::io("current executable", e))?;
        let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn program(&self, kind: DrillKind) -> PathBuf {
        self.dir.join(format!("{}{}", kind.key(), EXE_SUFFIX))
    }
}

impl DrillSpawner for ProcessSpawner {
    fn spawn(&mut self, kind: DrillKind) -> DrillResult<()> {
        self.reap_finished();

        let program = self.program(kind);
        let child = Command::new(&program)
            .spawn()
            .map_err(|source| DrillError::Spawn { program: program.clone(), source })?;

        info!("Started {} (pid {})", program.display(), child.id());
        self.running.push(child);
        Ok(())
    }

    fn reap_finished(&mut self) -> usize {
        self.running.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                debug!("Drill pid {} exited ({})", child.id(), status);
                false
            }
            Ok(None) => true,
            Err(e) => {
                warn!("Lost track of drill pid {}: {}", child.id(), e);
                false
            }
        });
        self.running.len()
    }
}

//=== LauncherScene =======================================================

pub struct LauncherScene<P: DrillSpawner> {
    spawner: P,
    scores: ScoreBook,
    totals: ScoreTotals,
    cursor: usize,
    status: Option<String>,
    since_refresh: f32,
    last_title: Option<String>,
}

impl<P: DrillSpawner> LauncherScene<P> {
    pub fn new(spawner: P, scores: ScoreBook) -> Self {
        Self {
            spawner,
            scores,
            totals: ScoreTotals::new(),
            cursor: 0,
            status: None,
            since_refresh: 0.0,
            last_title: None,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Highlighted drill.
    pub fn selected(&self) -> DrillKind {
        DrillKind::MENU_ORDER[self.cursor]
    }

    pub fn total(&self, kind: DrillKind) -> u64 {
        self.totals.get(kind.key()).copied().unwrap_or(0)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn spawner(&self) -> &P {
        &self.spawner
    }

    /// Menu flattened into one line for the window title.
    pub fn title(&self) -> String {
        let mut parts = vec![LAUNCHER_TITLE.to_string()];

        for (i, kind) in DrillKind::MENU_ORDER.into_iter().enumerate() {
            let marker = if i == self.cursor { ">" } else { " " };
            parts.push(format!(
                "{}{} {} ({})",
                marker,
                i + 1,
                kind.menu_label(),
                self.total(kind)
            ));
        }

        if let Some(status) = &self.status {
            parts.push(status.clone());
        }
        parts.join(" | ")
    }

    //--- Actions ----------------------------------------------------------

    fn move_cursor(&mut self, up: bool) {
        let len = DrillKind::MENU_ORDER.len();
        self.cursor = if up { (self.cursor + len - 1) % len } else { (self.cursor + 1) % len };
    }

    fn select(&mut self, kind: DrillKind) {
        if let Some(i) = DrillKind::MENU_ORDER.iter().position(|&k| k == kind) {
            self.cursor = i;
        }
    }

    fn launch(&mut self, kind: DrillKind) {
        info!("Launching {} drill", kind);

        self.status = Some(match self.spawner.spawn(kind) {
            Ok(()) => format!("Started {}", kind.menu_label()),
            Err(e) => {
                error!("Could not launch {} drill: {}", kind, e);
                format!("Could not start {}: {}", kind.menu_label(), e)
            }
        });
        self.refresh_totals();
    }

    fn refresh_totals(&mut self) {
        self.since_refresh = 0.0;
        self.spawner.reap_finished();
        match self.scores.totals() {
            Ok(totals) => {
                if totals != self.totals {
                    debug!("Score totals now {:?}", totals);
                }
                self.totals = totals;
            }
            Err(e) => warn!("Keeping previous score totals: {}", e),
        }
    }

    fn publish_title(&mut self, context: &mut Context) {
        let title = self.title();
        if self.last_title.as_deref() != Some(title.as_str()) {
            context.set_title(title.clone());
            self.last_title = Some(title);
        }
    }
}

impl<P: DrillSpawner> Scene<GameScene, GameAction> for LauncherScene<P> {
    fn on_enter(&mut self, context: &mut Context) {
        context.set_input_context(MENU_CONTEXT);
        self.refresh_totals();
        self.last_title = None;
        self.publish_title(context);
    }

    fn update(&mut self, context: &mut Context) {
        let actions = context.actions().to_vec();
        for action in actions {
            match action {
                GameAction::Quit => {
                    info!("Quit requested");
                    context.request_exit();
                    return;
                }
                GameAction::MenuUp => self.move_cursor(true),
                GameAction::MenuDown => self.move_cursor(false),
                GameAction::Launch => self.launch(self.selected()),
                GameAction::Select(kind) => {
                    self.select(kind);
                    self.launch(kind);
                }
                _ => {}
            }
        }

        self.since_refresh += context.clock().dt();
        if self.since_refresh >= REFRESH_SECONDS {
            self.refresh_totals();
        }

        self.publish_title(context);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
