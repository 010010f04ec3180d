//=========================================================================
// Engine
//
// Main entry point and coordinator for the runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ init(): bindings, scenes
//         ├─ with_channel_capacity() └─ run(): spawns logic thread,
//         └─ with_title()                     runs platform,
//                                             joins on exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::marker::PhantomData;

use crossbeam_channel::bounded;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::{Action, CoreSystemsOrchestrator, GlobalSystems, SceneKey};
use crate::error::DrillError;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Title**: "Disaster Drill"
///
/// # Examples
///
/// ```no_run
/// # use disaster_drills::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Main }
/// # impl SceneKey for Screen {}
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Walk { Up }
/// # impl Action for Walk {}
/// EngineBuilder::<Screen, Walk>::new()
///     .with_tps(120.0)
///     .with_title("Virtual Disaster Drill")
///     .build()
///     .init(|systems| {
///         systems.input.bind_key(KeyCode::KeyW, Walk::Up, InputContext::Primary);
///     })
///     .run()?;
/// # Ok::<(), DrillError>(())
/// ```
pub struct EngineBuilder<S: SceneKey, A: Action> {
    tps: f64,
    channel_capacity: usize,
    title: String,
    _phantom: PhantomData<(S, A)>,
}

impl<S: SceneKey, A: Action> EngineBuilder<S, A> {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            title: "Disaster Drill".to_string(),
            _phantom: PhantomData,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of the platform → core channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the window title shown before the first HUD update.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds the engine. Systems are created empty; configure them with
    /// [`Engine::init`].
    pub fn build(self) -> Engine<S, A> {
        info!(
            "Building engine (TPS: {}, channel: {}, title: {:?})",
            self.tps, self.channel_capacity, self.title
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            title: self.title,
        }
    }
}

impl<S: SceneKey, A: Action> Default for EngineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Runtime: a logic thread ticking scenes plus the platform event loop.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem, SceneManager
///   │
///   └─► Platform (Event Loop)
///         └─► Window, input capture, title
///
/// Communication: PlatformEvent ► core, CoreEvent ► platform
/// ```
pub struct Engine<S: SceneKey, A: Action> {
    orchestrator: CoreSystemsOrchestrator<S, A>,
    tps: f64,
    channel_capacity: usize,
    title: String,
}

impl<S: SceneKey, A: Action> Engine<S, A> {
    //--- Initialization ---------------------------------------------------

    /// Configures bindings and scenes before the engine starts.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        info!("Initializing engine systems");
        self.orchestrator.init_systems(init_fn);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Runs until the window closes or a scene requests exit.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core and core → platform channels
    /// 2. Spawns the logic thread
    /// 3. Runs the platform event loop (blocks here)
    /// 4. Joins the logic thread
    ///
    /// # Errors
    ///
    /// - [`DrillError::CoreThreadSpawn`] if the logic thread cannot start
    /// - [`DrillError::Platform`] if the event loop fails
    /// - [`DrillError::CoreThreadPanicked`] if a scene panicked
    pub fn run(self) -> Result<(), DrillError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Channels ----------------------------------------------------
        let (platform_tx, platform_rx) = bounded(self.channel_capacity);
        let (core_tx, core_rx) = bounded(self.channel_capacity);

        //--- 2. Logic thread ------------------------------------------------
        let core_handle = self
            .orchestrator
            .spawn_core_thread(platform_rx, core_tx, self.tps)
            .map_err(DrillError::CoreThreadSpawn)?;
        info!("Core logic thread spawned");

        //--- 3. Platform ----------------------------------------------------
        let platform_result = Platform::new(platform_tx, core_rx, self.title).run();
        info!("Platform event loop exited");

        //--- 4. Cleanup -----------------------------------------------------
        // The platform dropped its sender, so the core loop sees a
        // disconnect on its next tick even if WindowClosed never arrived.
        let core_result = core_handle.join();

        if let Err(e) = &platform_result {
            error!("Platform error: {}", e);
        }
        platform_result?;

        match core_result {
            Ok(()) => {
                info!("Engine shutdown complete");
                Ok(())
            }
            Err(_) => {
                error!("Core thread panicked");
                Err(DrillError::CoreThreadPanicked)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputContext, KeyCode};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Main,
    }

    impl SceneKey for TestScene {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Up,
    }

    impl Action for TestAction {}

    type Builder = EngineBuilder<TestScene, TestAction>;

    #[test]
    fn builder_defaults() {
        let builder = Builder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.title, "Disaster Drill");
    }

    #[test]
    fn builder_setters() {
        let builder = Builder::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .with_title("Flood");
        assert_eq!(builder.tps, 120.0);
        assert_eq!(builder.channel_capacity, 256);
        assert_eq!(builder.title, "Flood");
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        Builder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        Builder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        Builder::new().with_channel_capacity(0);
    }

    #[test]
    fn build_carries_settings() {
        let engine = Builder::new().with_tps(30.0).with_title("Drought").build();
        assert_eq!(engine.tps, 30.0);
        assert_eq!(engine.title, "Drought");
    }

    #[test]
    fn init_runs_closure_once() {
        let mut calls = 0;
        let _engine = Builder::new().build().init(|systems| {
            calls += 1;
            systems
                .input
                .bind_key(KeyCode::KeyW, TestAction::Up, InputContext::Primary);
        });
        assert_eq!(calls, 1);
    }
}
