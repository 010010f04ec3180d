//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for everything running on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Own GlobalSystems (input, scenes) and GlobalContext (scene data)
// - Receive platform events via crossbeam channel
// - Tick scenes at a fixed rate (TPS) with a measured, capped dt
// - Forward scene requests (window title, exit) back to the platform
//
// Notes:
// The orchestrator runs independently from the platform layer.
// Communication happens only through message passing, so no state is
// shared between threads.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod globals;
pub mod input;
pub mod platform_bridge;
pub mod scene;

//=== Public API ==========================================================

pub use globals::{GlobalContext, GlobalSystems};
pub use input::Action;
pub use scene::SceneKey;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use platform_bridge::{CoreEvent, EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================

/// Owns the logic-thread state until the thread is spawned.
pub(crate) struct CoreSystemsOrchestrator<S: SceneKey, A: Action> {
    systems: GlobalSystems<S, A>,
    context: GlobalContext<S, A>,
}

impl<S: SceneKey, A: Action> CoreSystemsOrchestrator<S, A> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(),
        }
    }

    /// Gives the application a chance to bind input and register scenes.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        init_fn(&mut self.systems);
    }

    //--- Thread -----------------------------------------------------------

    /// Spawns the logic thread.
    ///
    /// Each tick:
    ///  1. Drain platform events (exit on close/disconnect)
    ///  2. Update systems with the measured dt
    ///  3. Forward title/exit requests to the platform
    ///  4. Sleep to hold the tick rate
    pub(crate) fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        sender: Sender<CoreEvent>,
        tps: f64,
    ) -> std::io::Result<thread::JoinHandle<()>> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::Builder::new()
            .name("core".into())
            .spawn(move || self.run(receiver, sender, frame_duration))
    }

    fn run(mut self, receiver: Receiver<PlatformEvent>, sender: Sender<CoreEvent>, frame: Duration) {
        let mut collector = EventCollector::new(receiver);

        self.systems.start(&mut self.context);
        if Self::forward_requests(&mut self.context, &sender) == TickControl::Exit {
            info!("Core thread exiting during startup");
            return;
        }

        let mut last_tick = Instant::now();

        loop {
            let frame_start = Instant::now();

            //--- Step 1: Gather platform events ---------------------------
            if collector.collect_frame() == TickControl::Exit {
                info!("Core thread exiting");
                break;
            }

            //--- Step 2: Update systems -----------------------------------
            let measured = frame_start.duration_since(last_tick).as_secs_f32();
            last_tick = frame_start;
            self.systems
                .update(&mut self.context, collector.batches(), measured);

            //--- Step 3: Platform requests --------------------------------
            if Self::forward_requests(&mut self.context, &sender) == TickControl::Exit {
                info!("Exit requested by scene");
                break;
            }

            //--- Step 4: Pacing -------------------------------------------
            let elapsed = frame_start.elapsed();
            if elapsed < frame {
                thread::sleep(frame - elapsed);
            }
        }
    }

    fn forward_requests(context: &mut GlobalContext<S, A>, sender: &Sender<CoreEvent>) -> TickControl {
        if let Some(title) = context.take_title() {
            debug!("Title -> {}", title);
            if sender.send(CoreEvent::Title(title)).is_err() {
                warn!("Platform channel closed, dropping title update");
            }
        }

        if context.exit_requested() {
            // The platform may already be gone.
            let _ = sender.send(CoreEvent::Exit);
            return TickControl::Exit;
        }

        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
