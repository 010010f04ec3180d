//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the logic thread via crossbeam
// channels.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Core Systems    │
//  │   ↓                      │    │                  │
//  │  InputProcessor          │    │  InputSystem     │
//  │   ↓                      │    │  ↓               │
//  │  InputBuffer             │    │  Scenes (drill,  │
//  │   ↓                      │    │   launcher)      │
//  │  RedrawRequested (flush) ├───►│                  │
//  │                          │    │                  │
//  │  set_title / exit     ◄──┼────┤  HUD title, exit │
//  └──────────────────────────┘    └──────────────────┘
//        PlatformEvent ►   ◄ CoreEvent
// ```
//
// The window title is the only output surface: the logic thread renders
// the HUD into one line and the platform applies it.
//
// Winit wants the event loop on the main thread (macOS/iOS), so this
// runs on the thread that called `Engine::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::input::InputEvent;
use crate::core::platform_bridge::{CoreEvent, PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window owner and input aggregator.
///
/// Not `Send`: it stays on the main thread and talks to the logic thread
/// only through its two channel ends.
pub(crate) struct Platform {
    /// Created lazily in `resumed()`.
    window: Option<Window>,

    /// Title shown until the logic thread publishes the first HUD line,
    /// and kept in sync with it afterwards.
    title: String,

    buffer: InputBuffer,
    input_processor: InputProcessor,

    event_sender: Sender<PlatformEvent>,
    core_events: Receiver<CoreEvent>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        event_sender: Sender<PlatformEvent>,
        core_events: Receiver<CoreEvent>,
        title: impl Into<String>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            title: title.into(),
            buffer: InputBuffer::new(),
            input_processor: InputProcessor::new(),
            event_sender,
            core_events,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes or core asks to
    /// exit.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread on platforms that require it.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends this frame's buffered input to the logic thread.
    ///
    /// A closed channel means core already stopped; the events are dropped
    /// so the window can still be closed normally.
    fn flush_input_buffer(&mut self) {
        let Some(events) = self.buffer.drain() else {
            return;
        };

        trace!(target: "platform::input", "Flushing {} events", events.len());

        let count = events.len();
        if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
            warn!(target: "platform::input", "Channel disconnected, dropping {} events", count);
        }
    }

    /// Applies pending requests from the logic thread.
    ///
    /// Returns `true` when the event loop should stop.
    fn apply_core_events(&mut self) -> bool {
        loop {
            match self.core_events.try_recv() {
                Ok(CoreEvent::Title(title)) => self.set_title(title),
                Ok(CoreEvent::Exit) => {
                    info!(target: "platform", "Exit requested by core");
                    return true;
                }
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Disconnected) => {
                    warn!(target: "platform", "Core thread stopped, closing window");
                    return true;
                }
            }
        }
    }

    /// Keys held when focus leaves never see their release, so core is
    /// told to drop them.
    fn focus_changed(&mut self, focused: bool) {
        if !focused {
            debug!(target: "platform::input", "Focus lost, releasing held input");
            self.buffer.push(InputEvent::FocusLost);
        }
    }

    fn set_title(&mut self, title: String) {
        if title == self.title {
            return;
        }
        if let Some(window) = &self.window {
            window.set_title(&title);
        }
        self.title = title;
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(960, 540));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(&key_event) {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(button, state);
                self.buffer.push(event);
            }

            WindowEvent::Focused(focused) => self.focus_changed(focused),

            WindowEvent::RedrawRequested => {
                // Frame boundary.
                self.flush_input_buffer();

                if self.apply_core_events() {
                    event_loop.exit();
                    return;
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, Modifiers};
    use crossbeam_channel::unbounded;

    fn platform() -> (Platform, Receiver<PlatformEvent>, Sender<CoreEvent>) {
        let (tx, rx) = unbounded();
        let (core_tx, core_rx) = unbounded();
        (Platform::new(tx, core_rx, "Drill"), rx, core_tx)
    }

    fn space() -> InputEvent {
        InputEvent::KeyDown { key: KeyCode::Space, modifiers: Modifiers::NONE }
    }

    #[test]
    fn window_is_created_lazily() {
        let (platform, _rx, _core_tx) = platform();
        assert!(platform.window.is_none());
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx, _core_tx) = platform();
        platform.flush_input_buffer();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_sends_buffered_events_once() {
        let (mut platform, rx, _core_tx) = platform();
        platform.buffer.push(space());

        platform.flush_input_buffer();
        platform.flush_input_buffer();

        assert_eq!(rx.try_recv().ok(), Some(PlatformEvent::Inputs(vec![space()])));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_survives_disconnected_channel() {
        let (mut platform, rx, _core_tx) = platform();
        platform.buffer.push(space());
        drop(rx);

        platform.flush_input_buffer();
    }

    #[test]
    fn focus_loss_is_forwarded_after_pending_input() {
        let (mut platform, rx, _core_tx) = platform();
        let hold_d = InputEvent::KeyDown { key: KeyCode::KeyD, modifiers: Modifiers::NONE };
        platform.buffer.push(hold_d);

        platform.focus_changed(true);
        platform.focus_changed(false);
        platform.flush_input_buffer();

        assert_eq!(
            rx.try_recv().ok(),
            Some(PlatformEvent::Inputs(vec![hold_d, InputEvent::FocusLost]))
        );
    }

    #[test]
    fn title_updates_are_applied_without_window() {
        let (mut platform, _rx, core_tx) = platform();
        core_tx.send(CoreEvent::Title("Flood | Time Left: 60".into())).unwrap();

        assert!(!platform.apply_core_events());
        assert_eq!(platform.title, "Flood | Time Left: 60");
    }

    #[test]
    fn exit_and_disconnect_stop_the_loop() {
        let (mut platform, _rx, core_tx) = platform();
        core_tx.send(CoreEvent::Exit).unwrap();
        assert!(platform.apply_core_events());

        drop(core_tx);
        assert!(platform.apply_core_events());
    }
}
