//=========================================================================
// HUD
//=========================================================================
//
// Text overlay state for one drill: instruction line, resource readout,
// the transient status message and restart-button visibility.
//
// There is no renderer; the HUD is flattened into the window title.
//
//=========================================================================

use std::fmt::Write as _;

/// Appended to every end-of-round message.
pub const RESTART_HINT: &str = " Press R or click Restart to restart.";

/// Drought pickup message.
pub const HYDRATED_MESSAGE: &str = "Hydrated! +10 Thirst";

/// How long the status message stays up, in seconds of running time.
pub const STATUS_SECONDS: f32 = 3.0;

/// Resource readout colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceTone {
    #[default]
    Normal,
    Low,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    instruction: String,
    resource_line: String,
    tone: ResourceTone,
    status: Option<(String, f32)>,
    restart_visible: bool,
}

impl Hud {
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            resource_line: String::new(),
            tone: ResourceTone::Normal,
            status: None,
            restart_visible: false,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn resource_line(&self) -> &str {
        &self.resource_line
    }

    pub fn tone(&self) -> ResourceTone {
        self.tone
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn restart_visible(&self) -> bool {
        self.restart_visible
    }

    /// One-line rendering for the window title.
    ///
    /// `Flood Simulation | Time Left: 42 | Use WASD to move...`, with a
    /// `(!)` marker while the resource is low and the status message
    /// (if any) before the instruction.
    pub fn title(&self, drill_title: &str) -> String {
        let mut line = format!("{} | {}", drill_title, self.resource_line);
        if self.tone == ResourceTone::Low {
            line.push_str(" (!)");
        }
        if let Some(status) = self.status() {
            let _ = write!(line, " | {}", status);
        }
        let _ = write!(line, " | {}", self.instruction);
        if self.restart_visible {
            line.push_str(" [Restart]");
        }
        line
    }

    //--- Updates ----------------------------------------------------------

    /// `"{label}: {whole units}"`, red strictly below `low_threshold`.
    pub(crate) fn show_resource(&mut self, label: &str, value: f32, low_threshold: f32) {
        // Truncation toward zero, as the readout has always shown it.
        self.resource_line = format!("{}: {}", label, value.trunc() as i64);
        self.tone = if value < low_threshold {
            ResourceTone::Low
        } else {
            ResourceTone::Normal
        };
    }

    pub(crate) fn show_status(&mut self, text: impl Into<String>) {
        self.status = Some((text.into(), STATUS_SECONDS));
    }

    /// Counts the status message down; it disappears once its time is up.
    pub(crate) fn tick_status(&mut self, dt: f32) {
        if let Some((_, remaining)) = &mut self.status {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.status = None;
            }
        }
    }

    /// Replaces the instruction with `message` plus the restart hint.
    pub(crate) fn show_end(&mut self, message: &str) {
        self.instruction = format!("{}{}", message, RESTART_HINT);
        self.restart_visible = true;
    }

    /// Back to the running layout. The status message is left alone.
    pub(crate) fn reset(&mut self, instruction: &str) {
        self.instruction = instruction.to_string();
        self.restart_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_line_truncates_and_turns_low() {
        let mut hud = Hud::new("Go");

        hud.show_resource("Time Left", 10.0, 10.0);
        assert_eq!(hud.resource_line(), "Time Left: 10");
        assert_eq!(hud.tone(), ResourceTone::Normal);

        hud.show_resource("Time Left", 9.99, 10.0);
        assert_eq!(hud.resource_line(), "Time Left: 9");
        assert_eq!(hud.tone(), ResourceTone::Low);
    }

    #[test]
    fn status_expires_after_three_seconds() {
        let mut hud = Hud::new("Go");
        hud.show_status(HYDRATED_MESSAGE);

        hud.tick_status(2.9);
        assert_eq!(hud.status(), Some(HYDRATED_MESSAGE));

        hud.tick_status(0.2);
        assert_eq!(hud.status(), None);
    }

    #[test]
    fn end_and_reset() {
        let mut hud = Hud::new("Reach the safe zone");
        hud.show_status(HYDRATED_MESSAGE);

        hud.show_end("Time's up! Drill Failed!");
        assert_eq!(
            hud.instruction(),
            "Time's up! Drill Failed! Press R or click Restart to restart."
        );
        assert!(hud.restart_visible());

        hud.reset("Reach the safe zone");
        assert_eq!(hud.instruction(), "Reach the safe zone");
        assert!(!hud.restart_visible());
        assert_eq!(hud.status(), Some(HYDRATED_MESSAGE));
    }

    #[test]
    fn title_layout() {
        let mut hud = Hud::new("Find shade");
        hud.show_resource("Heat Resistance", 4.2, 10.0);
        hud.show_status("Hot!");

        assert_eq!(
            hud.title("Heatwave"),
            "Heatwave | Heat Resistance: 4 (!) | Hot! | Find shade"
        );

        hud.show_end("Success! Found Shade!");
        assert!(hud.title("Heatwave").ends_with("restart. [Restart]"));
    }
}
