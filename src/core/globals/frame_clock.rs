//=========================================================================
// Frame Clock
//=========================================================================
//
// Per-tick timing handed to scenes.
//
// `dt` is the measured wall time since the previous tick, capped so a
// stalled logic thread (debugger, window drag) cannot teleport the
// avatar or drain a whole round in one step.
//
//=========================================================================

/// Longest step a single tick may report, in seconds.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Tick timing: delta, accumulated time and tick index.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameClock {
    dt: f32,
    elapsed: f64,
    tick: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new tick with the measured step (negative steps count as 0).
    pub(crate) fn advance(&mut self, measured: f32) {
        self.dt = measured.clamp(0.0, MAX_FRAME_DT);
        self.elapsed += f64::from(self.dt);
        self.tick += 1;
    }

    /// Seconds covered by the current tick.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Seconds accumulated over all ticks.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of ticks run so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates() {
        let mut clock = FrameClock::new();
        clock.advance(0.05);
        clock.advance(0.05);

        assert_eq!(clock.tick(), 2);
        assert_eq!(clock.dt(), 0.05);
        assert!((clock.elapsed() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn long_stalls_are_capped() {
        let mut clock = FrameClock::new();
        clock.advance(2.5);
        assert_eq!(clock.dt(), MAX_FRAME_DT);
    }

    #[test]
    fn negative_steps_become_zero() {
        let mut clock = FrameClock::new();
        clock.advance(-1.0);
        assert_eq!(clock.dt(), 0.0);
        assert_eq!(clock.tick(), 1);
    }
}
