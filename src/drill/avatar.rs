//=========================================================================
// Avatar
//=========================================================================
//
// The player's stick figure: a body block with a head riding on top.
// Only the body position matters for the rules; the head is derived.
//
//=========================================================================

use super::geometry::Vec2;

/// Body position at round start.
pub const START: Vec2 = Vec2::new(-8.0, 0.5);

/// Lowest body height (standing on the ground plane).
pub const GROUND_Y: f32 = 0.5;

/// Head height above the body centre.
pub const HEAD_OFFSET: f32 = 0.8;

//=== MoveInput ===========================================================

/// Directions held this tick. Opposite directions cancel out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    pub const NONE: Self = Self { up: false, down: false, left: false, right: false };

    /// Unit steps per axis (each component is -1, 0 or 1).
    pub fn axes(&self) -> (f32, f32) {
        let axis = |neg: bool, pos: bool| f32::from(u8::from(pos)) - f32::from(u8::from(neg));
        (axis(self.left, self.right), axis(self.down, self.up))
    }
}

//=== Avatar ==============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    body: Vec2,
    visible: bool,
}

impl Avatar {
    pub fn new() -> Self {
        Self { body: START, visible: true }
    }

    pub fn body(&self) -> Vec2 {
        self.body
    }

    pub fn head(&self) -> Vec2 {
        Vec2::new(self.body.x, self.body.y + HEAD_OFFSET)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Moves by `speed * dt` along each held axis, then clamps to the ground.
    ///
    /// Diagonal movement is not normalized.
    pub fn step(&mut self, input: MoveInput, speed: f32, dt: f32) {
        let (dx, dy) = input.axes();
        let distance = speed * dt;

        self.body.x += dx * distance;
        self.body.y = (self.body.y + dy * distance).max(GROUND_Y);
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}
