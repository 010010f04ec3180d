//=========================================================================
// Geometry
//=========================================================================
//
// Side-view coordinates: x runs left/right, y is height above the ground
// plane, z is depth (only decorative entities use it).
//
//=========================================================================

use serde::{Deserialize, Serialize};

/// Point in the side-view plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Axis-aligned proximity test: strictly closer than `tolerance` on
    /// both axes.
    pub fn is_near(&self, other: Vec2, tolerance: f32) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }
}

/// Position of a decorative entity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Projection onto the side-view plane.
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearness_is_strict_on_each_axis() {
        let goal = Vec2::new(8.0, 1.5);

        assert!(Vec2::new(6.5, 0.5).is_near(goal, 2.0));
        assert!(!Vec2::new(6.0, 1.5).is_near(goal, 2.0));
        assert!(!Vec2::new(8.0, 3.5).is_near(goal, 2.0));
    }

    #[test]
    fn projection_drops_depth() {
        assert_eq!(Vec3::new(1.0, 2.0, -7.0).xy(), Vec2::new(1.0, 2.0));
    }
}
