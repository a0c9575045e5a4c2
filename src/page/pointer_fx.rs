//! Pointer-driven decorations: the lagging cursor trail and magnetic buttons.

use glam::Vec2;

/// Viewports narrower than this get no cursor trail.
pub const CURSOR_TRAIL_MIN_WIDTH: f64 = 768.0;
/// Fraction of the remaining distance the trail covers each frame.
const FOLLOW_SPEED: f32 = 0.15;
/// How far a magnetic element leans toward the pointer.
const MAGNETIC_PULL: f32 = 0.2;

/// Whether the cursor trail runs on a viewport this wide.
pub fn cursor_trail_enabled(viewport_width: f64) -> bool {
    viewport_width >= CURSOR_TRAIL_MIN_WIDTH
}

/// A point that eases toward the pointer every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorFollower {
    position: Vec2,
    target: Vec2,
}

impl CursorFollower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move one frame toward the target and return the new position.
    pub fn step(&mut self) -> Vec2 {
        self.position += (self.target - self.position) * FOLLOW_SPEED;
        self.position
    }
}

/// Offset for a magnetic element, given the pointer and the element's
/// top-left corner and size (all in client coordinates).
pub fn magnetic_offset(pointer: Vec2, origin: Vec2, size: Vec2) -> Vec2 {
    (pointer - origin - size / 2.0) * MAGNETIC_PULL
}

/// CSS `translate(...)` for an offset in pixels.
pub fn css_translate(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_threshold() {
        assert!(!cursor_trail_enabled(767.0));
        assert!(cursor_trail_enabled(768.0));
    }

    #[test]
    fn test_follower_eases_and_converges() {
        let mut follower = CursorFollower::new();
        follower.set_target(Vec2::new(100.0, 0.0));

        let first = follower.step();
        assert!((first.x - 15.0).abs() < 1e-5);

        for _ in 0..200 {
            follower.step();
        }
        assert!((follower.position().x - 100.0).abs() < 1e-3);
        assert_eq!(follower.position().y, 0.0);
    }

    #[test]
    fn test_magnetic_offset_from_center() {
        let origin = Vec2::new(100.0, 50.0);
        let size = Vec2::new(40.0, 20.0);

        // Pointer at the center: no lean
        assert_eq!(magnetic_offset(Vec2::new(120.0, 60.0), origin, size), Vec2::ZERO);

        let offset = magnetic_offset(Vec2::new(130.0, 55.0), origin, size);
        assert!((offset.x - 2.0).abs() < 1e-6);
        assert!((offset.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_css_translate() {
        assert_eq!(css_translate(Vec2::new(2.0, -1.5)), "translate(2px, -1.5px)");
        assert_eq!(css_translate(Vec2::ZERO), "translate(0px, 0px)");
    }
}
