//! Drawing contract between the particle field and whatever paints it.
//!
//! A surface only needs three primitives: clear the whole area, fill a
//! circle, stroke a straight line. The browser binding implements this on a
//! Canvas 2D context, the native viewer collects the calls into GPU buffers,
//! and [`Recorder`] keeps them as plain data for tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An sRGB color with 8-bit channels and a float alpha, as CSS writes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` text, e.g. `rgba(0, 212, 255, 0.8)`.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Linear-space float RGBA for an sRGB render target.
    pub fn to_linear(&self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a.clamp(0.0, 1.0),
        ]
    }
}

fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Something the particle field can paint onto.
pub trait RenderSurface {
    /// Erase the `width` x `height` area starting at the origin.
    fn clear(&mut self, width: f32, height: f32);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// One recorded call on a [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
}

/// Surface that stores every draw call in order.
#[derive(Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    /// Recorded lines as `(from, to, color)`.
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, color, .. } => Some((*from, *to, *color)),
            _ => None,
        })
    }
}

impl RenderSurface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_output() {
        let color = Rgba::new(0, 212, 255, 0.8);
        assert_eq!(color.to_css(), "rgba(0, 212, 255, 0.8)");
        assert_eq!(color.with_alpha(0.25).to_css(), "rgba(0, 212, 255, 0.25)");
    }

    #[test]
    fn test_linear_conversion_endpoints() {
        let linear = Rgba::new(0, 255, 0, 1.5).to_linear();
        assert_eq!(linear[0], 0.0);
        assert!((linear[1] - 1.0).abs() < 1e-6);
        // Alpha is clamped
        assert_eq!(linear[3], 1.0);
    }

    #[test]
    fn test_recorder_keeps_order() {
        let mut recorder = Recorder::new();
        let color = Rgba::new(1, 2, 3, 1.0);
        recorder.clear(10.0, 20.0);
        recorder.fill_circle(Vec2::new(1.0, 1.0), 2.0, color);
        recorder.stroke_line(Vec2::ZERO, Vec2::ONE, 1.0, color);

        assert_eq!(recorder.commands().len(), 3);
        assert_eq!(
            recorder.commands()[0],
            DrawCommand::Clear { width: 10.0, height: 20.0 }
        );
        assert_eq!(recorder.circle_count(), 1);
        assert_eq!(recorder.lines().count(), 1);

        let taken = recorder.take();
        assert_eq!(taken.len(), 3);
        assert!(recorder.commands().is_empty());
    }
}
