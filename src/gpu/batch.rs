//! CPU-side collection of one frame's draw calls in GPU vertex layout.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::surface::{RenderSurface, Rgba};

/// One particle, drawn as an instanced quad with a circular cutout.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: [f32; 4],
}

/// One end of a line segment.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub(crate) struct Viewport {
    pub size: [f32; 2],
    pub _pad: [f32; 2],
}

/// Draw calls for one frame, ready to upload.
///
/// Line width is ignored: the GPU line list always rasterizes one pixel wide.
#[derive(Debug, Default)]
pub struct FrameBatch {
    size: [f32; 2],
    circles: Vec<CircleInstance>,
    lines: Vec<LineVertex>,
}

impl FrameBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface size from the last clear.
    pub fn size(&self) -> [f32; 2] {
        self.size
    }

    pub fn circles(&self) -> &[CircleInstance] {
        &self.circles
    }

    /// Line vertices, two per segment.
    pub fn lines(&self) -> &[LineVertex] {
        &self.lines
    }
}

impl RenderSurface for FrameBatch {
    fn clear(&mut self, width: f32, height: f32) {
        self.size = [width, height];
        self.circles.clear();
        self.lines.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push(CircleInstance {
            center: center.to_array(),
            radius,
            color: color.to_linear(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, color: Rgba) {
        let color = color.to_linear();
        self.lines.push(LineVertex {
            position: from.to_array(),
            color,
        });
        self.lines.push(LineVertex {
            position: to.to_array(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_sizes() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 28);
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
        assert_eq!(std::mem::size_of::<Viewport>(), 16);
    }

    #[test]
    fn test_clear_resets_batch() {
        let mut batch = FrameBatch::new();
        let color = Rgba::new(0, 212, 255, 0.8);
        batch.clear(640.0, 480.0);
        batch.fill_circle(Vec2::new(1.0, 2.0), 3.0, color);
        batch.stroke_line(Vec2::ZERO, Vec2::ONE, 1.0, color);

        assert_eq!(batch.size(), [640.0, 480.0]);
        assert_eq!(batch.circles().len(), 1);
        assert_eq!(batch.lines().len(), 2);
        assert_eq!(batch.circles()[0].center, [1.0, 2.0]);

        batch.clear(10.0, 10.0);
        assert!(batch.circles().is_empty());
        assert!(batch.lines().is_empty());
    }
}
