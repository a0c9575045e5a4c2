//! Pointer and resize input for the particle field.
//!
//! Hosts translate their own events into [`InputEvent`]s and push them onto
//! an [`InputQueue`]. Nothing touches the field until the queue is applied at
//! the start of the next frame, so a frame never sees half an update.
//!
//! # Usage
//!
//! ```ignore
//! // In a winit window_event handler:
//! if let Some(input) = InputEvent::from_window_event(&event) {
//!     animator.push(input);
//! }
//! ```

use crate::field::ParticleField;
use glam::Vec2;

/// Input that affects the particle field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved, in surface coordinates.
    PointerMoved(Vec2),
    /// Pointer left the surface.
    PointerLeft,
    /// The surface changed size.
    Resized { width: f32, height: f32 },
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit window event, if it is one the field cares about.
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::WindowEvent;

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(InputEvent::PointerMoved(
                Vec2::new(position.x as f32, position.y as f32),
            )),
            WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),
            WindowEvent::Resized(size) => Some(InputEvent::Resized {
                width: size.width as f32,
                height: size.height as f32,
            }),
            _ => None,
        }
    }
}

/// Events waiting for the next frame, in arrival order.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply every pending event to `field` in order and empty the queue.
    pub fn apply(&mut self, field: &mut ParticleField) {
        for event in self.pending.drain(..) {
            match event {
                InputEvent::PointerMoved(position) => field.set_pointer(position),
                InputEvent::PointerLeft => field.clear_pointer(),
                InputEvent::Resized { width, height } => field.resize(width, height),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;

    #[test]
    fn test_events_wait_for_apply() {
        let mut field = ParticleField::new(300.0, 300.0, FieldConfig::default(), 5);
        let mut queue = InputQueue::new();

        queue.push(InputEvent::PointerMoved(Vec2::new(10.0, 20.0)));
        assert_eq!(queue.len(), 1);
        assert_eq!(field.pointer().position(), None);

        queue.apply(&mut field);
        assert!(queue.is_empty());
        assert_eq!(field.pointer().position(), Some(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn test_events_apply_in_order() {
        let mut field = ParticleField::new(300.0, 300.0, FieldConfig::default(), 5);
        let mut queue = InputQueue::new();

        queue.push(InputEvent::PointerMoved(Vec2::new(1.0, 1.0)));
        queue.push(InputEvent::PointerLeft);
        queue.apply(&mut field);
        assert_eq!(field.pointer().position(), None);

        queue.push(InputEvent::PointerLeft);
        queue.push(InputEvent::PointerMoved(Vec2::new(2.0, 3.0)));
        queue.apply(&mut field);
        assert_eq!(field.pointer().position(), Some(Vec2::new(2.0, 3.0)));
    }

    #[test]
    fn test_resize_event_rebuilds_field() {
        let mut field = ParticleField::new(0.0, 0.0, FieldConfig::default(), 5);
        let mut queue = InputQueue::new();
        queue.push(InputEvent::Resized {
            width: 1500.0,
            height: 1000.0,
        });
        queue.apply(&mut field);

        assert_eq!(field.len(), 100);
        assert_eq!(field.width(), 1500.0);
    }

    #[cfg(feature = "viewer")]
    #[test]
    fn test_window_resize_maps_to_field_resize() {
        use winit::dpi::PhysicalSize;
        use winit::event::WindowEvent;

        let event = WindowEvent::Resized(PhysicalSize::new(1500, 1000));
        assert_eq!(
            InputEvent::from_window_event(&event),
            Some(InputEvent::Resized {
                width: 1500.0,
                height: 1000.0,
            })
        );
        assert_eq!(InputEvent::from_window_event(&WindowEvent::Focused(true)), None);
    }
}
