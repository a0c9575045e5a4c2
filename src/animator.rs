//! The self-rescheduling frame loop around a [`ParticleField`].
//!
//! The host provides a [`FrameScheduler`] ("run me again next frame") and
//! calls [`Animator::frame`] whenever that fires. Each frame applies queued
//! input, advances the field one tick, paints it, and asks for the next
//! frame. Stopping the animator through its [`StopHandle`] ends the chain:
//! the next call draws nothing and schedules nothing.
//!
//! ```
//! use neurofield::{Animator, FieldConfig, FrameStatus, ParticleField, Recorder};
//!
//! let mut animator = Animator::new(ParticleField::new(800.0, 600.0, FieldConfig::default(), 1));
//! let mut surface = Recorder::new();
//! let mut requested = 0;
//!
//! assert_eq!(animator.frame(&mut surface, &mut || requested += 1), FrameStatus::Continue);
//! animator.stop_handle().stop();
//! assert_eq!(animator.frame(&mut surface, &mut || requested += 1), FrameStatus::Stopped);
//! assert_eq!(requested, 1);
//! ```

use crate::field::ParticleField;
use crate::input::{InputEvent, InputQueue};
use crate::surface::RenderSurface;
use std::cell::Cell;
use std::rc::Rc;

/// Host hook that runs the animator again on the next frame.
pub trait FrameScheduler {
    fn schedule(&mut self);
}

impl<F: FnMut()> FrameScheduler for F {
    fn schedule(&mut self) {
        self()
    }
}

/// Shared switch that ends an animator's frame chain.
///
/// Clones refer to the same switch. Stopping is permanent.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Outcome of one [`Animator::frame`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Frame drawn and the next one scheduled.
    Continue,
    /// The animator was stopped; nothing drawn or scheduled.
    Stopped,
}

/// A particle field plus the input queue and stop switch that drive it.
#[derive(Debug)]
pub struct Animator {
    field: ParticleField,
    input: InputQueue,
    stop: StopHandle,
    frames: u64,
}

impl Animator {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            input: InputQueue::new(),
            stop: StopHandle::default(),
            frames: 0,
        }
    }

    /// Queue input for the next frame.
    pub fn push(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply input, tick, render, reschedule.
    pub fn frame<S, F>(&mut self, surface: &mut S, scheduler: &mut F) -> FrameStatus
    where
        S: RenderSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if self.stop.is_stopped() {
            return FrameStatus::Stopped;
        }

        self.input.apply(&mut self.field);
        self.field.tick();
        self.field.render(surface);
        self.frames += 1;

        scheduler.schedule();
        FrameStatus::Continue
    }

    /// A handle that stops this animator, usable from event callbacks.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Frames drawn so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    /// Events queued for the next frame.
    #[inline]
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use crate::surface::{DrawCommand, Recorder};
    use glam::Vec2;

    fn animator() -> Animator {
        Animator::new(ParticleField::new(600.0, 400.0, FieldConfig::default(), 11))
    }

    #[test]
    fn test_frame_draws_and_reschedules() {
        let mut animator = animator();
        let mut surface = Recorder::new();
        let mut scheduled = 0;

        let status = animator.frame(&mut surface, &mut || scheduled += 1);
        assert_eq!(status, FrameStatus::Continue);
        assert_eq!(scheduled, 1);
        assert_eq!(animator.frames(), 1);
        assert_eq!(surface.circle_count(), 16);
        assert_eq!(
            surface.commands()[0],
            DrawCommand::Clear { width: 600.0, height: 400.0 }
        );
    }

    #[test]
    fn test_stopped_animator_is_inert() {
        let mut animator = animator();
        let handle = animator.stop_handle();
        handle.stop();
        handle.stop();

        let mut surface = Recorder::new();
        let mut scheduled = 0;
        let status = animator.frame(&mut surface, &mut || scheduled += 1);

        assert_eq!(status, FrameStatus::Stopped);
        assert!(animator.is_stopped());
        assert_eq!(scheduled, 0);
        assert!(surface.commands().is_empty());
        assert_eq!(animator.frames(), 0);
    }

    #[test]
    fn test_input_applies_at_next_frame() {
        let mut animator = animator();
        animator.push(InputEvent::PointerMoved(Vec2::new(3.0, 4.0)));
        assert_eq!(animator.pending_input(), 1);
        assert_eq!(animator.field().pointer().position(), None);

        let mut surface = Recorder::new();
        animator.frame(&mut surface, &mut || {});
        assert_eq!(animator.pending_input(), 0);
        assert_eq!(animator.field().pointer().position(), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn test_resize_between_frames_redraws_new_size() {
        let mut animator = animator();
        animator.push(InputEvent::Resized {
            width: 1500.0,
            height: 1000.0,
        });

        let mut surface = Recorder::new();
        animator.frame(&mut surface, &mut || {});
        assert_eq!(surface.circle_count(), 100);
    }
}
