//! # neurofield
//!
//! The drifting "neural network" particle background of a portfolio page,
//! plus the small state machines behind the rest of that page.
//!
//! A [`ParticleField`] holds a set of slowly drifting particles inside a
//! rectangle. Each tick moves every particle, bounces it off the edges and
//! pushes it away from the pointer. Rendering paints the particles as
//! circles and links every pair closer than the link distance with a line
//! that fades out with distance.
//!
//! Nothing here knows about a browser or a GPU. Drawing goes through the
//! [`RenderSurface`] trait and frame pacing through [`FrameScheduler`], so
//! the same field drives the `neurofield-web` canvas, the native viewer and
//! the tests.
//!
//! ## Quick Start
//!
//! ```
//! use neurofield::{Animator, FieldConfig, FrameStatus, ParticleField, Recorder};
//! use glam::Vec2;
//!
//! let field = ParticleField::new(1500.0, 1000.0, FieldConfig::default(), 42);
//! assert_eq!(field.len(), 100);
//!
//! let mut animator = Animator::new(field);
//! animator.push(neurofield::InputEvent::PointerMoved(Vec2::new(750.0, 500.0)));
//!
//! let mut canvas = Recorder::new();
//! let status = animator.frame(&mut canvas, &mut || { /* request next frame */ });
//! assert_eq!(status, FrameStatus::Continue);
//! assert_eq!(canvas.circle_count(), 100);
//! ```
//!
//! ## Page behaviors
//!
//! The [`page`] module covers the typewriter headline, stat counters,
//! cursor trail, magnetic buttons, scroll effects, project filter and the
//! menu, modal and chatbot widgets.
//!
//! ## Features
//!
//! - `viewer` (default): the `neurofield` binary, a winit + wgpu window that
//!   animates the field natively. Disable it for `wasm32` builds.

pub mod animator;
pub mod config;
pub mod error;
pub mod field;
pub mod input;
pub mod page;
pub mod render;
pub mod surface;

#[cfg(feature = "viewer")]
pub mod gpu;
#[cfg(feature = "viewer")]
pub mod time;
#[cfg(feature = "viewer")]
pub mod window;

pub use animator::{Animator, FrameScheduler, FrameStatus, StopHandle};
pub use config::FieldConfig;
pub use error::ConfigError;
#[cfg(feature = "viewer")]
pub use error::{GpuError, ViewerError};
pub use field::{particle_count, Particle, ParticleField, PointerState};
pub use glam::Vec2;
#[cfg(feature = "viewer")]
pub use gpu::FrameBatch;
pub use input::{InputEvent, InputQueue};
pub use render::{edge_opacity, proximity_edges, ProximityEdge};
pub use surface::{DrawCommand, Recorder, RenderSurface, Rgba};

/// Everything needed to drive a field from a host.
pub mod prelude {
    pub use crate::animator::{Animator, FrameScheduler, FrameStatus, StopHandle};
    pub use crate::config::FieldConfig;
    pub use crate::field::ParticleField;
    pub use crate::input::InputEvent;
    pub use crate::surface::{RenderSurface, Rgba};
    pub use glam::Vec2;
}
