//! Native desktop viewer: the particle field in a winit window.
//!
//! The window plays the part of the page's canvas. Cursor movement and
//! leaving the window drive the pointer, resizing rebuilds the field, and
//! the redraw chain stands in for `requestAnimationFrame`.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::animator::{Animator, FrameStatus};
use crate::config::FieldConfig;
use crate::error::ViewerError;
use crate::field::ParticleField;
use crate::gpu::{FrameBatch, GpuState};
use crate::input::InputEvent;
use crate::time::FrameClock;

const TITLE: &str = "neurofield";

pub struct App {
    config: FieldConfig,
    seed: u64,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    animator: Option<Animator>,
    batch: FrameBatch,
    clock: FrameClock,
    failure: Option<ViewerError>,
}

impl App {
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            window: None,
            gpu_state: None,
            animator: None,
            batch: FrameBatch::new(),
            clock: FrameClock::new(),
            failure: None,
        }
    }

    /// The error that shut the viewer down, if any.
    pub fn take_failure(&mut self) -> Option<ViewerError> {
        self.failure.take()
    }

    /// Hand pointer and resize events to the field for the next frame.
    fn queue_input(&mut self, event: &WindowEvent) {
        if let (Some(animator), Some(input)) =
            (&mut self.animator, InputEvent::from_window_event(event))
        {
            animator.push(input);
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let window_attrs = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu_state = pollster::block_on(GpuState::new(
            window.clone(),
            self.config.background,
        ))?;

        let size = window.inner_size();
        let field = ParticleField::new(
            size.width as f32,
            size.height as f32,
            self.config.clone(),
            self.seed,
        );
        log::info!(
            "Field {}x{} with {} particles (seed {})",
            size.width,
            size.height,
            field.len(),
            self.seed
        );

        self.animator = Some(Animator::new(field));
        self.gpu_state = Some(gpu_state);
        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(animator), Some(gpu_state)) =
            (&self.window, &mut self.animator, &mut self.gpu_state)
        else {
            return;
        };

        if animator.frame(&mut self.batch, &mut || window.request_redraw())
            == FrameStatus::Stopped
        {
            return;
        }

        match gpu_state.render(&self.batch) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = winit::dpi::PhysicalSize {
                    width: gpu_state.config.width,
                    height: gpu_state.config.height,
                };
                gpu_state.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                animator.stop();
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        if self.clock.tick() {
            window.set_title(&format!(
                "{} - {} particles - {:.0} fps",
                TITLE,
                animator.field().len(),
                self.clock.fps()
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("{}", e);
            self.failure = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                self.queue_input(&event);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => self.queue_input(&other),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(animator) = &self.animator {
            animator.stop();
            log::info!("Stopped after {} frames", animator.frames());
        }
    }
}

/// Open the viewer window and animate until it is closed.
pub fn run(config: FieldConfig, seed: u64) -> Result<(), ViewerError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config, seed);
    event_loop.run_app(&mut app)?;

    match app.take_failure() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
