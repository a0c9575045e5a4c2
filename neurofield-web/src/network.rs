//! The particle background on a `<canvas>`, driven by
//! `requestAnimationFrame`.
//!
//! [`start`] sizes the canvas to the viewport, builds an [`Animator`] and
//! hooks up three listeners: window `resize`, canvas `mousemove` and canvas
//! `mouseleave`. Listeners only queue input; the animation frame applies it.
//! [`NeuralNetworkHandle::stop`] ends the frame chain, cancels the pending
//! frame request and detaches every listener.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use glam::Vec2;
use neurofield::{Animator, FieldConfig, InputEvent, ParticleField, StopHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use crate::canvas::CanvasSurface;
use crate::dom;

type Listener = (EventTarget, &'static str, Closure<dyn FnMut(Event)>);

struct LoopState {
    window: Window,
    stop: StopHandle,
    frame_request: Cell<Option<i32>>,
    frame_callback: RefCell<Option<Closure<dyn FnMut()>>>,
    listeners: RefCell<Vec<Listener>>,
}

impl LoopState {
    fn request_frame(&self) {
        let callback = self.frame_callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.frame_request.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn listen(
        &self,
        target: EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        self.listeners.borrow_mut().push((target, kind, closure));
        Ok(())
    }

    fn teardown(&self) {
        self.stop.stop();

        if let Some(id) = self.frame_request.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }

        for (target, kind, closure) in self.listeners.borrow_mut().drain(..) {
            if let Err(e) =
                target.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            {
                log::warn!("removing '{}' listener failed: {:?}", kind, e);
            }
        }

        self.frame_callback.borrow_mut().take();
    }
}

impl Drop for LoopState {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// A running background animation.
#[wasm_bindgen]
#[derive(Clone)]
pub struct NeuralNetworkHandle {
    state: Rc<LoopState>,
}

#[wasm_bindgen]
impl NeuralNetworkHandle {
    /// Stop animating and detach from the page. Safe to call more than once.
    pub fn stop(&self) {
        if !self.state.stop.is_stopped() {
            log::info!("neural network stopped");
        }
        self.state.teardown();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        !self.state.stop.is_stopped()
    }
}

fn viewport_size(window: &Window) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width as f32, height as f32)
}

fn random_seed() -> u64 {
    let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let low = js_sys::Date::now() as u64;
    (high << 32) ^ low
}

/// Start the background on the canvas with id `canvas_id`.
///
/// `Ok(None)` when there is no such canvas.
pub fn start(canvas_id: &str, config: FieldConfig) -> Result<Option<NeuralNetworkHandle>, JsValue> {
    let window = dom::window()?;
    let document = dom::document()?;
    let Some(canvas) = document
        .get_element_by_id(canvas_id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        log::debug!("no canvas '#{}', background disabled", canvas_id);
        return Ok(None);
    };

    let mut surface = CanvasSurface::new(&canvas)?;

    let (width, height) = viewport_size(&window);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let field = ParticleField::new(width, height, config, random_seed());
    log::info!(
        "neural network started: {}x{}, {} particles",
        width,
        height,
        field.len()
    );

    let animator = Animator::new(field);
    let state = Rc::new(LoopState {
        window: window.clone(),
        stop: animator.stop_handle(),
        frame_request: Cell::new(None),
        frame_callback: RefCell::new(None),
        listeners: RefCell::new(Vec::new()),
    });
    let animator = Rc::new(RefCell::new(animator));

    {
        let animator = animator.clone();
        let canvas = canvas.clone();
        let window_for_resize = window.clone();
        state.listen(window.clone().into(), "resize", move |_| {
            let (width, height) = viewport_size(&window_for_resize);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            animator
                .borrow_mut()
                .push(InputEvent::Resized { width, height });
        })?;
    }

    {
        let animator = animator.clone();
        state.listen(canvas.clone().into(), "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let position = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                animator.borrow_mut().push(InputEvent::PointerMoved(position));
            }
        })?;
    }

    {
        let animator = animator.clone();
        state.listen(canvas.clone().into(), "mouseleave", move |_| {
            animator.borrow_mut().push(InputEvent::PointerLeft);
        })?;
    }

    let weak: Weak<LoopState> = Rc::downgrade(&state);
    let frame = Closure::<dyn FnMut()>::new(move || {
        let Some(state) = weak.upgrade() else {
            return;
        };
        state.frame_request.set(None);
        animator
            .borrow_mut()
            .frame(&mut surface, &mut || state.request_frame());
    });
    state.frame_callback.replace(Some(frame));
    state.request_frame();

    Ok(Some(NeuralNetworkHandle { state }))
}
