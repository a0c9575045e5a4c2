//! Browser bindings for neurofield.
//!
//! Loading the module starts everything: once the DOM is ready the particle
//! background is attached to `#neural-network` and every page behavior is
//! wired up. The exported functions below are for inline handlers in the
//! page markup and for scripts that want to control the background.

use std::cell::RefCell;

use neurofield::FieldConfig;
use wasm_bindgen::prelude::*;
use web_sys::Event;

mod canvas;
mod dom;
mod network;
mod page;
mod widgets;

pub use canvas::CanvasSurface;
pub use network::NeuralNetworkHandle;

const CANVAS_ID: &str = "neural-network";

thread_local! {
    static NETWORK: RefCell<Option<NeuralNetworkHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    page::print_banner();

    let document = dom::document()?;
    if neurofield::page::needs_dom_ready(&document.ready_state()) {
        dom::on(&document, "DOMContentLoaded", |_: Event| init())?;
    } else {
        init();
    }
    Ok(())
}

fn init() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("page init failed: {:?}", e);
            return;
        }
    };

    if let Err(e) = start_neural_network(CANVAS_ID) {
        log::error!("neural network init failed: {:?}", e);
    }
    page::init_all(&document);
    if let Err(e) = widgets::init_widgets(&document) {
        log::error!("widgets init failed: {:?}", e);
    }
    log::info!("page ready");
}

/// Start the particle background on a canvas, replacing any running one.
///
/// Returns `undefined` when the page has no such canvas.
#[wasm_bindgen(js_name = startNeuralNetwork)]
pub fn start_neural_network(canvas_id: &str) -> Result<Option<NeuralNetworkHandle>, JsValue> {
    stop_neural_network();
    let handle = network::start(canvas_id, FieldConfig::default())?;
    NETWORK.with(|network| *network.borrow_mut() = handle.clone());
    Ok(handle)
}

/// Stop the running particle background, if any.
#[wasm_bindgen(js_name = stopNeuralNetwork)]
pub fn stop_neural_network() {
    let running = NETWORK.with(|network| network.borrow_mut().take());
    if let Some(handle) = running {
        handle.stop();
    }
}

#[wasm_bindgen(js_name = openPowerBIModal)]
pub fn open_power_bi_modal() {
    widgets::open_modal();
}

#[wasm_bindgen(js_name = closePowerBIModal)]
pub fn close_power_bi_modal() {
    widgets::close_modal();
}

#[wasm_bindgen(js_name = toggleChatbot)]
pub fn toggle_chatbot() {
    widgets::toggle_chatbot();
}
