//! Small helpers over `web_sys` lookups, listeners and timers.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Every element in a node list.
pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(document: &Document, selectors: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(document.query_selector_all(selectors)?))
}

/// Every matching element that is an `HtmlElement` (has a style).
pub fn query_all_html(document: &Document, selectors: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(query_all(document, selectors)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn query_html(document: &Document, selectors: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selectors)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

pub fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Attach a listener for the lifetime of the page.
///
/// Events that are not an `E` are ignored.
pub fn on<E, F>(target: &EventTarget, kind: &str, mut handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout<F>(delay_ms: i32, f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    )
}

/// Run `f` once on the next animation frame.
pub fn next_frame<F>(f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window()?.request_animation_frame(callback.unchecked_ref())
}

/// Set or remove one class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("class '{}' not updated: {:?}", class, e);
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("style '{}' not updated: {:?}", property, e);
    }
}
