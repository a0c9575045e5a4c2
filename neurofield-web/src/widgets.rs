//! Dashboard modal and chatbot widget, reachable from inline `onclick`
//! handlers through the exported functions in the crate root.

use std::cell::RefCell;

use neurofield::page::{Chatbot, Modal};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, MouseEvent, Node};

use crate::dom;

const MODAL_ID: &str = "powerbiModal";
const CHATBOT_ID: &str = "chatbotWidget";

thread_local! {
    static MODAL: RefCell<Modal> = RefCell::new(Modal::default());
    static CHATBOT: RefCell<Chatbot> = RefCell::new(Chatbot::default());
}

fn apply_modal(modal: Modal) {
    let Ok(document) = dom::document() else {
        return;
    };
    if let Some(element) = document.get_element_by_id(MODAL_ID) {
        dom::set_class(&element, Modal::CLASS, modal.is_open());
    }
    if let Some(body) = document.body() {
        dom::set_style(&body, "overflow", modal.body_overflow());
    }
}

fn apply_chatbot(chatbot: Chatbot) {
    let Ok(document) = dom::document() else {
        return;
    };
    if let Some(widget) = document.get_element_by_id(CHATBOT_ID) {
        dom::set_class(&widget, Chatbot::CLASS, chatbot.is_open());
    }
}

fn update_modal(f: impl FnOnce(&mut Modal) -> bool) {
    let changed = MODAL.with(|modal| {
        let mut modal = modal.borrow_mut();
        f(&mut *modal).then_some(*modal)
    });
    if let Some(modal) = changed {
        apply_modal(modal);
    }
}

fn update_chatbot(f: impl FnOnce(&mut Chatbot) -> bool) {
    let changed = CHATBOT.with(|chatbot| {
        let mut chatbot = chatbot.borrow_mut();
        f(&mut *chatbot).then_some(*chatbot)
    });
    if let Some(chatbot) = changed {
        apply_chatbot(chatbot);
    }
}

pub fn open_modal() {
    update_modal(|modal| {
        modal.open();
        true
    });
}

pub fn close_modal() {
    update_modal(|modal| {
        modal.close();
        true
    });
}

pub fn toggle_chatbot() {
    update_chatbot(|chatbot| {
        chatbot.toggle();
        true
    });
}

/// Escape closes both widgets; a click outside the chatbot closes it.
pub fn init_widgets(document: &Document) -> Result<(), JsValue> {
    if let Some(widget) = document.get_element_by_id(CHATBOT_ID) {
        let open = widget.class_list().contains(Chatbot::CLASS);
        CHATBOT.with(|chatbot| *chatbot.borrow_mut() = Chatbot::new(open));
    }

    dom::on(document, "keydown", |event: KeyboardEvent| {
        let key = event.key();
        update_modal(|modal| modal.key_pressed(&key));
        update_chatbot(|chatbot| chatbot.key_pressed(&key));
    })?;

    let lookup = document.clone();
    dom::on(document, "click", move |event: MouseEvent| {
        let Some(widget) = lookup.get_element_by_id(CHATBOT_ID) else {
            return;
        };
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = widget.contains(target.as_ref());
        update_chatbot(|chatbot| {
            let was_open = chatbot.is_open();
            chatbot.clicked(inside);
            was_open != chatbot.is_open()
        });
    })?;
    Ok(())
}
