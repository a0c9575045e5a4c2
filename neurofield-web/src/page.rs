//! DOM wiring for the portfolio page.
//!
//! Every `init_*` function looks up its elements and quietly does nothing
//! when they are missing. The decisions themselves live in
//! [`neurofield::page`]; this module only reads the DOM and writes the
//! results back.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use glam::Vec2;
use neurofield::page::counter::parse_target;
use neurofield::page::filter::{HIDDEN_SCALE, HIDE_DELAY, SHOW_DELAY};
use neurofield::page::lifecycle::LOADED_CLASS;
use neurofield::page::scroll::{
    skill_width, COUNTER_OBSERVER, REVEAL_OBSERVER, REVEAL_SELECTORS, SKILL_BAR_OBSERVER,
};
use neurofield::page::typing::{DEFAULT_ROLES, START_DELAY};
use neurofield::page::{
    css_translate, cursor_trail_enabled, filter_action, is_loaded, magnetic_offset,
    navbar_scrolled, CounterAnimation, CursorFollower, FilterAction, HeroParallax, MobileMenu, ObserverOptions,
    TypingCycler,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::dom;

const BANNER: &str = "
%c
╔══════════════════════════════════════════╗
║                                          ║
║      Hey there, curious one!             ║
║                                          ║
║   Looking for the code behind this?      ║
║   I love developers who explore!         ║
║                                          ║
╚══════════════════════════════════════════╝
";
const BANNER_STYLE: &str = "color: #00d4ff; font-size: 12px; font-family: monospace;";

pub fn print_banner() {
    web_sys::console::log_2(&JsValue::from_str(BANNER), &JsValue::from_str(BANNER_STYLE));
}

fn millis(delay: Duration) -> i32 {
    delay.as_millis() as i32
}

/// Observe `targets` and call `on_visible` for each one that intersects.
fn observe<F>(targets: &[Element], options: ObserverOptions, mut on_visible: F) -> Result<(), JsValue>
where
    F: FnMut(Element, &IntersectionObserver) + 'static,
{
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(entry.target(), &observer);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}

pub fn init_typing(document: &Document) -> Result<(), JsValue> {
    let Some(element) = dom::html_by_id(document, "typing-text") else {
        return Ok(());
    };
    schedule_typing(element, TypingCycler::new(DEFAULT_ROLES.iter().copied()), START_DELAY)
}

fn schedule_typing(
    element: HtmlElement,
    mut cycler: TypingCycler,
    delay: Duration,
) -> Result<(), JsValue> {
    dom::set_timeout(millis(delay), move || {
        let Some(step) = cycler.step() else {
            return;
        };
        element.set_text_content(Some(&step.text));
        if let Err(e) = schedule_typing(element, cycler, step.delay) {
            log::error!("typing stopped: {:?}", e);
        }
    })?;
    Ok(())
}

/// Navbar style, hero parallax and smooth anchor scrolling.
pub fn init_scroll(document: &Document) -> Result<(), JsValue> {
    let window = dom::window()?;
    let navbar = document.get_element_by_id("navbar");
    let hero = dom::query_html(document, ".hero-content")?;

    if navbar.is_some() || hero.is_some() {
        let scroll_window = window.clone();
        dom::on(&window, "scroll", move |_: Event| {
            let offset = scroll_window.scroll_y().unwrap_or(0.0);

            if let Some(navbar) = &navbar {
                dom::set_class(navbar, "scrolled", navbar_scrolled(offset));
            }

            let viewport = scroll_window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            if let (Some(hero), Some(parallax)) = (&hero, HeroParallax::at(offset, viewport)) {
                dom::set_style(hero, "transform", &parallax.css_transform());
                dom::set_style(hero, "opacity", &parallax.opacity.to_string());
            }
        })?;
    }

    for anchor in dom::query_all(document, "a[href^=\"#\"]")? {
        let document = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::on(&anchor, "click", move |event: Event| {
            event.prevent_default();
            // A bare "#" is not a valid selector
            if let Ok(Some(target)) = document.query_selector(&href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}

pub fn init_reveal(document: &Document) -> Result<(), JsValue> {
    let targets = dom::query_all(document, REVEAL_SELECTORS)?;
    for target in &targets {
        dom::set_class(target, "reveal", true);
    }
    observe(&targets, REVEAL_OBSERVER, |target, _| {
        dom::set_class(&target, "active", true);
    })
}

pub fn init_project_filters(document: &Document) -> Result<(), JsValue> {
    let buttons = Rc::new(dom::query_all(document, ".filter-btn")?);
    let cards = Rc::new(dom::query_all_html(document, ".project-card")?);

    for button in buttons.iter() {
        let buttons = buttons.clone();
        let cards = cards.clone();
        let this = button.clone();
        dom::on(button, "click", move |_: Event| {
            for other in buttons.iter() {
                dom::set_class(other, "active", false);
            }
            dom::set_class(&this, "active", true);

            let filter = this.get_attribute("data-filter").unwrap_or_default();
            for card in cards.iter() {
                let categories = card.get_attribute("data-category").unwrap_or_default();
                match filter_action(&filter, &categories) {
                    FilterAction::Show => show_card(card),
                    FilterAction::Hide => hide_card(card),
                }
            }
        })?;
    }
    Ok(())
}

fn show_card(card: &HtmlElement) {
    dom::set_class(card, "hidden", false);
    dom::set_style(card, "display", "");
    let card = card.clone();
    let result = dom::set_timeout(millis(SHOW_DELAY), move || {
        dom::set_style(&card, "opacity", "1");
        dom::set_style(&card, "transform", "scale(1)");
    });
    if let Err(e) = result {
        log::warn!("card fade-in not scheduled: {:?}", e);
    }
}

fn hide_card(card: &HtmlElement) {
    dom::set_style(card, "opacity", "0");
    dom::set_style(card, "transform", &format!("scale({})", HIDDEN_SCALE));
    let card = card.clone();
    let result = dom::set_timeout(millis(HIDE_DELAY), move || {
        dom::set_class(&card, "hidden", true);
    });
    if let Err(e) = result {
        log::warn!("card hide not scheduled: {:?}", e);
    }
}

pub fn init_skill_bars(document: &Document) -> Result<(), JsValue> {
    let bars = dom::query_all(document, ".skill-fill")?;
    observe(&bars, SKILL_BAR_OBSERVER, |target, _| {
        let Ok(bar) = target.dyn_into::<HtmlElement>() else {
            return;
        };
        let width = bar.get_attribute("data-width").unwrap_or_default();
        dom::set_style(&bar, "--skill-width", &skill_width(&width));
        dom::set_class(&bar, "animated", true);
    })
}

pub fn init_counters(document: &Document) -> Result<(), JsValue> {
    let counters = dom::query_all(document, ".stat-number")?;
    observe(&counters, COUNTER_OBSERVER, |target, observer| {
        observer.unobserve(&target);
        let raw = target.get_attribute("data-target").unwrap_or_default();
        match parse_target(&raw) {
            Some(value) => run_counter(target, CounterAnimation::new(value)),
            None => log::warn!("counter has no numeric data-target: '{}'", raw),
        }
    })
}

fn run_counter(element: Element, mut animation: CounterAnimation) {
    let frame = animation.step();
    element.set_text_content(Some(&frame.value.to_string()));
    if frame.finished {
        return;
    }
    if let Err(e) = dom::next_frame(move || run_counter(element, animation)) {
        log::warn!("counter stopped: {:?}", e);
    }
}

pub fn init_cursor_trail(document: &Document) -> Result<(), JsValue> {
    let Some(cursor) = dom::query_html(document, ".cursor-trail")? else {
        return Ok(());
    };
    let viewport_width = dom::window()?
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    if !cursor_trail_enabled(viewport_width) {
        return Ok(());
    }

    let follower = Rc::new(Cell::new(CursorFollower::new()));
    {
        let follower = follower.clone();
        dom::on(document, "mousemove", move |event: MouseEvent| {
            let mut state = follower.get();
            state.set_target(Vec2::new(event.client_x() as f32, event.client_y() as f32));
            follower.set(state);
        })?;
    }
    animate_cursor(cursor, follower);
    Ok(())
}

fn animate_cursor(cursor: HtmlElement, follower: Rc<Cell<CursorFollower>>) {
    let mut state = follower.get();
    let position = state.step();
    follower.set(state);

    dom::set_style(&cursor, "left", &format!("{}px", position.x));
    dom::set_style(&cursor, "top", &format!("{}px", position.y));

    if let Err(e) = dom::next_frame(move || animate_cursor(cursor, follower)) {
        log::warn!("cursor trail stopped: {:?}", e);
    }
}

pub fn init_magnetic(document: &Document) -> Result<(), JsValue> {
    for element in dom::query_all_html(document, ".magnetic")? {
        let target = element.clone();
        dom::on(&element, "mousemove", move |event: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let offset = magnetic_offset(
                Vec2::new(event.client_x() as f32, event.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
            );
            dom::set_style(&target, "transform", &css_translate(offset));
        })?;

        let target = element.clone();
        dom::on(&element, "mouseleave", move |_: Event| {
            dom::set_style(&target, "transform", "translate(0, 0)");
        })?;
    }
    Ok(())
}

pub fn init_mobile_menu(document: &Document) -> Result<(), JsValue> {
    let (Some(button), Some(links)) = (
        document.get_element_by_id("mobileMenuBtn"),
        document.query_selector(".nav-links")?,
    ) else {
        return Ok(());
    };

    let open = button.class_list().contains(MobileMenu::BUTTON_CLASS);
    let menu = Rc::new(Cell::new(MobileMenu::new(open)));
    let apply = {
        let button = button.clone();
        let links = links.clone();
        move |menu: MobileMenu| {
            dom::set_class(&button, MobileMenu::BUTTON_CLASS, menu.is_open());
            dom::set_class(&links, MobileMenu::LINKS_CLASS, menu.is_open());
        }
    };

    {
        let menu = menu.clone();
        let apply = apply.clone();
        dom::on(&button, "click", move |_: Event| {
            let mut state = menu.get();
            state.toggle();
            menu.set(state);
            apply(state);
        })?;
    }

    for link in dom::elements(links.query_selector_all("a")?) {
        let menu = menu.clone();
        let apply = apply.clone();
        dom::on(&link, "click", move |_: Event| {
            let mut state = menu.get();
            state.link_clicked();
            menu.set(state);
            apply(state);
        })?;
    }
    Ok(())
}

/// Mark the body `loaded` once the window has finished loading.
pub fn init_loaded(document: &Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    if is_loaded(&document.ready_state()) {
        dom::set_class(&body, LOADED_CLASS, true);
        return Ok(());
    }
    let window = dom::window()?;
    dom::on(&window, "load", move |_: Event| {
        dom::set_class(&body, LOADED_CLASS, true);
    })
}

/// Run every page initializer. A failing one is logged and skipped.
pub fn init_all(document: &Document) {
    let steps: [(&str, fn(&Document) -> Result<(), JsValue>); 10] = [
        ("typing", init_typing),
        ("scroll", init_scroll),
        ("reveal", init_reveal),
        ("project filters", init_project_filters),
        ("skill bars", init_skill_bars),
        ("counters", init_counters),
        ("cursor trail", init_cursor_trail),
        ("magnetic buttons", init_magnetic),
        ("mobile menu", init_mobile_menu),
        ("loaded", init_loaded),
    ];
    for (name, step) in steps {
        if let Err(e) = step(document) {
            log::error!("{} init failed: {:?}", name, e);
        }
    }
}
