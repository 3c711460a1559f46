//! Thin helpers over `web_sys` shared by the page features.
//!
//! Listeners are leaked with `Closure::forget`: they live as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::error::{PortfolioError, Result};
use crate::typewriter::{DisplayTarget, Scheduler};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(PortfolioError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(PortfolioError::NoDocument)
}

// --- Lookup -----------------------------------------------------------------

/// First match for `selector`, or None (a bad selector is logged, not raised).
pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    match doc.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            None
        }
    }
}

pub fn query_html(doc: &Document, selector: &str) -> Option<HtmlElement> {
    query(doc, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let list = match doc.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all_html(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    query_all(doc, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

// --- Events -----------------------------------------------------------------

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// --- Classes & styles -------------------------------------------------------

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn toggle_class(el: &Element, class: &str) -> bool {
    el.class_list().toggle(class).unwrap_or(false)
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::debug!("style {property} rejected: {err:?}");
    }
}

// --- Scrolling --------------------------------------------------------------

pub fn scroll_y(win: &Window) -> f64 {
    win.scroll_y().unwrap_or(0.0)
}

pub fn inner_width(win: &Window) -> f64 {
    win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn inner_height(win: &Window) -> f64 {
    win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn smooth_scroll_to(win: &Window, top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}

// --- Timers -----------------------------------------------------------------

/// `setTimeout` with a one-shot Rust callback.
pub fn set_timeout(win: &Window, delay_ms: u32, task: impl FnOnce() + 'static) -> Result<i32> {
    let callback = Closure::once_into_js(task);
    let id = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        clamp_delay(delay_ms),
    )?;
    Ok(id)
}

pub fn set_interval(win: &Window, period_ms: u32, task: impl FnMut() + 'static) -> Result<i32> {
    let closure = Closure::wrap(Box::new(task) as Box<dyn FnMut()>);
    let id = win.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        clamp_delay(period_ms),
    )?;
    closure.forget();
    Ok(id)
}

fn clamp_delay(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Run `frame` on every animation frame until it returns false.
pub fn animation_loop(mut frame: impl FnMut(f64) -> bool + 'static) -> Result<()> {
    let win = window()?;
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if !frame(ts) {
            // Drop our handle so the closure is freed once it returns.
            let _ = f.borrow_mut().take();
            return;
        }
        if let (Some(w), Some(cb)) = (web_sys::window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// Log every failed bind as a warning and keep going; returns how many failed.
pub fn log_failures<'a>(results: impl IntoIterator<Item = (&'a str, Result<()>)>) -> usize {
    let mut failed = 0;
    for (name, result) in results {
        if let Err(err) = result {
            log::warn!("{name} disabled: {err}");
            failed += 1;
        }
    }
    failed
}

/// `setTimeout`-backed [`Scheduler`] for the typewriter.
pub struct WindowTimers {
    win: Window,
}

impl WindowTimers {
    pub fn new(win: Window) -> Self {
        Self { win }
    }
}

impl Scheduler for WindowTimers {
    type Token = i32;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<i32> {
        match set_timeout(&self.win, delay_ms, task) {
            Ok(id) => Some(id),
            Err(err) => {
                log::error!("could not arm timer: {err}");
                None
            }
        }
    }

    fn cancel(&self, token: i32) {
        self.win.clear_timeout_with_handle(token);
    }
}

/// Element whose `textContent` the typewriter overwrites.
pub struct ElementText(pub Element);

impl DisplayTarget for ElementText {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}
