//! Effects triggered when elements scroll into view: fade/slide reveal,
//! statistic counters and skill bars.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::PortfolioConfig;
use crate::dom;
use crate::error::Result;

const REVEALED_CLASS: &str = "aos-animate";
const COUNTED_CLASS: &str = "animated";

// --- Counter ramp -----------------------------------------------------------

/// Linear count-up from 0 to `target`, one step per animation frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterRamp {
    target: i64,
    increment: f64,
    current: f64,
}

impl CounterRamp {
    /// `duration_ms / frame_ms` frames to reach the target (at least one).
    pub fn new(target: i64, duration_ms: f64, frame_ms: f64) -> Self {
        let frames = (duration_ms / frame_ms).max(1.0);
        let frames = if frames.is_finite() { frames } else { 1.0 };
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
        }
    }

    /// Advance one frame. Returns the value to show and whether more frames
    /// follow; the last frame always shows the exact target.
    pub fn step(&mut self) -> (i64, bool) {
        self.current += self.increment;
        if self.current < self.target as f64 {
            (self.current.floor() as i64, true)
        } else {
            (self.target, false)
        }
    }
}

/// Leading integer of a `data-target` value ("150+" reads as 150). Anything
/// without leading digits counts as 0.
pub fn parse_target(raw: &str) -> i64 {
    let raw = raw.trim_start();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

/// CSS width for a skill bar's `data-width`.
pub fn bar_width(data_width: &str) -> String {
    format!("{}%", data_width.trim())
}

// --- Observers --------------------------------------------------------------

/// Observe `elements` and call `on_visible` for each one that intersects.
fn observe(
    elements: &[Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: impl FnMut(&Element) + 'static,
) -> Result<()> {
    if elements.is_empty() {
        return Ok(());
    }
    let closure = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                on_visible(&entry.target());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
    closure.forget();
    for el in elements {
        observer.observe(el);
    }
    Ok(())
}

fn run_counter(el: Element, mut ramp: CounterRamp) -> Result<()> {
    dom::animation_loop(move |_| {
        let (value, more) = ramp.step();
        el.set_text_content(Some(&value.to_string()));
        more
    })
}

pub fn bind(doc: &Document, cfg: &PortfolioConfig) -> Result<()> {
    observe(
        &dom::query_all(doc, "[data-aos]"),
        0.1,
        Some("0px 0px -100px 0px"),
        |el| dom::set_class(el, REVEALED_CLASS, true),
    )?;

    let duration = cfg.counter_duration_ms;
    let frame = cfg.counter_frame_ms;
    observe(&dom::query_all(doc, ".stat-number"), 0.5, None, move |el| {
        if dom::has_class(el, COUNTED_CLASS) {
            return;
        }
        dom::set_class(el, COUNTED_CLASS, true);
        let target = parse_target(&el.get_attribute("data-target").unwrap_or_default());
        if let Err(err) = run_counter(el.clone(), CounterRamp::new(target, duration, frame)) {
            log::warn!("counter not started: {err}");
        }
    })?;

    observe(&dom::query_all(doc, ".skill-progress"), 0.5, None, |el| {
        let (Some(width), Some(bar)) = (el.get_attribute("data-width"), el.dyn_ref::<HtmlElement>())
        else {
            return;
        };
        dom::set_style(bar, "width", &bar_width(&width));
    })
}
