//! Custom cursor: a dot that tracks the pointer and a ring that eases after it.
//! Disabled on touch-only devices.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Window};

use crate::config::PortfolioConfig;
use crate::dom;
use crate::error::Result;

const TOUCH_QUERY: &str = "(hover: none) and (pointer: coarse)";
const INTERACTIVE: &str = "a, button, .project-card, .skill-item, .btn, input, textarea";

/// Smoothed position trailing a target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Follower {
    pub x: f64,
    pub y: f64,
}

impl Follower {
    /// Close `easing` of the remaining gap to `(tx, ty)`.
    pub fn ease_toward(&mut self, tx: f64, ty: f64, easing: f64) {
        self.x += (tx - self.x) * easing;
        self.y += (ty - self.y) * easing;
    }
}

fn px(v: f64) -> String {
    format!("{v}px")
}

fn is_touch_device(win: &Window) -> bool {
    win.match_media(TOUCH_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

pub fn bind(win: &Window, doc: &Document, cfg: &PortfolioConfig) -> Result<()> {
    if is_touch_device(win) {
        log::debug!("touch device, custom cursor off");
        return Ok(());
    }
    let (Some(cursor), Some(follower_el)) = (
        dom::query_html(doc, ".cursor"),
        dom::query_html(doc, ".cursor-follower"),
    ) else {
        return Ok(());
    };

    let pointer = Rc::new(Cell::new((0.0_f64, 0.0_f64)));
    {
        let pointer = Rc::clone(&pointer);
        let cursor = cursor.clone();
        dom::on(doc, "mousemove", move |evt| {
            let Some(evt) = evt.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (x, y) = (evt.client_x() as f64, evt.client_y() as f64);
            pointer.set((x, y));
            dom::set_style(&cursor, "left", &px(x));
            dom::set_style(&cursor, "top", &px(y));
        })?;
    }

    let easing = cfg.follower_easing;
    {
        let ring = follower_el.clone();
        let mut follower = Follower::default();
        dom::animation_loop(move |_| {
            let (tx, ty) = pointer.get();
            follower.ease_toward(tx, ty, easing);
            dom::set_style(&ring, "left", &px(follower.x));
            dom::set_style(&ring, "top", &px(follower.y));
            true
        })?;
    }

    bind_hover(doc, cursor, follower_el)
}

fn bind_hover(doc: &Document, cursor: HtmlElement, follower: HtmlElement) -> Result<()> {
    let pair: Rc<[Element; 2]> = Rc::new([cursor.into(), follower.into()]);
    for el in dom::query_all(doc, INTERACTIVE) {
        for (event, on) in [("mouseenter", true), ("mouseleave", false)] {
            let pair = Rc::clone(&pair);
            dom::on(&el, event, move |_| {
                for c in pair.iter() {
                    dom::set_class(c, "hover", on);
                }
            })?;
        }
    }
    Ok(())
}
