//! Scroll-position driven effects: back-to-top button, parallax orbs and
//! smooth scrolling for in-page anchors.

use std::rc::Rc;

use web_sys::{Document, Element, Window};

use crate::config::PortfolioConfig;
use crate::dom;
use crate::error::Result;

/// Selector for an in-page `href`, or None when it doesn't point anywhere.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

/// Where to scroll so a section clears the fixed header.
pub fn target_top(section_top: f64, header_offset: f64) -> f64 {
    section_top - header_offset
}

/// Vertical shift for the `index`-th orb, or None once the hero is out of view.
pub fn parallax_offset(scrolled: f64, viewport_height: f64, index: usize, step: f64) -> Option<f64> {
    (scrolled < viewport_height).then(|| scrolled * (index as f64 + 1.0) * step)
}

/// Smooth-scroll to the element an anchor `href` names. Returns false when
/// there is nothing to scroll to.
pub fn scroll_to_anchor(win: &Window, doc: &Document, href: &str, header_offset: f64) -> bool {
    let Some(target) = anchor_selector(href).and_then(|sel| dom::query_html(doc, sel)) else {
        return false;
    };
    dom::smooth_scroll_to(win, target_top(target.offset_top() as f64, header_offset));
    true
}

/// Binds each effect on its own; a failure is logged and the rest still bind.
pub fn bind(win: &Window, doc: &Document, cfg: &PortfolioConfig) -> Result<()> {
    dom::log_failures([
        ("back-to-top", bind_back_to_top(win, doc, cfg)),
        ("parallax", bind_parallax(win, doc, cfg)),
        ("anchors", bind_anchors(win, doc, cfg)),
    ]);
    Ok(())
}

fn bind_back_to_top(win: &Window, doc: &Document, cfg: &PortfolioConfig) -> Result<()> {
    let Some(button) = doc.get_element_by_id("back-to-top") else {
        log::debug!("no #back-to-top");
        return Ok(());
    };
    let threshold = cfg.back_to_top_after;
    {
        let button = button.clone();
        let w = win.clone();
        dom::on(win, "scroll", move |_| {
            dom::set_class(&button, "visible", dom::scroll_y(&w) > threshold);
        })?;
    }
    let w = win.clone();
    dom::on(&button, "click", move |_| dom::smooth_scroll_to(&w, 0.0))
}

fn bind_parallax(win: &Window, doc: &Document, cfg: &PortfolioConfig) -> Result<()> {
    let orbs = dom::query_all_html(doc, ".gradient-orb");
    if orbs.is_empty() {
        return Ok(());
    }
    let step = cfg.parallax_step;
    let w = win.clone();
    dom::on(win, "scroll", move |_| {
        let scrolled = w.page_y_offset().unwrap_or(0.0);
        let viewport = dom::inner_height(&w);
        for (index, orb) in orbs.iter().enumerate() {
            if let Some(dy) = parallax_offset(scrolled, viewport, index, step) {
                dom::set_style(orb, "transform", &format!("translateY({dy}px)"));
            }
        }
    })
}

// Nav links handle their own clicks (they also close the mobile menu).
fn bind_anchors(win: &Window, doc: &Document, cfg: &PortfolioConfig) -> Result<()> {
    let anchors: Vec<Element> = dom::query_all(doc, "a[href^=\"#\"]:not(.nav-link)");
    let ctx = Rc::new((win.clone(), doc.clone()));
    for anchor in anchors {
        let ctx = Rc::clone(&ctx);
        let link = anchor.clone();
        let offset = cfg.scroll_offset;
        dom::on(&anchor, "click", move |evt| {
            evt.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let (win, doc) = &*ctx;
            scroll_to_anchor(win, doc, &href, offset);
        })?;
    }
    Ok(())
}
