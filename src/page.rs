//! Page-level touches: fade the body in once everything has loaded.

use web_sys::{Document, Window};

use crate::config::PortfolioConfig;
use crate::dom;
use crate::error::Result;

pub fn bind(win: &Window, doc: &Document, cfg: &PortfolioConfig) -> Result<()> {
    let Some(body) = doc.body() else {
        return Ok(());
    };
    let w = win.clone();
    let delay = cfg.fade_in_delay_ms;
    dom::on(win, "load", move |_| {
        dom::set_style(&body, "opacity", "0");
        let fading = body.clone();
        let shown = dom::set_timeout(&w, delay, move || {
            dom::set_style(&fading, "transition", "opacity 0.5s ease");
            dom::set_style(&fading, "opacity", "1");
        });
        if let Err(err) = shown {
            // Never leave the page invisible.
            log::warn!("fade-in timer failed: {err}");
            dom::set_style(&body, "opacity", "1");
        }
    })?;
    log::info!("Welcome to Ayush Uttam's Portfolio!");
    Ok(())
}
