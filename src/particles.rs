//! Decorative particles drifting up through the hero section.
//!
//! Only runs on wide viewports. Each particle is a short-lived 2px dot that
//! removes itself once its animation has finished.

use web_sys::{Document, Element, Window};

use crate::config::PortfolioConfig;
use crate::dom;
use crate::error::Result;
use crate::rng;

/// Randomized parameters for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    /// Horizontal position in percent of the hero width, `[0, 100)`.
    pub left_pct: f64,
    /// Lifetime in seconds, `[2, 5)`.
    pub duration_s: f64,
}

impl ParticleSpec {
    /// Build from two unit samples in `[0, 1)`.
    pub fn from_samples(a: f64, b: f64) -> Self {
        Self {
            left_pct: a * 100.0,
            duration_s: b * 3.0 + 2.0,
        }
    }

    pub fn random() -> Self {
        Self::from_samples(rng::unit(), rng::unit())
    }

    pub fn lifetime_ms(&self) -> u32 {
        (self.duration_s * 1000.0).round() as u32
    }

    pub fn style(&self) -> String {
        format!(
            "position:absolute; width:2px; height:2px; background:var(--neon-cyan); \
             border-radius:50%; opacity:0.5; left:{}%; top:100%; pointer-events:none; \
             animation:floatUp {}s linear forwards;",
            self.left_pct, self.duration_s
        )
    }
}

/// `floatUp` keyframes with a horizontal drift (px) picked once per page.
pub fn keyframes(drift_px: f64) -> String {
    format!(
        "@keyframes floatUp {{ to {{ transform: translateY(-100vh) translateX({drift_px}px); opacity: 0; }} }}"
    )
}

pub fn enabled_for(viewport_width: f64, min_width: f64) -> bool {
    viewport_width > min_width
}

fn inject_keyframes(doc: &Document) -> Result<()> {
    let Some(head) = doc.head() else {
        return Ok(());
    };
    let style = doc.create_element("style")?;
    style.set_text_content(Some(&keyframes(rng::range(-100.0, 100.0))));
    head.append_child(&style)?;
    Ok(())
}

fn spawn(win: &Window, doc: &Document, hero: &Element) -> Result<()> {
    let spec = ParticleSpec::random();
    let particle = doc.create_element("div")?;
    particle.set_attribute("style", &spec.style())?;
    hero.append_child(&particle)?;
    dom::set_timeout(win, spec.lifetime_ms(), move || particle.remove())?;
    Ok(())
}

pub fn bind(win: &Window, doc: &Document, cfg: &PortfolioConfig) -> Result<()> {
    if !enabled_for(dom::inner_width(win), cfg.particle_min_viewport) {
        log::debug!("narrow viewport, particles off");
        return Ok(());
    }
    let Some(hero) = dom::query(doc, ".hero") else {
        return Ok(());
    };
    inject_keyframes(doc)?;
    let w = win.clone();
    let d = doc.clone();
    dom::set_interval(win, cfg.particle_interval_ms, move || {
        if let Err(err) = spawn(&w, &d, &hero) {
            log::debug!("particle skipped: {err}");
        }
    })?;
    Ok(())
}
