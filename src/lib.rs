//! Portfolio FX core crate.
//!
//! Client-side behaviour for a static portfolio page, compiled to WASM. The
//! page calls `start_portfolio()` once the module is loaded; every feature
//! binds to whatever elements it finds and silently skips the ones that are
//! missing. The typewriter is the only stateful piece and can also be started
//! on its own through `start_typewriter()`.

use std::cell::{Cell, RefCell};

use wasm_bindgen::prelude::*;

pub mod config;
pub mod contact;
pub mod cursor;
pub mod dom;
pub mod error;
pub mod logging;
pub mod nav;
pub mod page;
pub mod particles;
pub mod reveal;
pub mod rng;
pub mod scroll;
pub mod theme;
pub mod typewriter;

pub use config::PortfolioConfig;
pub use error::{PortfolioError, TypewriterError};
pub use typewriter::{
    DisplayTarget, Phase, PhraseList, Runner, Scheduler, Typewriter, TypewriterConfig,
    TypewriterHandle, TypingState, advance,
};

use dom::{ElementText, WindowTimers};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

type PageRunner = Runner<WindowTimers, ElementText>;

thread_local! {
    // Typewriter started by `start_portfolio`, kept so it can be stopped later.
    static PAGE_TYPEWRITER: RefCell<Option<PageRunner>> = const { RefCell::new(None) };
    // Set once the page features have their listeners; later starts only
    // restart the typewriter.
    static FEATURES_BOUND: Cell<bool> = const { Cell::new(false) };
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_portfolio() -> Result<(), JsValue> {
    start_with_config(PortfolioConfig::default()).map_err(Into::into)
}

/// Like `start_portfolio`, with a JSON object overriding any config fields.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_portfolio_with_config(json: &str) -> Result<(), JsValue> {
    let cfg = PortfolioConfig::from_json(json)?;
    start_with_config(cfg).map_err(Into::into)
}

/// Start a standalone typewriter on the first element matching `selector`.
#[wasm_bindgen]
pub fn start_typewriter(selector: &str, phrases: Vec<String>) -> Result<TypewriterHandle, JsValue> {
    let win = dom::window()?;
    let doc = dom::document()?;
    let el = dom::query(&doc, selector)
        .ok_or_else(|| PortfolioError::MissingElement(selector.to_string()))?;
    let runner = Runner::start(
        phrases,
        ElementText(el),
        TypewriterConfig::default(),
        WindowTimers::new(win),
    )?;
    Ok(TypewriterHandle::new(runner))
}

/// Stop the page typewriter started by `start_portfolio`, if any.
#[wasm_bindgen]
pub fn stop_typewriter() {
    PAGE_TYPEWRITER.with(|slot| {
        if let Some(runner) = slot.borrow_mut().take() {
            runner.stop();
        }
    });
}

/// Whether the page typewriter started by `start_portfolio` is ticking.
#[wasm_bindgen]
pub fn typewriter_running() -> bool {
    PAGE_TYPEWRITER.with(|slot| slot.borrow().as_ref().is_some_and(|runner| runner.is_running()))
}

/// Rust-side entry behind `start_portfolio`.
///
/// The first successful call binds every page feature. Later calls only
/// replace the page typewriter, stopping the previous one.
pub fn start_with_config(cfg: PortfolioConfig) -> Result<(), PortfolioError> {
    let win = dom::window()?;
    let doc = win.document().ok_or(PortfolioError::NoDocument)?;

    // Bad phrases are an integration bug: fail before anything is bound,
    // whether or not the page has a typing element.
    let phrases = PhraseList::new(cfg.phrases.iter().cloned())?;
    match dom::query(&doc, &cfg.typing_selector) {
        Some(el) => {
            let runner = Runner::with_phrases(
                phrases,
                ElementText(el),
                cfg.typewriter,
                WindowTimers::new(win.clone()),
            );
            PAGE_TYPEWRITER.with(|slot| {
                if let Some(previous) = slot.borrow_mut().replace(runner) {
                    previous.stop();
                }
            });
        }
        None => log::debug!("no {} on page, typewriter off", cfg.typing_selector),
    }

    if FEATURES_BOUND.with(|bound| bound.replace(true)) {
        log::debug!("page features already bound");
        return Ok(());
    }

    // Each feature binds independently; one failing leaves the rest working.
    dom::log_failures([
        ("theme", theme::bind(&win, &doc)),
        ("nav", nav::bind(&win, &doc, &cfg)),
        ("cursor", cursor::bind(&win, &doc, &cfg)),
        ("reveal", reveal::bind(&doc, &cfg)),
        ("scroll", scroll::bind(&win, &doc, &cfg)),
        ("contact", contact::bind(&win, &doc, &cfg)),
        ("particles", particles::bind(&win, &doc, &cfg)),
        ("page", page::bind(&win, &doc, &cfg)),
    ]);
    Ok(())
}
