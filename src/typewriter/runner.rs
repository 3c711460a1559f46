//! Timer-driven loop around a [`Typewriter`].
//!
//! Exactly one tick is pending at any time: each tick re-arms the scheduler
//! only after it has finished updating state and display. Stopping clears the
//! pending timer and flags the loop so a callback already queued by the host
//! becomes a no-op.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::{DisplayTarget, PhraseList, Typewriter, TypewriterConfig, TypingState};
use crate::dom::{ElementText, WindowTimers};
use crate::error::TypewriterError;

/// One-shot delayed task source. The browser implementation wraps
/// `setTimeout`; tests drive a manual queue.
pub trait Scheduler: 'static {
    type Token: 'static;

    /// Arms `task` to run after `delay_ms`. `None` means the host refused the
    /// timer and `task` will never run.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<Self::Token>;
    fn cancel(&self, token: Self::Token);
}

struct Shared<S: Scheduler, D> {
    engine: RefCell<Typewriter<D>>,
    scheduler: S,
    pending: RefCell<Option<S::Token>>,
    cancelled: Cell<bool>,
}

/// A running typewriter. Keeps ticking until [`stop`](Runner::stop) is
/// called; dropping the runner does not stop the pending timer.
pub struct Runner<S: Scheduler, D> {
    shared: Rc<Shared<S, D>>,
}

impl<S: Scheduler, D: DisplayTarget + 'static> Runner<S, D> {
    /// Validates the phrases, renders the first tick right away and arms the
    /// timer for the second. Nothing is scheduled when validation fails.
    pub fn start<I, T>(
        phrases: I,
        display: D,
        config: TypewriterConfig,
        scheduler: S,
    ) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Ok(Self::with_phrases(PhraseList::new(phrases)?, display, config, scheduler))
    }

    /// Same as [`start`](Runner::start) with an already validated list.
    pub fn with_phrases(
        phrases: PhraseList,
        display: D,
        config: TypewriterConfig,
        scheduler: S,
    ) -> Self {
        log::debug!("typewriter starting with {} phrases", phrases.len());
        let shared = Rc::new(Shared {
            engine: RefCell::new(Typewriter::new(phrases, display, config)),
            scheduler,
            pending: RefCell::new(None),
            cancelled: Cell::new(false),
        });
        run_tick(&shared);
        Self { shared }
    }

    /// Cancels the pending tick. Idempotent.
    ///
    /// The scheduler owns the task it was handed. With [`WindowTimers`] that
    /// task is a `Closure::once_into_js` which is only freed when it runs, so
    /// a cleared timer keeps its reference to the runner state alive: each
    /// stopped runner stays allocated for the life of the page.
    pub fn stop(&self) {
        if self.shared.cancelled.replace(true) {
            return;
        }
        let pending = self.shared.pending.borrow_mut().take();
        if let Some(token) = pending {
            self.shared.scheduler.cancel(token);
        }
        log::debug!("typewriter stopped");
    }

    /// False once stopped, or once the scheduler refused to arm a tick.
    pub fn is_running(&self) -> bool {
        !self.shared.cancelled.get()
    }

    pub fn state(&self) -> TypingState {
        self.shared.engine.borrow().state()
    }

    pub fn with_display<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        f(self.shared.engine.borrow().display())
    }
}

fn run_tick<S: Scheduler, D: DisplayTarget + 'static>(shared: &Rc<Shared<S, D>>) {
    if shared.cancelled.get() {
        return;
    }
    shared.pending.borrow_mut().take();
    let delay = shared.engine.borrow_mut().tick();
    let next = Rc::clone(shared);
    let token = shared
        .scheduler
        .schedule(delay, Box::new(move || run_tick(&next)));
    if token.is_none() {
        log::warn!("typewriter halted: next tick could not be scheduled");
        shared.cancelled.set(true);
    }
    *shared.pending.borrow_mut() = token;
}

// --- WASM handle -------------------------------------------------------------

/// JS-facing handle for a typewriter bound to a page element.
#[wasm_bindgen]
pub struct TypewriterHandle {
    runner: Runner<WindowTimers, ElementText>,
}

impl TypewriterHandle {
    pub(crate) fn new(runner: Runner<WindowTimers, ElementText>) -> Self {
        Self { runner }
    }
}

#[wasm_bindgen]
impl TypewriterHandle {
    pub fn stop(&self) {
        self.runner.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    /// False once stopped, or once the scheduler refused to arm a tick.
    pub fn is_running(&self) -> bool {
        self.runner.is_running()
    }

    #[wasm_bindgen(js_name = phraseIndex)]
    pub fn phrase_index(&self) -> usize {
        self.runner.state().index
    }
}
