//! Typewriter text effect.
//!
//! Cycles through a fixed list of phrases, typing each one character by
//! character, holding it, deleting it, then moving on to the next phrase. The
//! cycle never ends on its own; a host stops it through the handle returned by
//! [`Runner::start`].
//!
//! The state machine itself is pure: [`advance`] takes a [`TypingState`] and
//! returns the next one, so the whole cycle can be exercised without a browser.
//! Timing lives in [`runner`], which re-arms a single timer after every tick.

mod runner;

pub use runner::{Runner, Scheduler, TypewriterHandle};

use crate::error::TypewriterError;

pub const DEFAULT_TYPING_SPEED_MS: u32 = 100;
pub const DEFAULT_DELETING_SPEED_MS: u32 = 50;
pub const DEFAULT_PAUSE_MS: u32 = 2000;
pub const DEFAULT_NEXT_DELAY_MS: u32 = 500;

/// Per-tick delays. All values are milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct TypewriterConfig {
    /// Delay after each typed character.
    pub typing_speed_ms: u32,
    /// Delay after each deleted character.
    pub deleting_speed_ms: u32,
    /// Hold time once a phrase is fully typed.
    pub pause_ms: u32,
    /// Gap between a fully deleted phrase and the next one.
    pub next_delay_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: DEFAULT_TYPING_SPEED_MS,
            deleting_speed_ms: DEFAULT_DELETING_SPEED_MS,
            pause_ms: DEFAULT_PAUSE_MS,
            next_delay_ms: DEFAULT_NEXT_DELAY_MS,
        }
    }
}

// --- Phrases ----------------------------------------------------------------

/// Ordered, read-only list of phrases. Never empty, and no phrase is empty.
///
/// Lengths are counted in `char`s so every prefix is valid UTF-8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Vec<String>,
    lengths: Vec<usize>,
}

impl PhraseList {
    pub fn new<I, S>(phrases: I) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypewriterError::EmptyPhraseList);
        }
        if let Some(index) = phrases.iter().position(|p| p.is_empty()) {
            return Err(TypewriterError::EmptyPhrase { index });
        }
        let lengths = phrases.iter().map(|p| p.chars().count()).collect();
        Ok(Self { phrases, lengths })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always false: construction rejects an empty list.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Length of phrase `index` in characters.
    pub fn char_len(&self, index: usize) -> usize {
        self.lengths.get(index).copied().unwrap_or(0)
    }

    /// First `count` characters of phrase `index`.
    pub fn prefix(&self, index: usize, count: usize) -> &str {
        let Some(phrase) = self.phrases.get(index) else {
            return "";
        };
        match phrase.char_indices().nth(count) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }
}

// --- State machine ----------------------------------------------------------

/// Which part of the cycle the last tick left the engine in.
///
/// The two pausing phases are not idle ticks: they only mark that the delay
/// scheduled by that tick is the long one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausingAfterTyped,
    Deleting,
    PausingAfterDeleted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingState {
    /// Active phrase, always `< PhraseList::len()`.
    pub index: usize,
    /// Characters of the active phrase currently shown.
    pub count: usize,
    pub deleting: bool,
    /// Delay the last tick asked for before the next one. 0 before the first tick.
    pub delay_ms: u32,
    pub phase: Phase,
}

impl TypingState {
    pub const fn new() -> Self {
        Self {
            index: 0,
            count: 0,
            deleting: false,
            delay_ms: 0,
            phase: Phase::Typing,
        }
    }

    /// Text a display should show for this state.
    ///
    /// The index only moves once the count is back to zero, so the active
    /// phrase is always the right one to slice.
    pub fn text<'a>(&self, phrases: &'a PhraseList) -> &'a str {
        phrases.prefix(self.index, self.count)
    }
}

impl Default for TypingState {
    fn default() -> Self {
        Self::new()
    }
}

/// One tick of the cycle.
pub fn advance(phrases: &PhraseList, config: &TypewriterConfig, state: TypingState) -> TypingState {
    let len = phrases.char_len(state.index);
    let mut next = state;

    if next.deleting {
        next.count = next.count.saturating_sub(1);
        next.delay_ms = config.deleting_speed_ms;
        next.phase = Phase::Deleting;
    } else {
        next.count = (next.count + 1).min(len);
        next.delay_ms = config.typing_speed_ms;
        next.phase = Phase::Typing;
    }

    if !next.deleting && next.count == len {
        next.deleting = true;
        next.delay_ms = config.pause_ms;
        next.phase = Phase::PausingAfterTyped;
    } else if next.deleting && next.count == 0 {
        next.deleting = false;
        next.index = (next.index + 1) % phrases.len();
        next.delay_ms = config.next_delay_ms;
        next.phase = Phase::PausingAfterDeleted;
    }
    next
}

// --- Engine -----------------------------------------------------------------

/// Write-only text surface the engine renders into.
pub trait DisplayTarget {
    fn set_text(&mut self, text: &str);
}

impl DisplayTarget for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Phrase list, delays, state and display bundled together. Has no notion of
/// time: each [`tick`](Typewriter::tick) returns the delay the caller should
/// wait before ticking again.
pub struct Typewriter<D> {
    phrases: PhraseList,
    config: TypewriterConfig,
    state: TypingState,
    display: D,
}

impl<D: DisplayTarget> Typewriter<D> {
    pub fn new(phrases: PhraseList, display: D, config: TypewriterConfig) -> Self {
        Self {
            phrases,
            config,
            state: TypingState::new(),
            display,
        }
    }

    pub fn tick(&mut self) -> u32 {
        self.state = advance(&self.phrases, &self.config, self.state);
        self.display.set_text(self.state.text(&self.phrases));
        self.state.delay_ms
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
