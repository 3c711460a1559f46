//! Light/dark theme toggle.
//!
//! The choice is persisted under `localStorage["theme"]` as `"light"` or
//! `"dark"`; anything else (or nothing) means dark. Light mode is expressed as
//! the `light-theme` class on `<body>`, and the toggle's `<i>` icon shows a sun
//! in light mode and a moon in dark mode. Storage is best effort: a browser
//! that refuses it still gets a working toggle for the session.

use web_sys::{Document, Element, Window};

use crate::dom;
use crate::error::Result;

pub const STORAGE_KEY: &str = "theme";
pub const LIGHT_CLASS: &str = "light-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Stored value to theme; unknown or missing values fall back to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Font Awesome icon class shown on the toggle.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "fa-sun",
            Theme::Dark => "fa-moon",
        }
    }
}

pub fn read_preference(win: &Window) -> Theme {
    let stored = win
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

fn store_preference(win: &Window, theme: Theme) {
    match win.local_storage() {
        Ok(Some(storage)) => {
            if let Err(err) = storage.set_item(STORAGE_KEY, theme.as_str()) {
                log::warn!("could not persist theme: {err:?}");
            }
        }
        _ => log::warn!("localStorage unavailable, theme not persisted"),
    }
}

/// Theme currently shown by the page.
pub fn current(doc: &Document) -> Theme {
    match doc.body() {
        Some(body) if dom::has_class(&body, LIGHT_CLASS) => Theme::Light,
        _ => Theme::Dark,
    }
}

pub fn apply(doc: &Document, icon: Option<&Element>, theme: Theme) {
    if let Some(body) = doc.body() {
        dom::set_class(&body, LIGHT_CLASS, theme == Theme::Light);
    }
    if let Some(icon) = icon {
        dom::set_class(icon, theme.toggled().icon(), false);
        dom::set_class(icon, theme.icon(), true);
    }
}

/// Flip the page theme and persist the new one.
pub fn toggle(win: &Window, doc: &Document, icon: Option<&Element>) -> Theme {
    let next = current(doc).toggled();
    apply(doc, icon, next);
    store_preference(win, next);
    log::debug!("theme -> {}", next.as_str());
    next
}

pub fn bind(win: &Window, doc: &Document) -> Result<()> {
    let toggle_btn = doc.get_element_by_id("theme-toggle");
    let icon = toggle_btn.as_ref().and_then(|b| b.query_selector("i").ok().flatten());

    apply(doc, icon.as_ref(), read_preference(win));

    let Some(btn) = toggle_btn else {
        log::debug!("no #theme-toggle, theme is fixed");
        return Ok(());
    };
    let win = win.clone();
    let doc = doc.clone();
    dom::on(&btn, "click", move |_| {
        toggle(&win, &doc, icon.as_ref());
    })
}
