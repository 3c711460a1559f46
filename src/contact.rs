//! Contact form that hands the message to the visitor's mail client.
//!
//! Nothing is sent from the page itself: submit builds a `mailto:` link and
//! navigates to it, then shows a short confirmation on the submit button.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlElement, HtmlFormElement, Window};

use crate::config::PortfolioConfig;
use crate::dom;
use crate::error::Result;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
const SENT_LABEL: &str = "<span>Message Sent!</span> <i class=\"fas fa-check\"></i>";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// All three fields must be present and non-empty.
    pub fn from_fields(name: Option<String>, email: Option<String>, message: Option<String>) -> Option<Self> {
        let filled = |v: Option<String>| v.filter(|s| !s.is_empty());
        Some(Self {
            name: filled(name)?,
            email: filled(email)?,
            message: filled(message)?,
        })
    }

    /// `mailto:` link for `recipient`. Only the body is run through `encode`
    /// (the page uses `encodeURIComponent`); the separator before the sender's
    /// address is already escaped.
    pub fn mailto_href(&self, recipient: &str, encode: impl Fn(&str) -> String) -> String {
        format!(
            "mailto:{recipient}?subject=Contact from {}&body={}%0D%0A%0D%0AFrom: {}",
            self.name,
            encode(&self.message),
            self.email
        )
    }
}

fn encode_uri_component(s: &str) -> String {
    js_sys::encode_uri_component(s).into()
}

fn read_form(form: &HtmlFormElement) -> Result<Option<ContactMessage>> {
    let data = FormData::new_with_form(form)?;
    let field = |key: &str| data.get(key).as_string();
    Ok(ContactMessage::from_fields(
        field("name"),
        field("email"),
        field("message"),
    ))
}

fn show_sent(win: &Window, form: &HtmlFormElement, button: Option<Element>, reset_ms: u32) {
    let Some(button) = button else {
        form.reset();
        return;
    };
    let original = button.inner_html();
    button.set_inner_html(SENT_LABEL);
    let styled = button.dyn_ref::<HtmlElement>().cloned();
    if let Some(b) = &styled {
        dom::set_style(b, "background", "var(--gradient-2)");
    }
    let form = form.clone();
    let restore = move || {
        button.set_inner_html(&original);
        if let Some(b) = &styled {
            dom::set_style(b, "background", "");
        }
        form.reset();
    };
    if let Err(err) = dom::set_timeout(win, reset_ms, restore) {
        log::warn!("submit feedback will not reset: {err}");
    }
}

fn submit(win: &Window, form: &HtmlFormElement, cfg: &PortfolioConfig) -> Result<()> {
    let Some(msg) = read_form(form)? else {
        win.alert_with_message(MISSING_FIELDS_MESSAGE)?;
        return Ok(());
    };
    let href = msg.mailto_href(&cfg.contact_recipient, encode_uri_component);
    win.location().set_href(&href)?;
    log::info!("contact form handed to mail client");
    show_sent(
        win,
        form,
        form.query_selector(".submit-btn").ok().flatten(),
        cfg.contact_feedback_ms,
    );
    Ok(())
}

pub fn bind(win: &Window, doc: &Document, cfg: &PortfolioConfig) -> Result<()> {
    let Some(form) = doc
        .get_element_by_id("contact-form")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        log::debug!("no #contact-form");
        return Ok(());
    };
    let win = win.clone();
    let cfg = cfg.clone();
    let this = form.clone();
    dom::on(&form, "submit", move |evt| {
        evt.prevent_default();
        if let Err(err) = submit(&win, &this, &cfg) {
            log::error!("contact form: {err}");
        }
    })
}
