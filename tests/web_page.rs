// Browser tests for the page entry points. Run with `wasm-pack test --headless --firefox`.
//
// Page features bind once per module instance, so the lifecycle runs as one
// ordered test in its own binary.
#![cfg(target_arch = "wasm32")]

use portfolio_fx::theme::{self, Theme};
use portfolio_fx::{
    PortfolioConfig, PortfolioError, TypewriterError, dom, start_portfolio, start_with_config,
    stop_typewriter, typewriter_running,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn append(doc: &Document, tag: &str, id: &str) -> HtmlElement {
    let el: HtmlElement = doc.create_element(tag).unwrap().dyn_into().unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn page_start_lifecycle() {
    let win = dom::window().unwrap();
    let doc = dom::document().unwrap();
    win.local_storage().unwrap().unwrap().remove_item("theme").unwrap();

    let toggle = append(&doc, "button", "theme-toggle");
    toggle.append_child(&doc.create_element("i").unwrap()).unwrap();
    let hamburger = append(&doc, "div", "hamburger");
    append(&doc, "div", "nav-menu");

    // Bad phrases fail before any feature binds, even without a typing element.
    let bad = PortfolioConfig {
        phrases: Vec::new(),
        ..PortfolioConfig::default()
    };
    assert!(matches!(
        start_with_config(bad),
        Err(PortfolioError::Typewriter(TypewriterError::EmptyPhraseList))
    ));
    hamburger.click();
    assert!(!dom::has_class(&hamburger, "active"));
    assert!(!typewriter_running());

    // No `.typing-text`: only the typewriter is skipped.
    start_portfolio().unwrap();
    assert!(!typewriter_running());
    assert_eq!(theme::current(&doc), Theme::Dark);
    hamburger.click();
    assert!(dom::has_class(&hamburger, "active"));
    hamburger.click();
    assert!(!dom::has_class(&hamburger, "active"));

    // A repeat start only brings up the typewriter; handlers stay single.
    let typing = append(&doc, "span", "typing");
    typing.set_class_name("typing-text");
    start_portfolio().unwrap();
    assert!(typewriter_running());
    assert_eq!(typing.text_content().as_deref(), Some("F"));

    toggle.click();
    assert!(dom::has_class(&doc.body().unwrap(), theme::LIGHT_CLASS));
    assert_eq!(theme::read_preference(&win), Theme::Light);
    hamburger.click();
    assert!(dom::has_class(&hamburger, "active"));

    // A third start replaces the runner and still leaves the toggle working.
    start_portfolio().unwrap();
    assert!(typewriter_running());
    toggle.click();
    assert_eq!(theme::current(&doc), Theme::Dark);

    stop_typewriter();
    assert!(!typewriter_running());
    assert_eq!(typing.text_content().as_deref(), Some("F"));
    stop_typewriter();
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen_test]
fn json_config_without_phrases_is_rejected() {
    assert!(portfolio_fx::start_portfolio_with_config(r#"{"phrases":[]}"#).is_err());
    assert!(portfolio_fx::start_portfolio_with_config("not json").is_err());
}
