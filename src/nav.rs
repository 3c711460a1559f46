//! Navigation bar: scrolled styling, mobile menu, smooth-scrolling links and
//! highlighting of the link for the section currently in view.

use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::PortfolioConfig;
use crate::dom;
use crate::error::Result;
use crate::scroll;

/// Id of the last section whose top (minus `offset`) has been scrolled past.
///
/// `sections` is in document order as `(id, offset_top)`.
pub fn active_section<'a>(scroll_y: f64, sections: &'a [(String, f64)], offset: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - offset)
        .last()
        .map(|(id, _)| id.as_str())
}

/// Whether a nav link `href` points at section `id`.
pub fn link_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// Whether a link is highlighted for the `current` section. Before any
/// section is reached only a bare `#` link counts as active.
pub fn link_is_active(href: &str, current: Option<&str>) -> bool {
    link_targets(href, current.unwrap_or(""))
}

struct Nav {
    win: Window,
    doc: Document,
    hamburger: Option<Element>,
    menu: Option<Element>,
    links: Vec<Element>,
    sections: Vec<HtmlElement>,
}

impl Nav {
    fn close_menu(&self) {
        for el in self.hamburger.iter().chain(self.menu.iter()) {
            dom::set_class(el, "active", false);
        }
    }

    fn highlight(&self, offset: f64) {
        let tops: Vec<(String, f64)> = self
            .sections
            .iter()
            .map(|s| (s.id(), s.offset_top() as f64))
            .collect();
        let current = active_section(dom::scroll_y(&self.win), &tops, offset);
        for link in &self.links {
            let href = link.get_attribute("href").unwrap_or_default();
            dom::set_class(link, "active", link_is_active(&href, current));
        }
    }
}

pub fn bind(win: &Window, doc: &Document, cfg: &PortfolioConfig) -> Result<()> {
    let nav = Rc::new(Nav {
        win: win.clone(),
        doc: doc.clone(),
        hamburger: doc.get_element_by_id("hamburger"),
        menu: doc.get_element_by_id("nav-menu"),
        links: dom::query_all(doc, ".nav-link"),
        sections: dom::query_all_html(doc, "section[id]"),
    });

    // Scrolled style
    if let Some(navbar) = dom::query(doc, ".navbar") {
        let threshold = cfg.navbar_scrolled_after;
        let w = win.clone();
        dom::on(win, "scroll", move |_| {
            dom::set_class(&navbar, "scrolled", dom::scroll_y(&w) > threshold);
        })?;
    }

    // Mobile menu
    if let Some(hamburger) = nav.hamburger.clone() {
        let nav = Rc::clone(&nav);
        dom::on(&hamburger, "click", move |_| {
            for el in nav.hamburger.iter().chain(nav.menu.iter()) {
                dom::toggle_class(el, "active");
            }
        })?;
    }

    // Links close the menu and scroll below the fixed header
    for link in &nav.links {
        let nav = Rc::clone(&nav);
        let this = link.clone();
        let offset = cfg.scroll_offset;
        dom::on(link, "click", move |evt| {
            evt.prevent_default();
            nav.close_menu();
            let href = this.get_attribute("href").unwrap_or_default();
            scroll::scroll_to_anchor(&nav.win, &nav.doc, &href, offset);
        })?;
    }

    // Active link
    let offset = cfg.active_section_offset;
    dom::on(win, "scroll", move |_| nav.highlight(offset))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(String, f64)> {
        vec![
            ("home".into(), 0.0),
            ("about".into(), 700.0),
            ("projects".into(), 1500.0),
        ]
    }

    #[test]
    fn active_section_uses_lookahead_offset() {
        let s = sections();
        assert_eq!(active_section(0.0, &s, 200.0), Some("home"));
        assert_eq!(active_section(499.0, &s, 200.0), Some("home"));
        assert_eq!(active_section(500.0, &s, 200.0), Some("about"));
        assert_eq!(active_section(5000.0, &s, 200.0), Some("projects"));
    }

    #[test]
    fn no_section_reached_yet() {
        let s = vec![("about".to_string(), 900.0)];
        assert_eq!(active_section(100.0, &s, 200.0), None);
    }

    #[test]
    fn link_targets_matches_hash_only() {
        assert!(link_targets("#about", "about"));
        assert!(!link_targets("about", "about"));
        assert!(!link_targets("#about-me", "about"));
    }

    #[test]
    fn bare_hash_link_is_active_before_any_section() {
        assert!(link_is_active("#", None));
        assert!(!link_is_active("#about", None));
        assert!(!link_is_active("#", Some("about")));
        assert!(link_is_active("#about", Some("about")));
    }

    #[test]
    fn no_sections_clears_every_section_link() {
        let current = active_section(1200.0, &[], 200.0);
        assert_eq!(current, None);
        assert!(!link_is_active("#home", current));
        assert!(!link_is_active("#projects", current));
    }
}
