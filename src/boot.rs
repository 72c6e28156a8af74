//! Page startup.
//!
//! Everything the site does is registered here, once per page load, against
//! an explicit `Document`. Each behavior checks for its own elements and
//! quietly stays off on pages that lack them.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use crate::config::SiteConfig;

/// Config from the page's config block, falling back to defaults when the
/// block is malformed.
#[must_use]
pub fn resolve_config(raw: Option<&str>) -> SiteConfig {
    match SiteConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using default site config");
            SiteConfig::default()
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{init, run};

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::Document;

    use super::resolve_config;
    use crate::config::SiteConfig;
    use crate::consts::{CONFIG_ID, YEAR_ID};
    use crate::{contact, dom, modal, nav, typing};

    /// Start once the document is parsed.
    pub fn run() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("no document; site behaviors disabled");
            return;
        };
        if document.ready_state() == "loading" {
            let doc = document.clone();
            dom::on(&document, "DOMContentLoaded", move |_| start(&doc));
        } else {
            start(&document);
        }
    }

    fn start(document: &Document) {
        let raw = dom::by_id(document, CONFIG_ID).and_then(|el| el.text_content());
        let config = resolve_config(raw.as_deref());
        init(document, &config);
    }

    /// Register every page behavior against `document`.
    pub fn init(document: &Document, config: &SiteConfig) {
        stamp_year(document);
        nav::wire_menu(document, config);
        nav::highlight(document);
        typing::start(document, &config.typing);
        modal::wire(document);
        contact::wire(document, config);
        nav::close_on_escape(document, config);
        smooth_scroll(document);
        log::info!("site behaviors ready");
    }

    fn stamp_year(document: &Document) {
        if let Some(el) = dom::by_id(document, YEAR_ID) {
            let year = js_sys::Date::new_0().get_full_year();
            el.set_text_content(Some(&year.to_string()));
        }
    }

    fn smooth_scroll(document: &Document) {
        if let Some(root) = document.document_element() {
            dom::set_style(&root, "scroll-behavior", "smooth");
        }
    }
}
