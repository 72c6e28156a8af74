//! Main navigation: mobile menu toggle and active-link highlighting.
//!
//! The menu's open state lives in the toggle's `aria-expanded` attribute;
//! the nav's inline `display` mirrors it. Highlighting compares the last
//! path segment of the current URL with each link's `href`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class carried by the link for the current page.
pub const ACTIVE_CLASS: &str = "active-nav";

const HOME_PAGE: &str = "home.html";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    /// Read the state from an `aria-expanded` value. Anything but `"true"`
    /// counts as closed.
    #[must_use]
    pub fn from_aria(expanded: Option<&str>) -> Self {
        if expanded == Some("true") { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        match self {
            Self::Open => "true",
            Self::Closed => "false",
        }
    }

    /// Inline `display` for the nav. Closed clears the override so the
    /// stylesheet decides.
    #[must_use]
    pub fn display(self) -> &'static str {
        match self {
            Self::Open => "flex",
            Self::Closed => "",
        }
    }
}

#[must_use]
pub fn is_mobile(viewport_width: f64, breakpoint_px: u32) -> bool {
    viewport_width <= f64::from(breakpoint_px)
}

/// Page name for a `location.pathname`, with home aliases folded together.
#[must_use]
pub fn normalize_page(pathname: &str) -> String {
    let last = pathname.rsplit('/').next().unwrap_or_default().to_lowercase();
    match last.as_str() {
        "" | "index.html" | "home.html" | "home" => HOME_PAGE.to_owned(),
        _ => last,
    }
}

/// Page name a link points at, with home aliases folded together.
#[must_use]
pub fn normalize_href(href: &str) -> String {
    let lower = href.to_lowercase();
    match lower.as_str() {
        "" | "index.html" | "home.html" => HOME_PAGE.to_owned(),
        _ => lower,
    }
}

/// Whether a link should be marked active, or `None` to leave a link with
/// no `href` untouched.
#[must_use]
pub fn link_state(href: Option<&str>, current_page: &str) -> Option<bool> {
    let href = href.filter(|h| !h.is_empty())?;
    Some(normalize_href(href) == current_page)
}

#[cfg(feature = "hydrate")]
pub use browser::{close_on_escape, highlight, wire_menu};

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element};

    use super::{ACTIVE_CLASS, MenuState, is_mobile, link_state, normalize_page};
    use crate::config::SiteConfig;
    use crate::consts::{MAIN_NAV_ID, MENU_TOGGLE_ID, NAV_LINK_SELECTOR};
    use crate::dom;

    fn apply(state: MenuState, toggle: Option<&Element>, nav: &Element) {
        dom::set_style(nav, "display", state.display());
        if let Some(toggle) = toggle {
            dom::set_attr(toggle, "aria-expanded", state.aria_expanded());
        }
    }

    fn on_mobile(breakpoint_px: u32) -> bool {
        dom::inner_width().is_some_and(|w| is_mobile(w, breakpoint_px))
    }

    /// Toggle the nav from `#menuToggle`, and collapse it again when a nav
    /// link is followed on a small screen.
    pub fn wire_menu(document: &Document, config: &SiteConfig) {
        let (Some(toggle), Some(nav)) = (dom::by_id(document, MENU_TOGGLE_ID), dom::by_id(document, MAIN_NAV_ID))
        else {
            log::debug!("no #{MENU_TOGGLE_ID}/#{MAIN_NAV_ID}; menu toggle not wired");
            return;
        };

        {
            let toggle_el = toggle.clone();
            let nav = nav.clone();
            dom::on(&toggle, "click", move |_| {
                let next = MenuState::from_aria(toggle_el.get_attribute("aria-expanded").as_deref()).toggled();
                apply(next, Some(&toggle_el), &nav);
            });
        }

        let breakpoint = config.mobile_breakpoint_px;
        for link in dom::query_all(document, NAV_LINK_SELECTOR) {
            let toggle = toggle.clone();
            let nav = nav.clone();
            dom::on(&link, "click", move |_| {
                if on_mobile(breakpoint) {
                    apply(MenuState::Closed, Some(&toggle), &nav);
                }
            });
        }
    }

    /// Collapse the mobile nav on `Escape`.
    pub fn close_on_escape(document: &Document, config: &SiteConfig) {
        let Some(nav) = dom::by_id(document, MAIN_NAV_ID) else {
            return;
        };
        let toggle = dom::by_id(document, MENU_TOGGLE_ID);
        let breakpoint = config.mobile_breakpoint_px;
        dom::on(document, "keydown", move |event| {
            if dom::key_of(&event).as_deref() == Some("Escape") && on_mobile(breakpoint) {
                apply(MenuState::Closed, toggle.as_ref(), &nav);
            }
        });
    }

    /// Mark the nav link for the current page with [`ACTIVE_CLASS`].
    pub fn highlight(document: &Document) {
        let pathname = match document.location().map(|l| l.pathname()) {
            Some(Ok(path)) => path,
            Some(Err(err)) => {
                log::warn!("read pathname failed: {}", dom::js_error_text(&err));
                return;
            }
            None => return,
        };
        let current = normalize_page(&pathname);

        for link in dom::query_all(document, NAV_LINK_SELECTOR) {
            let classes = link.class_list();
            let outcome = match link_state(link.get_attribute("href").as_deref(), &current) {
                Some(true) => classes.add_1(ACTIVE_CLASS),
                Some(false) => classes.remove_1(ACTIVE_CLASS),
                None => Ok(()),
            };
            if let Err(err) = outcome {
                log::warn!("update nav class failed: {}", dom::js_error_text(&err));
            }
        }
    }
}
