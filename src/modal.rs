//! Project details modal.
//!
//! Each `.details-btn` inside a `.project-card` opens `#projectModal` filled
//! from that card. The modal closes from its close button, a click on the
//! backdrop, or `Escape`. Visibility is carried by `aria-hidden` alone.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

pub const FALLBACK_TITLE: &str = "Project";

pub const DESCRIPTION_SUFFIX: &str = " — Add a longer description, screenshots, and repo links here.";

/// Placeholder links shown until a card carries real repo/demo URLs.
pub const LINKS_MARKUP: &str = concat!(
    r##"<p><a href="#" class="btn small">Open repo</a> "##,
    r##"<a href="#" class="btn small ghost">Live demo</a></p>"##,
);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn aria_hidden(self) -> &'static str {
        match self {
            Self::Shown => "false",
            Self::Hidden => "true",
        }
    }
}

/// Modal content for one project card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDetails {
    pub title: String,
    pub description: String,
}

impl ProjectDetails {
    /// Title precedence: the card's `data-title`, then its `.project-title`
    /// text, then [`FALLBACK_TITLE`]. Empty values fall through.
    #[must_use]
    pub fn from_card(data_title: Option<&str>, title_text: Option<&str>, excerpt: Option<&str>) -> Self {
        let title = data_title
            .filter(|t| !t.is_empty())
            .or(title_text.filter(|t| !t.is_empty()))
            .unwrap_or(FALLBACK_TITLE)
            .to_owned();
        let description = format!("{}{DESCRIPTION_SUFFIX}", excerpt.unwrap_or_default());
        Self { title, description }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::wire;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, EventTarget};

    use super::{LINKS_MARKUP, ProjectDetails, Visibility};
    use crate::consts::{
        DETAILS_BUTTON_SELECTOR, MODAL_CLOSE_SELECTOR, MODAL_DESC_ID, MODAL_LINKS_ID, MODAL_TITLE_ID,
        PROJECT_CARD_SELECTOR, PROJECT_EXCERPT_SELECTOR, PROJECT_MODAL_ID, PROJECT_TITLE_SELECTOR,
    };
    use crate::dom;

    struct Slots {
        modal: Element,
        title: Option<Element>,
        desc: Option<Element>,
        links: Option<Element>,
    }

    impl Slots {
        fn show(&self, details: &ProjectDetails) {
            if let Some(title) = &self.title {
                title.set_text_content(Some(&details.title));
            }
            if let Some(desc) = &self.desc {
                desc.set_text_content(Some(&details.description));
            }
            if let Some(links) = &self.links {
                links.set_inner_html(LINKS_MARKUP);
            }
            set_visibility(&self.modal, Visibility::Shown);
        }
    }

    fn set_visibility(modal: &Element, visibility: Visibility) {
        dom::set_attr(modal, "aria-hidden", visibility.aria_hidden());
    }

    fn text_in(card: &Element, selector: &str) -> Option<String> {
        dom::query_in(card, selector).and_then(|el| el.text_content())
    }

    fn card_for(target: Option<EventTarget>) -> Option<Element> {
        let el = target?.dyn_into::<Element>().ok()?;
        match el.closest(PROJECT_CARD_SELECTOR) {
            Ok(card) => card,
            Err(err) => {
                log::warn!("find project card failed: {}", dom::js_error_text(&err));
                None
            }
        }
    }

    /// Wire the details buttons and close triggers. Does nothing when the
    /// page has no `#projectModal`.
    pub fn wire(document: &Document) {
        let Some(modal) = dom::by_id(document, PROJECT_MODAL_ID) else {
            return;
        };
        let slots = std::rc::Rc::new(Slots {
            modal: modal.clone(),
            title: dom::by_id(document, MODAL_TITLE_ID),
            desc: dom::by_id(document, MODAL_DESC_ID),
            links: dom::by_id(document, MODAL_LINKS_ID),
        });

        for button in dom::query_all(document, DETAILS_BUTTON_SELECTOR) {
            let slots = std::rc::Rc::clone(&slots);
            dom::on(&button, "click", move |event| {
                let Some(card) = card_for(event.target()) else {
                    return;
                };
                let details = ProjectDetails::from_card(
                    card.get_attribute("data-title").as_deref(),
                    text_in(&card, PROJECT_TITLE_SELECTOR).as_deref(),
                    text_in(&card, PROJECT_EXCERPT_SELECTOR).as_deref(),
                );
                slots.show(&details);
            });
        }

        if let Some(close) = dom::query(document, MODAL_CLOSE_SELECTOR) {
            let modal = modal.clone();
            dom::on(&close, "click", move |_| set_visibility(&modal, Visibility::Hidden));
        }

        {
            let backdrop = modal.clone();
            dom::on(&modal, "click", move |event| {
                let target = event.target();
                if target.as_ref().and_then(|t| t.dyn_ref::<Element>()) == Some(&backdrop) {
                    set_visibility(&backdrop, Visibility::Hidden);
                }
            });
        }

        dom::on(document, "keydown", move |event| {
            if dom::key_of(&event).as_deref() == Some("Escape") {
                set_visibility(&modal, Visibility::Hidden);
            }
        });
    }
}
