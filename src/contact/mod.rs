//! Contact form submission.
//!
//! DESIGN
//! ======
//! The workflow in [`workflow::submit`] only talks to a [`view::ContactView`]
//! and a [`transport::Transport`], so the whole validate → send → interpret →
//! restore cycle runs in native unit tests. [`wire`] connects it to the real
//! form in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Nothing escapes a submission. Validation, rejections, unreadable
//! responses and network failures all end as status text; network failures
//! are also logged for whoever is watching the console.

pub mod busy;
pub mod request;
pub mod response;
pub mod transport;
pub mod view;
pub mod workflow;


pub use request::{ContactFields, SubmissionRequest, ValidationError};
pub use response::{SubmissionResult, interpret};
pub use workflow::{SubmitRefused, submit};

/// Intercept the contact form's native submit and run the workflow instead.
///
/// Does nothing when the page has no `#contactForm`.
#[cfg(feature = "hydrate")]
pub fn wire(document: &web_sys::Document, config: &crate::config::SiteConfig) {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{HtmlButtonElement, HtmlFormElement};

    use crate::consts::{CONTACT_FORM_ID, FORM_STATUS_ID, SUBMIT_BUTTON_SELECTOR};
    use crate::dom;
    use transport::FetchTransport;
    use view::DomContactView;

    let Some(form) = dom::by_id(document, CONTACT_FORM_ID).and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        log::debug!("no #{CONTACT_FORM_ID}; contact form not wired");
        return;
    };
    let button = dom::query_in(&form, SUBMIT_BUTTON_SELECTOR).and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let status = dom::by_id(document, FORM_STATUS_ID);
    let target = form.clone();

    let view = status.map(|status| Rc::new(DomContactView::new(form, status, button)));
    let transport = Rc::new(FetchTransport::new(config));
    log::debug!("contact form posts to {} ({} ms timeout)", transport.endpoint(), transport.timeout_ms());

    dom::on(&target, "submit", move |event| {
        event.prevent_default();
        let Some(view) = view.clone() else {
            return;
        };
        let transport = Rc::clone(&transport);
        wasm_bindgen_futures::spawn_local(async move {
            match submit(&*view, &*transport).await {
                Ok(result) => log::debug!("contact submit finished: {result:?}"),
                Err(refused) => log::debug!("contact submit refused: {refused}"),
            }
        });
    });
}
