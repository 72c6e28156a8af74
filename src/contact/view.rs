//! The contact form as seen by the submission workflow.
//!
//! `ContactView` and `SubmitControl` are the only DOM surface the workflow
//! touches. [`DomContactView`] backs them with the real form in the browser;
//! tests substitute in-memory fakes.

use std::cell::Cell;

use super::request::ContactFields;

/// The form's submit button.
pub trait SubmitControl {
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
}

pub trait ContactView {
    /// Current, untrimmed field values.
    fn read_fields(&self) -> ContactFields;

    /// Replace the status line.
    fn set_status(&self, text: &str);

    /// Return every field to its initial value.
    fn reset_form(&self);

    /// Set while a submission is in flight.
    fn busy_flag(&self) -> &Cell<bool>;

    fn submit_control(&self) -> Option<&dyn SubmitControl>;
}

#[cfg(feature = "hydrate")]
pub use dom_view::{DomContactView, DomSubmitButton};

#[cfg(feature = "hydrate")]
mod dom_view {
    use std::cell::Cell;

    use web_sys::{Element, FormData, HtmlButtonElement, HtmlFormElement};

    use super::{ContactView, SubmitControl};
    use crate::contact::request::ContactFields;
    use crate::dom::js_error_text;

    pub struct DomSubmitButton(pub HtmlButtonElement);

    impl SubmitControl for DomSubmitButton {
        fn is_disabled(&self) -> bool {
            self.0.disabled()
        }

        fn set_disabled(&self, disabled: bool) {
            self.0.set_disabled(disabled);
        }

        fn label(&self) -> String {
            self.0.text_content().unwrap_or_default()
        }

        fn set_label(&self, label: &str) {
            self.0.set_text_content(Some(label));
        }
    }

    pub struct DomContactView {
        form: HtmlFormElement,
        status: Element,
        button: Option<DomSubmitButton>,
        busy: Cell<bool>,
    }

    impl DomContactView {
        #[must_use]
        pub fn new(form: HtmlFormElement, status: Element, button: Option<HtmlButtonElement>) -> Self {
            Self { form, status, button: button.map(DomSubmitButton), busy: Cell::new(false) }
        }

        fn field(data: &FormData, name: &str) -> String {
            data.get(name).as_string().unwrap_or_default()
        }
    }

    impl ContactView for DomContactView {
        fn read_fields(&self) -> ContactFields {
            match FormData::new_with_form(&self.form) {
                Ok(data) => ContactFields {
                    name: Self::field(&data, "name"),
                    email: Self::field(&data, "email"),
                    message: Self::field(&data, "message"),
                },
                Err(err) => {
                    log::warn!("read contact form failed: {}", js_error_text(&err));
                    ContactFields::default()
                }
            }
        }

        fn set_status(&self, text: &str) {
            self.status.set_text_content(Some(text));
        }

        fn reset_form(&self) {
            self.form.reset();
        }

        fn busy_flag(&self) -> &Cell<bool> {
            &self.busy
        }

        fn submit_control(&self) -> Option<&dyn SubmitControl> {
            self.button.as_ref().map(|b| b as &dyn SubmitControl)
        }
    }
}
