//! Contact form input and its validated, trimmed request form.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

/// Raw field values as read from the form, untrimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A blank required field. Every variant renders the same user message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill all fields.")]
    MissingName,
    #[error("Please fill all fields.")]
    MissingEmail,
    #[error("Please fill all fields.")]
    MissingMessage,
}

impl ValidationError {
    /// Form field name of the first blank field.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::MissingEmail => "email",
            Self::MissingMessage => "message",
        }
    }
}

/// One submission attempt's payload. All fields are trimmed and non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionRequest {
    name: String,
    email: String,
    message: String,
}

impl TryFrom<ContactFields> for SubmissionRequest {
    type Error = ValidationError;

    fn try_from(fields: ContactFields) -> Result<Self, Self::Error> {
        let name = required(&fields.name, ValidationError::MissingName)?;
        let email = required(&fields.email, ValidationError::MissingEmail)?;
        let message = required(&fields.message, ValidationError::MissingMessage)?;
        Ok(Self { name, email, message })
    }
}

fn required(raw: &str, missing: ValidationError) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { Err(missing) } else { Ok(trimmed.to_owned()) }
}

impl SubmissionRequest {
    /// Multipart field names and values, in form order.
    #[must_use]
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [("name", &self.name), ("email", &self.email), ("message", &self.message)]
    }

    /// Encode as browser `FormData` for a multipart POST.
    ///
    /// # Errors
    ///
    /// Returns the thrown JS value if `FormData` cannot be created or filled.
    #[cfg(feature = "hydrate")]
    pub fn to_form_data(&self) -> Result<web_sys::FormData, wasm_bindgen::JsValue> {
        let form = web_sys::FormData::new()?;
        for (key, value) in self.form_fields() {
            form.append_with_str(key, value)?;
        }
        Ok(form)
    }
}
