//! Response interpretation for the contact endpoint.
//!
//! The endpoint is expected to answer `{ "ok": bool, "message"?: string }`,
//! but nothing enforces that. Any other JSON is read the way a browser
//! script would read it, with missing keys as `undefined`. Interpretation is a lenient fallback chain:
//! acknowledgment, then rejection, then raw body text, then a fixed default.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use serde_json::Value;

use crate::consts::{
    DEFAULT_REJECTED_MESSAGE, DEFAULT_SERVER_ERROR_MESSAGE, DEFAULT_SUCCESS_MESSAGE, NETWORK_ERROR_MESSAGE,
};

/// Outcome of one submission attempt that reached the network layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Server acknowledged the message.
    Success { message: Option<String> },
    /// Server answered but declined the message.
    Rejected { message: Option<String> },
    /// Server answered with something other than an acknowledgment.
    ServerError { raw_text: String },
    /// No response was obtained.
    NetworkError,
}

impl SubmissionResult {
    /// User-visible status line, with defaults filled in.
    #[must_use]
    pub fn status_text(&self) -> &str {
        match self {
            Self::Success { message } => message.as_deref().unwrap_or(DEFAULT_SUCCESS_MESSAGE),
            Self::Rejected { message } => message.as_deref().unwrap_or(DEFAULT_REJECTED_MESSAGE),
            Self::ServerError { raw_text } if raw_text.is_empty() => DEFAULT_SERVER_ERROR_MESSAGE,
            Self::ServerError { raw_text } => raw_text.as_str(),
            Self::NetworkError => NETWORK_ERROR_MESSAGE,
        }
    }

    /// Only an acknowledged message empties the form.
    #[must_use]
    pub fn clears_form(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Structured payload decoded from a response body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ack {
    pub ok: bool,
    pub message: Option<String>,
}

impl Ack {
    /// Decode a body as an acknowledgment.
    ///
    /// Any truthy JSON value counts as a payload. A value that is not an
    /// object has no `ok` and so reads as a rejection without a message.
    /// Returns `None` for non-JSON bodies and for `null`, `false`, `0` and `""`.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return None;
        };
        if !truthy(&value) {
            return None;
        }
        let ok = value.get("ok").is_some_and(truthy);
        let message = value.get("message").filter(|m| truthy(m)).map(js_text);
        Some(Self { ok, message })
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text a browser renders when `value` is assigned to `textContent`.
fn js_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => js_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(js_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

fn js_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[must_use]
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map an HTTP status and body text to a submission result.
#[must_use]
pub fn interpret(status: u16, body: &str) -> SubmissionResult {
    match Ack::from_body(body) {
        Some(Ack { ok: true, message }) if is_success_status(status) => SubmissionResult::Success { message },
        Some(Ack { ok: false, message }) => SubmissionResult::Rejected { message },
        _ => SubmissionResult::ServerError { raw_text: body.to_owned() },
    }
}
