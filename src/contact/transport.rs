//! Outbound request to the contact endpoint.
//!
//! Client-side (hydrate): a multipart `fetch` via `gloo-net`, raced against a
//! `gloo-timers` timeout that aborts the request when it fires.
//! Native builds have no browser networking and always fail with
//! [`TransportError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::request::SubmissionRequest;
use crate::config::SiteConfig;

/// Failure to obtain any response from the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request body or abort controller could not be created.
    #[error("request build failed: {0}")]
    Build(String),

    /// The fetch itself failed (DNS, connection, CORS, abort).
    #[error("request failed: {0}")]
    Request(String),

    /// No response arrived before the deadline.
    #[error("request timed out after {ms} ms")]
    Timeout { ms: u32 },

    #[error("browser networking unavailable")]
    Unavailable,
}

/// Status and body text of a response. The body is read exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub trait Transport {
    /// Send one submission and wait for the endpoint's answer.
    fn post(&self, request: &SubmissionRequest) -> impl Future<Output = Result<RawResponse, TransportError>>;
}

/// `fetch`-backed transport posting to a relative endpoint with same-origin
/// credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTransport {
    endpoint: String,
    timeout_ms: u32,
}

impl FetchTransport {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self { endpoint: config.contact_endpoint.clone(), timeout_ms: config.submit_timeout_ms }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }
}

impl Transport for FetchTransport {
    async fn post(&self, request: &SubmissionRequest) -> Result<RawResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{self, Either};

            use crate::dom::js_error_text;

            let form = request.to_form_data().map_err(|e| TransportError::Build(js_error_text(&e)))?;
            let controller = web_sys::AbortController::new().map_err(|e| TransportError::Build(js_error_text(&e)))?;
            let signal = controller.signal();

            let exchange = async {
                let resp = gloo_net::http::Request::post(&self.endpoint)
                    .credentials(web_sys::RequestCredentials::SameOrigin)
                    .abort_signal(Some(&signal))
                    .body(form)
                    .map_err(|e| TransportError::Build(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| TransportError::Request(e.to_string()))?;
                let status = resp.status();
                let body = match resp.text().await {
                    Ok(text) => text,
                    Err(err) => {
                        log::warn!("contact response body unreadable: {err}");
                        String::new()
                    }
                };
                Ok::<_, TransportError>(RawResponse { status, body })
            };
            let deadline = gloo_timers::future::TimeoutFuture::new(self.timeout_ms);

            match future::select(Box::pin(exchange), Box::pin(deadline)).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => {
                    controller.abort();
                    Err(TransportError::Timeout { ms: self.timeout_ms })
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}
