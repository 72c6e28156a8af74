//! One contact form submission, from validation to restored controls.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use super::busy::BusyGuard;
use super::request::{SubmissionRequest, ValidationError};
use super::response::{SubmissionResult, interpret};
use super::transport::Transport;
use super::view::ContactView;
use crate::consts::SENDING_MESSAGE;

/// A submission that never reached the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRefused {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Another submission from the same form has not finished yet.
    #[error("a submission is already in flight")]
    InFlight,
}

/// Run one submission against `view`, posting through `transport`.
///
/// Every outcome that reached the network ends up as status text on the
/// view; the result is returned for callers that want more than that. The
/// busy state is held only around the request and is released before the
/// final status is rendered.
///
/// # Errors
///
/// [`SubmitRefused::Invalid`] if a field is blank (the validation message is
/// rendered first), or [`SubmitRefused::InFlight`] if the form is already
/// busy. Neither issues a request.
pub async fn submit<V, T>(view: &V, transport: &T) -> Result<SubmissionResult, SubmitRefused>
where
    V: ContactView + ?Sized,
    T: Transport + ?Sized,
{
    if view.busy_flag().get() {
        log::debug!("contact submit ignored: already in flight");
        return Err(SubmitRefused::InFlight);
    }
    view.set_status("");

    let request = match SubmissionRequest::try_from(view.read_fields()) {
        Ok(request) => request,
        Err(err) => {
            log::debug!("contact submit blocked: {} is blank", err.field());
            view.set_status(&err.to_string());
            return Err(err.into());
        }
    };

    let guard = BusyGuard::acquire(view.busy_flag(), view.submit_control()).ok_or(SubmitRefused::InFlight)?;
    view.set_status(SENDING_MESSAGE);

    let result = match transport.post(&request).await {
        Ok(resp) => interpret(resp.status, &resp.body),
        Err(err) => {
            log::error!("contact submit failed: {err}");
            SubmissionResult::NetworkError
        }
    };
    if result.clears_form() {
        view.reset_form();
    }
    drop(guard);

    view.set_status(result.status_text());
    Ok(result)
}
