//! Scoped "submitting" state.
//!
//! A [`BusyGuard`] is the only way to mark the form busy. Acquiring it
//! disables the submit control; dropping it re-enables the control and puts
//! the original label back, so every exit path (including unwinding) releases
//! it exactly once.

#[cfg(test)]
#[path = "busy_test.rs"]
mod busy_test;

use std::cell::Cell;

use super::view::SubmitControl;
use crate::consts::{DEFAULT_SUBMIT_LABEL, SENDING_MESSAGE};

pub struct BusyGuard<'a> {
    flag: &'a Cell<bool>,
    control: Option<&'a dyn SubmitControl>,
    original_label: String,
}

impl<'a> BusyGuard<'a> {
    /// Mark the form busy. Returns `None` if it already is.
    #[must_use]
    pub fn acquire(flag: &'a Cell<bool>, control: Option<&'a dyn SubmitControl>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        let original_label = control.map(|c| c.label()).unwrap_or_default();
        if let Some(control) = control {
            control.set_disabled(true);
            control.set_label(SENDING_MESSAGE);
        }
        Some(Self { flag, control, original_label })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if let Some(control) = self.control {
            control.set_disabled(false);
            let label = if self.original_label.is_empty() { DEFAULT_SUBMIT_LABEL } else { self.original_label.as_str() };
            control.set_label(label);
        }
        self.flag.set(false);
    }
}
