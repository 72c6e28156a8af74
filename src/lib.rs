//! # folio
//!
//! Client-side behavior for a static portfolio site, compiled to
//! WebAssembly. One module per page behavior:
//!
//! | Module | Role |
//! |--------|------|
//! | [`contact`] | Contact form submission: validate, post, interpret, restore |
//! | [`nav`] | Mobile menu toggle and active-link highlighting |
//! | [`typing`] | Typewriter headline on the home page |
//! | [`modal`] | Project details modal |
//! | [`boot`] | Registers everything once per page load |
//! | [`config`] | Optional per-page overrides from a JSON block |
//! | [`consts`] | Messages, element hooks and defaults |
//!
//! Browser glue is compiled only with the `hydrate` feature. Without it the
//! crate builds natively and every decision the page makes is unit-testable.

pub mod boot;
pub mod config;
pub mod consts;
pub mod contact;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod modal;
pub mod nav;
pub mod typing;

/// WASM entry point: install logging and start the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    boot::run();
}
