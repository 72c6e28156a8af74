//! Thin `web-sys` helpers shared by the page behaviors.
//!
//! Lookups return `Option`s so a page that lacks an element simply skips the
//! behavior that needs it. DOM calls that can throw are logged, not
//! propagated.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

/// Render a thrown JS value for logs.
pub fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

/// First element in the document matching `selector`.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector}: {}", js_error_text(&err));
            None
        }
    }
}

/// First element under `root` matching `selector`.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector}: {}", js_error_text(&err));
            None
        }
    }
}

/// All elements in the document matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("bad selector {selector}: {}", js_error_text(&err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::warn!("set {name} failed: {}", js_error_text(&err));
    }
}

/// Set an inline `style` property; non-HTML elements are left alone.
pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = html.style().set_property(property, value) {
        log::warn!("set style {property} failed: {}", js_error_text(&err));
    }
}

pub fn inner_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let registered = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    match registered {
        Ok(()) => closure.forget(),
        Err(err) => log::warn!("listen {event} failed: {}", js_error_text(&err)),
    }
}

/// Key name of a keyboard event, or `None` for other event types.
pub fn key_of(event: &Event) -> Option<String> {
    event.dyn_ref::<web_sys::KeyboardEvent>().map(web_sys::KeyboardEvent::key)
}
