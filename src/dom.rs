//! DOM Helpers
//!
//! Thin wrappers over `web_sys` used by the region event handlers. Server
//! fragments are plain HTML, so handlers find their targets by selector.

use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, HtmlInputElement};

use toolbase_core::csrf::PageOrigin;
use toolbase_core::popup::{centering_margins, Margins};

pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

pub fn document() -> Option<web_sys::Document> {
    window().and_then(|w| w.document())
}

/// `document.cookie`, empty when unavailable.
pub fn cookies() -> String {
    document()
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}

pub fn page_origin() -> PageOrigin {
    let location = window().map(|w| w.location());
    let protocol = location
        .as_ref()
        .and_then(|l| l.protocol().ok())
        .unwrap_or_default();
    let host = location
        .as_ref()
        .and_then(|l| l.host().ok())
        .unwrap_or_default();
    PageOrigin::new(protocol, host)
}

pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn navigate(url: &str) {
    if let Some(w) = window() {
        if let Err(e) = w.location().set_href(url) {
            tracing::error!(url, ?e, "navigation failed");
        }
    }
}

pub fn print_page() {
    if let Some(w) = window() {
        let _ = w.print();
    }
}

/// Nearest ancestor of the event target (inclusive) matching `selector`.
pub fn closest(target: Option<EventTarget>, selector: &str) -> Option<Element> {
    target?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_document(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn as_input(el: &Element) -> Option<&HtmlInputElement> {
    el.dyn_ref::<HtmlInputElement>()
}

pub fn as_html(el: &Element) -> Option<&HtmlElement> {
    el.dyn_ref::<HtmlElement>()
}

pub fn set_input_value(root: &Element, selector: &str, value: &str) {
    match query(root, selector).as_ref().and_then(as_input) {
        Some(input) => input.set_value(value),
        None => tracing::debug!(selector, "input not found"),
    }
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Target of an in-page link without the leading `#`.
pub fn href_fragment(el: &Element) -> String {
    el.get_attribute("href")
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Center a fixed-position box around its 50%/50% anchor.
pub fn center(el: &HtmlElement, padding: f64) -> Margins {
    let margins = centering_margins(
        f64::from(el.offset_width()),
        f64::from(el.offset_height()),
        padding,
    );
    let style = el.style();
    let _ = style.set_property("margin-top", &format!("{}px", margins.top));
    let _ = style.set_property("margin-left", &format!("{}px", margins.left));
    margins
}

/// Text content of the element with `id`, used for embedded JSON.
pub fn text_of(id: &str) -> Option<String> {
    document()?.get_element_by_id(id)?.text_content()
}
