//! Toolbase Core
//!
//! DOM-free interaction state for the toolbase front end: CSRF decisions,
//! fragment queries, row selection, debounce, ordering links, popup/mask
//! bookkeeping, the message notifier and server response decoding.

pub mod actions;
pub mod config;
pub mod csrf;
pub mod debounce;
pub mod detail;
pub mod error;
pub mod inline;
pub mod model_defaults;
pub mod notifier;
pub mod object_type;
pub mod ordering;
pub mod outcome;
pub mod popup;
pub mod query;
pub mod request;
pub mod selection;

pub use error::{Error, Result};
pub use object_type::ObjectType;

/// Build a selector for an element whose id may start with a digit.
///
/// Server-rendered rows use numeric primary keys as ids, which `#123` cannot
/// address, so the id goes into an attribute selector instead.
pub fn id_selector(tag: &str, id: &str, class: Option<&str>) -> String {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    match class {
        Some(class) => format!("{tag}.{class}[id=\"{escaped}\"]"),
        None => format!("{tag}[id=\"{escaped}\"]"),
    }
}

/// Escape text for insertion into HTML.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod selector_tests {
    use super::*;

    #[test]
    fn test_id_selector_numeric_id() {
        assert_eq!(id_selector("tr", "42", Some("object_line")), r#"tr.object_line[id="42"]"#);
        assert_eq!(id_selector("tr", "details-7", None), r#"tr[id="details-7"]"#);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"Bor" & co</b>"#), "&lt;b&gt;&quot;Bor&quot; &amp; co&lt;/b&gt;");
    }
}
