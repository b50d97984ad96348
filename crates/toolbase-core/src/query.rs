//! Fragment Queries
//!
//! Query strings and form bodies sent to the fragment endpoints.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone in `application/x-www-form-urlencoded` values.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'*');

/// Ordered list of key/value parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.push((key.to_string(), value.into()));
        self
    }

    /// Add `search` only when there is text to search for.
    pub fn with_search(self, search: &str) -> Self {
        if search.is_empty() {
            self
        } else {
            self.with("search", search)
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Encode as `a=1&b=2`, spaces as `+`.
    pub fn encode(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append the encoded query to `path`.
    pub fn url(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else if path.contains('?') {
            format!("{}&{}", path, self.encode())
        } else {
            format!("{}?{}", path, self.encode())
        }
    }
}

fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, FORM_VALUE)
        .to_string()
        .replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_params() {
        assert_eq!(Query::new().url("/tool_list/"), "/tool_list/");
        assert_eq!(Query::new().with_search("").url("/tool_list/"), "/tool_list/");
    }

    #[test]
    fn test_url_encodes_values() {
        let q = Query::new()
            .with_search("bor maskine")
            .with("sorting", "-name");
        assert_eq!(q.url("/tool_list/"), "/tool_list/?search=bor+maskine&sorting=-name");
    }

    #[test]
    fn test_encodes_danish_and_commas() {
        let q = Query::new().with("object_ids", "1,2").with("search", "værk");
        assert_eq!(q.encode(), "object_ids=1%2C2&search=v%C3%A6rk");
        assert_eq!(q.get("object_ids"), Some("1,2"));
    }

    #[test]
    fn test_url_with_existing_query() {
        let q = Query::new().with("id", "3");
        assert_eq!(q.url("/tool_form/?x=1"), "/tool_form/?x=1&id=3");
    }
}
