//! CSRF Header Decision
//!
//! Django rejects unsafe requests without the token from the `csrftoken`
//! cookie. The token is only sent to our own origin.

use percent_encoding::percent_decode_str;

/// Methods that never carry the token.
pub const SAFE_METHODS: [&str; 4] = ["GET", "HEAD", "OPTIONS", "TRACE"];

pub const DEFAULT_COOKIE: &str = "csrftoken";
pub const DEFAULT_HEADER: &str = "X-CSRFToken";

pub fn is_safe_method(method: &str) -> bool {
    SAFE_METHODS.contains(&method)
}

/// Location of the page issuing requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOrigin {
    /// Scheme including the colon, e.g. `https:`
    pub protocol: String,
    /// Host with optional port
    pub host: String,
}

impl PageOrigin {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
        }
    }

    /// Relative URLs, and absolute or scheme-relative URLs pointing at this
    /// host, are same-origin.
    pub fn is_same_origin(&self, url: &str) -> bool {
        let scheme_relative = format!("//{}", self.host);
        let origin = format!("{}{}", self.protocol, scheme_relative);

        let under = |base: &str| url == base || url.starts_with(&format!("{base}/"));

        under(&origin)
            || under(&scheme_relative)
            || !(url.starts_with("//") || url.starts_with("http:") || url.starts_with("https:"))
    }
}

/// Look up a cookie in a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    let prefix = format!("{name}=");
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|c| c.strip_prefix(prefix.as_str()))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

/// Token to attach to a request, if any.
pub fn token_for(
    method: &str,
    url: &str,
    origin: &PageOrigin,
    cookies: &str,
    cookie_name: &str,
) -> Option<String> {
    if is_safe_method(method) || !origin.is_same_origin(url) {
        return None;
    }
    let token = cookie_value(cookies, cookie_name);
    if token.is_none() {
        tracing::warn!(cookie = cookie_name, url, "csrf cookie missing, sending without token");
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> PageOrigin {
        PageOrigin::new("https:", "toolbase.dk:8443")
    }

    const COOKIES: &str = "sessionid=abc; csrftoken=tok%2Fen; theme=dark";

    #[test]
    fn test_safe_methods() {
        for m in SAFE_METHODS {
            assert!(is_safe_method(m));
        }
        assert!(!is_safe_method("POST"));
        assert!(!is_safe_method("DELETE"));
        // Exact match, like the upper-case method names jQuery hands over
        assert!(!is_safe_method("get"));
    }

    #[test]
    fn test_same_origin() {
        let o = origin();
        assert!(o.is_same_origin("/tool_form/"));
        assert!(o.is_same_origin("tool_form/"));
        assert!(o.is_same_origin("https://toolbase.dk:8443"));
        assert!(o.is_same_origin("https://toolbase.dk:8443/tool_action/"));
        assert!(o.is_same_origin("//toolbase.dk:8443/tool_action/"));
        assert!(!o.is_same_origin("http://toolbase.dk:8443/tool_action/"));
        assert!(!o.is_same_origin("https://toolbase.dk:8443evil.com/"));
        assert!(!o.is_same_origin("//other.dk/"));
        assert!(!o.is_same_origin("https://other.dk/"));
    }

    #[test]
    fn test_cookie_value() {
        assert_eq!(cookie_value(COOKIES, "csrftoken").as_deref(), Some("tok/en"));
        assert_eq!(cookie_value(COOKIES, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie_value(COOKIES, "csrf"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }

    #[test]
    fn test_token_only_for_unsafe_same_origin() {
        let o = origin();
        for m in ["POST", "PUT", "PATCH", "DELETE"] {
            assert_eq!(
                token_for(m, "/tool_form/", &o, COOKIES, DEFAULT_COOKIE).as_deref(),
                Some("tok/en"),
                "{m}"
            );
            assert_eq!(token_for(m, "https://other.dk/x", &o, COOKIES, DEFAULT_COOKIE), None);
        }
        for m in SAFE_METHODS {
            assert_eq!(token_for(m, "/tool_list/", &o, COOKIES, DEFAULT_COOKIE), None);
        }
    }

    #[test]
    fn test_missing_cookie_omits_token() {
        assert_eq!(token_for("POST", "/tool_form/", &origin(), "sessionid=1", DEFAULT_COOKIE), None);
    }
}
