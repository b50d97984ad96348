//! Fetch Wrapper
//!
//! Every request to the backend goes through [`send`]: it marks the request
//! as AJAX, attaches the CSRF token to unsafe same-origin requests, applies
//! the timeout and sorts failures into [`FetchError`].

use std::cell::Cell;
use std::rc::Rc;
use std::sync::OnceLock;

use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use thiserror::Error;
use web_sys::{AbortController, UrlSearchParams};

use toolbase_core::config::UiConfig;
use toolbase_core::csrf;
use toolbase_core::query::Query;

use crate::dom;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("request to {0} timed out")]
    Timeout(String),

    #[error("request aborted")]
    Aborted,

    #[error("could not build request: {0}")]
    Build(String),

    #[error(transparent)]
    Decode(#[from] toolbase_core::Error),
}

impl FetchError {
    /// Aborts come from a newer request replacing this one.
    pub fn is_aborted(&self) -> bool {
        matches!(self, FetchError::Aborted)
    }
}

#[derive(Debug, Clone)]
struct HttpSettings {
    csrf_cookie: String,
    csrf_header: String,
    timeout_ms: u32,
}

static SETTINGS: OnceLock<HttpSettings> = OnceLock::new();

fn settings() -> &'static HttpSettings {
    SETTINGS.get_or_init(|| HttpSettings::from(&UiConfig::default()))
}

impl From<&UiConfig> for HttpSettings {
    fn from(config: &UiConfig) -> Self {
        Self {
            csrf_cookie: config.csrf_cookie.clone(),
            csrf_header: config.csrf_header.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }
}

/// Install request settings from the page config. First call wins.
pub fn configure(config: &UiConfig) {
    if SETTINGS.set(HttpSettings::from(config)).is_err() {
        tracing::warn!("http settings already configured");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Request body, always sent url-encoded.
pub enum Body {
    Query(Query),
    Params(UrlSearchParams),
}

impl Body {
    fn into_params(self) -> Result<UrlSearchParams, FetchError> {
        match self {
            Body::Params(params) => Ok(params),
            Body::Query(query) => UrlSearchParams::new_with_str(&query.encode())
                .map_err(|e| FetchError::Build(format!("{:?}", e))),
        }
    }
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
    };
    let builder = builder.header("X-Requested-With", "XMLHttpRequest");

    let s = settings();
    match csrf::token_for(method.as_str(), url, &dom::page_origin(), &dom::cookies(), &s.csrf_cookie) {
        Some(token) => builder.header(&s.csrf_header, &token),
        None => builder,
    }
}

/// Send a request and return the response body.
///
/// `abort` lets the caller cancel the request; without one the request can
/// still be cut off by the timeout.
pub async fn send(
    method: Method,
    url: &str,
    body: Option<Body>,
    abort: Option<AbortController>,
) -> Result<String, FetchError> {
    let controller = match abort {
        Some(c) => c,
        None => AbortController::new().map_err(|e| FetchError::Build(format!("{:?}", e)))?,
    };
    let signal = controller.signal();

    let timed_out = Rc::new(Cell::new(false));
    let _timer = {
        let timed_out = timed_out.clone();
        let controller = controller.clone();
        Timeout::new(settings().timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let builder = builder(method, url).abort_signal(Some(&signal));
    let sent = match body {
        Some(body) => {
            let request = builder
                .body(body.into_params()?)
                .map_err(|e| FetchError::Build(e.to_string()))?;
            request.send().await
        }
        None => builder.send().await,
    };

    let response = match sent {
        Ok(response) => response,
        Err(e) => {
            return Err(if timed_out.get() {
                tracing::warn!(url, "request timed out");
                FetchError::Timeout(url.to_string())
            } else if signal.aborted() {
                tracing::debug!(url, "request aborted");
                FetchError::Aborted
            } else {
                tracing::error!(url, error = %e, "request failed");
                FetchError::Network(e.to_string())
            })
        }
    };

    if !response.ok() {
        tracing::error!(url, status = response.status(), "server error");
        return Err(FetchError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}

pub async fn get(url: &str, abort: Option<AbortController>) -> Result<String, FetchError> {
    send(Method::Get, url, None, abort).await
}

pub async fn post(url: &str, body: Body) -> Result<String, FetchError> {
    send(Method::Post, url, Some(body), None).await
}
