//! Fragment Commands
//!
//! HTML snippets inserted directly into page regions.

use web_sys::AbortController;

use toolbase_core::detail::DetailKind;
use toolbase_core::ObjectType;

use super::http::{self, FetchError};

pub async fn fetch_fragment(url: &str, abort: Option<AbortController>) -> Result<String, FetchError> {
    http::get(url, abort).await
}

pub async fn fetch_detail(
    kind: DetailKind,
    id: &str,
    object_type: ObjectType,
) -> Result<String, FetchError> {
    fetch_fragment(&kind.url(id, object_type), None).await
}
