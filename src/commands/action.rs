//! Action Commands
//!
//! Bulk actions and deletes. Both answer with a message to show.

use toolbase_core::outcome::parse_message;
use toolbase_core::query::Query;

use super::http::{self, Body, FetchError};

pub async fn post_action(path: &str, body: Query) -> Result<Option<String>, FetchError> {
    let response = http::post(path, Body::Query(body)).await?;
    Ok(parse_message(&response))
}

/// Deletes are plain GETs carrying the id.
pub async fn delete_object(url: &str) -> Result<Option<String>, FetchError> {
    let response = http::get(url, None).await?;
    Ok(parse_message(&response))
}
