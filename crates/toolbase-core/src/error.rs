//! Core error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown object type: {0}")]
    UnknownObjectType(String),

    #[error("unknown popup: {0}")]
    UnknownPopup(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model record missing from response")]
    MissingModel,
}

pub type Result<T> = std::result::Result<T, Error>;
