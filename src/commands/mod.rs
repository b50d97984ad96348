//! Backend Endpoint Wrappers
//!
//! Frontend bindings to the backend's fragment, form and action endpoints,
//! organized by concern.

pub mod http;
mod fragment;
mod form;
mod action;
mod model;

// Re-export all public items
pub use fragment::*;
pub use form::*;
pub use action::*;
pub use model::*;
pub use http::FetchError;
