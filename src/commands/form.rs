//! Form Commands

use web_sys::{FormData, HtmlFormElement, UrlSearchParams};

use toolbase_core::outcome::FormOutcome;
use toolbase_core::ObjectType;

use super::http::{self, Body, FetchError};

/// Serialize a form the way a browser would submit it url-encoded.
pub fn serialize_form(form: &HtmlFormElement) -> Result<UrlSearchParams, FetchError> {
    let data = FormData::new_with_form(form).map_err(|e| FetchError::Build(format!("{:?}", e)))?;
    UrlSearchParams::new_with_str_sequence_sequence(&data)
        .map_err(|e| FetchError::Build(format!("{:?}", e)))
}

/// Create or update an object through `POST /{type}_form/`.
pub async fn submit_form(object_type: ObjectType, form: &HtmlFormElement) -> Result<FormOutcome, FetchError> {
    let params = serialize_form(form)?;
    let body = http::post(&object_type.form_path(), Body::Params(params)).await?;
    Ok(FormOutcome::parse(&body))
}
