//! Model Commands

use toolbase_core::model_defaults::ModelDefaults;
use toolbase_core::query::Query;

use super::http::{self, FetchError};

pub async fn get_model_defaults(id: &str) -> Result<ModelDefaults, FetchError> {
    let url = Query::new().with("id", id).url("/model_object/");
    let body = http::get(&url, None).await?;
    Ok(ModelDefaults::from_body(&body)?)
}
