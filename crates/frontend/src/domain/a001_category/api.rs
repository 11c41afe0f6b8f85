use crate::shared::api_utils::{post_json, put_json};
use contracts::domain::a001_category::{Category, CreateCategoryRequest};
use contracts::shared::api_error::ApiError;
use contracts::shared::list_query::ApiEnvelope;
use serde_json::{Map, Value};

/// `PUT category/list`, answering `{ data: [...] }`
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let envelope: ApiEnvelope<Vec<Category>> =
        put_json("category/list", &Map::<String, Value>::new()).await?;
    Ok(envelope.data)
}

pub async fn create_category(request: &CreateCategoryRequest) -> Result<(), ApiError> {
    post_json("category", request).await
}
