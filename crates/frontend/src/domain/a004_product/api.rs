use crate::shared::api_utils::post_json;
use contracts::domain::a004_product::Product;
use contracts::shared::api_error::ApiError;

/// `POST product` upserts the whole record; moderation goes through it
pub async fn save_product(product: &Product) -> Result<(), ApiError> {
    post_json("product", product).await
}
