use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::products::dtos::{CreateVariantRequest, UpdateVariantRequest};
use crate::features::products::models::ProductVariant;
use crate::shared::constants::API_PREFIX;

/// Product variant endpoints of the backend
#[async_trait]
pub trait ProductVariantApi: Send + Sync {
    async fn by_product(&self, product_id: i64) -> Result<Vec<ProductVariant>>;
    async fn get(&self, id: i64) -> Result<ProductVariant>;
    async fn create(&self, request: &CreateVariantRequest) -> Result<ProductVariant>;
    async fn update(&self, id: i64, request: &UpdateVariantRequest) -> Result<ProductVariant>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// HTTP implementation talking to /api/v1/product-variants
pub struct HttpVariantClient {
    api: Arc<ApiClient>,
}

impl HttpVariantClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProductVariantApi for HttpVariantClient {
    async fn by_product(&self, product_id: i64) -> Result<Vec<ProductVariant>> {
        self.api
            .get(&format!(
                "{}/product-variants/by-product/{}",
                API_PREFIX, product_id
            ))
            .await
    }

    async fn get(&self, id: i64) -> Result<ProductVariant> {
        self.api
            .get(&format!("{}/product-variants/{}", API_PREFIX, id))
            .await
    }

    async fn create(&self, request: &CreateVariantRequest) -> Result<ProductVariant> {
        self.api
            .post(&format!("{}/product-variants", API_PREFIX), request)
            .await
    }

    async fn update(&self, id: i64, request: &UpdateVariantRequest) -> Result<ProductVariant> {
        self.api
            .put(&format!("{}/product-variants/{}", API_PREFIX, id), request)
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.api
            .delete(&format!("{}/product-variants/{}", API_PREFIX, id))
            .await
    }
}
