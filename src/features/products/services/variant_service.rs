use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::products::clients::ProductVariantApi;
use crate::features::products::dtos::{CreateVariantRequest, UpdateVariantRequest};
use crate::features::products::models::ProductVariant;

/// Variant (size / price / stock) operations for a product
pub struct VariantService {
    client: Arc<dyn ProductVariantApi>,
}

impl VariantService {
    pub fn new(client: Arc<dyn ProductVariantApi>) -> Self {
        Self { client }
    }

    pub async fn by_product(&self, product_id: i64) -> Result<Vec<ProductVariant>> {
        self.client.by_product(product_id).await
    }

    pub async fn get(&self, id: i64) -> Result<ProductVariant> {
        self.client.get(id).await
    }

    pub async fn create(&self, request: &CreateVariantRequest) -> Result<ProductVariant> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.client.create(request).await
    }

    pub async fn update(&self, id: i64, request: &UpdateVariantRequest) -> Result<ProductVariant> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.client.update(id, request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(id).await
    }
}
