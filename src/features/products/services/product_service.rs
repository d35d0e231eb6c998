use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::products::clients::ProductApi;
use crate::features::products::dtos::{
    CreateProductRequest, ProductSearchQuery, UpdateProductRequest,
};
use crate::features::products::models::Product;
use crate::shared::types::{Page, PaginationQuery};

/// Product catalog operations
pub struct ProductService {
    client: Arc<dyn ProductApi>,
}

impl ProductService {
    pub fn new(client: Arc<dyn ProductApi>) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: &PaginationQuery) -> Result<Page<Product>> {
        self.client.list(page).await
    }

    pub async fn get(&self, id: i64) -> Result<Product> {
        self.client.get(id).await
    }

    pub async fn create(&self, request: &CreateProductRequest) -> Result<Product> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let product = self.client.create(request).await?;
        tracing::info!("Created product {} ({})", product.id, product.name);
        Ok(product)
    }

    pub async fn update(&self, id: i64, request: &UpdateProductRequest) -> Result<Product> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.client.update(id, request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(id).await?;
        tracing::info!("Deleted product {}", id);
        Ok(())
    }

    /// Keyword search scoped to an optional category, sorted and paginated
    pub async fn search(&self, query: &ProductSearchQuery) -> Result<Page<Product>> {
        self.client.search(query).await
    }
}
