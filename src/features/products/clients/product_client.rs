use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::products::dtos::{
    CreateProductRequest, ProductSearchQuery, UpdateProductRequest,
};
use crate::features::products::models::Product;
use crate::shared::constants::API_PREFIX;
use crate::shared::types::{Page, PaginationQuery};

/// Product endpoints of the backend
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn list(&self, page: &PaginationQuery) -> Result<Page<Product>>;
    async fn get(&self, id: i64) -> Result<Product>;
    async fn create(&self, request: &CreateProductRequest) -> Result<Product>;
    async fn update(&self, id: i64, request: &UpdateProductRequest) -> Result<Product>;
    async fn delete(&self, id: i64) -> Result<()>;
    async fn search(&self, query: &ProductSearchQuery) -> Result<Page<Product>>;
}

/// HTTP implementation talking to /api/v1/products
pub struct HttpProductClient {
    api: Arc<ApiClient>,
}

impl HttpProductClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProductApi for HttpProductClient {
    async fn list(&self, page: &PaginationQuery) -> Result<Page<Product>> {
        // Product pages are 0-based server-side; the mapping stays in the
        // HTTP layer so callers only ever see 1-based pages.
        self.api
            .get_query(
                &format!("{}/products", API_PREFIX),
                &[
                    ("page", page.zero_based().to_string()),
                    ("size", page.limit().to_string()),
                ],
            )
            .await
    }

    async fn get(&self, id: i64) -> Result<Product> {
        self.api
            .get(&format!("{}/products/{}", API_PREFIX, id))
            .await
    }

    async fn create(&self, request: &CreateProductRequest) -> Result<Product> {
        self.api
            .post(&format!("{}/products", API_PREFIX), request)
            .await
    }

    async fn update(&self, id: i64, request: &UpdateProductRequest) -> Result<Product> {
        self.api
            .put(&format!("{}/products/{}", API_PREFIX, id), request)
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.api
            .delete(&format!("{}/products/{}", API_PREFIX, id))
            .await
    }

    async fn search(&self, query: &ProductSearchQuery) -> Result<Page<Product>> {
        self.api
            .get_query(&format!("{}/products/search", API_PREFIX), &query.to_params())
            .await
    }
}
