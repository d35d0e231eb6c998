use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::categories::dtos::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::features::categories::models::Category;
use crate::shared::constants::API_PREFIX;

/// Category endpoints of the backend
#[async_trait]
pub trait CategoryApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>>;
    async fn get(&self, id: i64) -> Result<Category>;
    async fn create(&self, request: &CreateCategoryRequest) -> Result<Category>;
    async fn update(&self, id: i64, request: &UpdateCategoryRequest) -> Result<Category>;
    async fn delete(&self, id: i64) -> Result<()>;
    async fn roots(&self) -> Result<Vec<Category>>;
    async fn subcategories(&self, parent_id: i64) -> Result<Vec<Category>>;
    async fn descendants(&self, id: i64) -> Result<Vec<Category>>;
    async fn by_name(&self, name: &str) -> Result<Category>;
    async fn by_depth(&self, depth: i32) -> Result<Vec<Category>>;
    async fn search(&self, keyword: &str) -> Result<Vec<Category>>;
}

/// HTTP implementation talking to /api/v1/categories
pub struct HttpCategoryClient {
    api: Arc<ApiClient>,
}

impl HttpCategoryClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CategoryApi for HttpCategoryClient {
    async fn list(&self) -> Result<Vec<Category>> {
        self.api.get(&format!("{}/categories", API_PREFIX)).await
    }

    async fn get(&self, id: i64) -> Result<Category> {
        self.api
            .get(&format!("{}/categories/{}", API_PREFIX, id))
            .await
    }

    async fn create(&self, request: &CreateCategoryRequest) -> Result<Category> {
        self.api
            .post(&format!("{}/categories", API_PREFIX), request)
            .await
    }

    async fn update(&self, id: i64, request: &UpdateCategoryRequest) -> Result<Category> {
        self.api
            .put(&format!("{}/categories/{}", API_PREFIX, id), request)
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.api
            .delete(&format!("{}/categories/{}", API_PREFIX, id))
            .await
    }

    async fn roots(&self) -> Result<Vec<Category>> {
        self.api
            .get(&format!("{}/categories/root", API_PREFIX))
            .await
    }

    async fn subcategories(&self, parent_id: i64) -> Result<Vec<Category>> {
        self.api
            .get(&format!(
                "{}/categories/{}/subcategories",
                API_PREFIX, parent_id
            ))
            .await
    }

    async fn descendants(&self, id: i64) -> Result<Vec<Category>> {
        self.api
            .get(&format!("{}/categories/{}/descendants", API_PREFIX, id))
            .await
    }

    async fn by_name(&self, name: &str) -> Result<Category> {
        self.api
            .get_query(
                &format!("{}/categories/byName", API_PREFIX),
                &[("name", name)],
            )
            .await
    }

    async fn by_depth(&self, depth: i32) -> Result<Vec<Category>> {
        self.api
            .get_query(
                &format!("{}/categories/byDepth", API_PREFIX),
                &[("depth", depth.to_string())],
            )
            .await
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Category>> {
        self.api
            .get_query(
                &format!("{}/categories/search", API_PREFIX),
                &[("keyword", keyword)],
            )
            .await
    }
}
