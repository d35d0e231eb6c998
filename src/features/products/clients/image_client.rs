use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::http::ApiClient;
use crate::features::products::dtos::ImageUpload;
use crate::features::products::models::ProductImage;
use crate::shared::constants::API_PREFIX;

/// Product image endpoints of the backend
#[async_trait]
pub trait ProductImageApi: Send + Sync {
    async fn by_product(&self, product_id: i64) -> Result<Vec<ProductImage>>;
    async fn get(&self, id: i64) -> Result<ProductImage>;
    async fn upload(&self, product_id: i64, upload: &ImageUpload) -> Result<ProductImage>;
    async fn replace(&self, id: i64, upload: &ImageUpload) -> Result<ProductImage>;
    async fn delete(&self, id: i64) -> Result<()>;
    async fn delete_by_product(&self, product_id: i64) -> Result<()>;
    /// Public URL the backend serves the stored file from
    fn file_url(&self, file_name: &str) -> String;
}

/// HTTP implementation talking to /api/v1/product-images
pub struct HttpProductImageClient {
    api: Arc<ApiClient>,
}

impl HttpProductImageClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    fn form_for(upload: &ImageUpload, product_id: Option<i64>) -> Result<Form> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)
            .map_err(|e| AppError::BadRequest(format!("Invalid content type: {}", e)))?;

        let mut form = Form::new().part("file", part);
        if let Some(product_id) = product_id {
            form = form.text("productId", product_id.to_string());
        }
        Ok(form)
    }
}

#[async_trait]
impl ProductImageApi for HttpProductImageClient {
    async fn by_product(&self, product_id: i64) -> Result<Vec<ProductImage>> {
        self.api
            .get(&format!(
                "{}/product-images/by-product/{}",
                API_PREFIX, product_id
            ))
            .await
    }

    async fn get(&self, id: i64) -> Result<ProductImage> {
        self.api
            .get(&format!("{}/product-images/{}", API_PREFIX, id))
            .await
    }

    async fn upload(&self, product_id: i64, upload: &ImageUpload) -> Result<ProductImage> {
        let form = Self::form_for(upload, Some(product_id))?;
        self.api
            .post_multipart(&format!("{}/product-images", API_PREFIX), form)
            .await
    }

    async fn replace(&self, id: i64, upload: &ImageUpload) -> Result<ProductImage> {
        let form = Self::form_for(upload, None)?;
        self.api
            .put_multipart(&format!("{}/product-images/{}", API_PREFIX, id), form)
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.api
            .delete(&format!("{}/product-images/{}", API_PREFIX, id))
            .await
    }

    async fn delete_by_product(&self, product_id: i64) -> Result<()> {
        self.api
            .delete(&format!(
                "{}/product-images/by-product/{}",
                API_PREFIX, product_id
            ))
            .await
    }

    fn file_url(&self, file_name: &str) -> String {
        self.api.url(&format!(
            "{}/product-images/files/{}",
            API_PREFIX,
            urlencoding::encode(file_name)
        ))
    }
}
