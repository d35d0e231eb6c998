use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::products::clients::ProductImageApi;
use crate::features::products::dtos::ImageUpload;
use crate::features::products::models::ProductImage;

/// Outcome of a batch upload. Failed files are skipped, not retried; the
/// first error is kept so the caller can show one message for the batch.
#[derive(Debug)]
pub struct ImageUploadReport {
    pub uploaded: Vec<ProductImage>,
    pub attempted: usize,
    pub error: Option<AppError>,
}

impl ImageUploadReport {
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.uploaded.len() == self.attempted
    }
}

/// Product image operations, including batch upload
pub struct ImageService {
    client: Arc<dyn ProductImageApi>,
}

impl ImageService {
    pub fn new(client: Arc<dyn ProductImageApi>) -> Self {
        Self { client }
    }

    pub async fn by_product(&self, product_id: i64) -> Result<Vec<ProductImage>> {
        self.client.by_product(product_id).await
    }

    pub async fn get(&self, id: i64) -> Result<ProductImage> {
        self.client.get(id).await
    }

    pub async fn upload(&self, product_id: i64, upload: &ImageUpload) -> Result<ProductImage> {
        if upload.bytes.is_empty() {
            return Err(AppError::Validation("Image file is empty".to_string()));
        }
        self.client.upload(product_id, upload).await
    }

    /// Uploads each file in order, continuing past failures so one bad file
    /// does not lose the rest of the batch.
    pub async fn upload_all(&self, product_id: i64, uploads: &[ImageUpload]) -> ImageUploadReport {
        let mut report = ImageUploadReport {
            uploaded: Vec::with_capacity(uploads.len()),
            attempted: uploads.len(),
            error: None,
        };

        for upload in uploads {
            match self.upload(product_id, upload).await {
                Ok(image) => report.uploaded.push(image),
                Err(e) => {
                    tracing::warn!(
                        "Failed to upload image {} for product {}: {}",
                        upload.file_name,
                        product_id,
                        e
                    );
                    report.error.get_or_insert(e);
                }
            }
        }

        report
    }

    pub async fn replace(&self, id: i64, upload: &ImageUpload) -> Result<ProductImage> {
        if upload.bytes.is_empty() {
            return Err(AppError::Validation("Image file is empty".to_string()));
        }
        self.client.replace(id, upload).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(id).await
    }

    pub async fn delete_by_product(&self, product_id: i64) -> Result<()> {
        self.client.delete_by_product(product_id).await
    }

    pub fn file_url(&self, file_name: &str) -> String {
        self.client.file_url(file_name)
    }
}
