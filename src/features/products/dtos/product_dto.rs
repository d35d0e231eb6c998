use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::types::{PaginationQuery, SortSpec};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "A category must be selected"))]
    pub category_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "A category must be selected"))]
    pub category_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVariantRequest {
    #[validate(range(min = 1, message = "A product must be selected"))]
    pub product_id: i64,

    #[validate(length(min = 1, max = 64, message = "SKU must be 1-64 characters"))]
    pub sku: String,

    #[validate(length(min = 1, max = 64, message = "Size must be 1-64 characters"))]
    pub size: String,

    pub current_price: Decimal,

    #[validate(range(min = 0, message = "Stock quantity cannot be negative"))]
    pub stock_quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVariantRequest {
    #[validate(length(min = 1, max = 64, message = "SKU must be 1-64 characters"))]
    pub sku: String,

    #[validate(length(min = 1, max = 64, message = "Size must be 1-64 characters"))]
    pub size: String,

    pub current_price: Decimal,

    #[validate(range(min = 0, message = "Stock quantity cannot be negative"))]
    pub stock_quantity: i32,
}

/// File payload for a multipart image upload
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Combined keyword/category/sort/pagination query for product search
#[derive(Debug, Clone, Default)]
pub struct ProductSearchQuery {
    pub keyword: String,
    pub category_id: Option<i64>,
    pub sort: SortSpec,
    pub page: PaginationQuery,
}

impl ProductSearchQuery {
    /// Query parameters in wire form. The backend counts product pages from
    /// zero, so the 1-based page is mapped here and nowhere else.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("keyword", self.keyword.clone()),
            ("sort", self.sort.to_param()),
            ("page", self.page.zero_based().to_string()),
            ("size", self.page.limit().to_string()),
        ];
        if let Some(category_id) = self.category_id {
            params.push(("categoryId", category_id.to_string()));
        }
        params
    }
}
