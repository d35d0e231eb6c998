use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::quotes::dtos::{CreateQuoteRequest, LookupQuoteRequest, UpdateQuoteRequest};
use crate::features::quotes::models::QuoteRequest;
use crate::shared::constants::API_PREFIX;
use crate::shared::types::{Page, PaginationQuery};

/// Quote request endpoints of the backend
#[async_trait]
pub trait QuoteApi: Send + Sync {
    async fn list(&self, page: &PaginationQuery) -> Result<Page<QuoteRequest>>;
    async fn get(&self, id: i64) -> Result<QuoteRequest>;
    async fn create(&self, request: &CreateQuoteRequest) -> Result<QuoteRequest>;
    async fn update(&self, id: i64, request: &UpdateQuoteRequest) -> Result<QuoteRequest>;
    async fn delete(&self, id: i64) -> Result<()>;
    /// Customer-side lookup by mobile number and password
    async fn check(&self, lookup: &LookupQuoteRequest) -> Result<QuoteRequest>;
}

/// HTTP implementation talking to /api/v1/requests
pub struct HttpQuoteClient {
    api: Arc<ApiClient>,
}

impl HttpQuoteClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl QuoteApi for HttpQuoteClient {
    async fn list(&self, page: &PaginationQuery) -> Result<Page<QuoteRequest>> {
        self.api
            .get_query(
                &format!("{}/requests", API_PREFIX),
                &[
                    ("page", page.zero_based().to_string()),
                    ("size", page.limit().to_string()),
                ],
            )
            .await
    }

    async fn get(&self, id: i64) -> Result<QuoteRequest> {
        self.api
            .get(&format!("{}/requests/{}", API_PREFIX, id))
            .await
    }

    async fn create(&self, request: &CreateQuoteRequest) -> Result<QuoteRequest> {
        self.api
            .post(&format!("{}/requests", API_PREFIX), request)
            .await
    }

    async fn update(&self, id: i64, request: &UpdateQuoteRequest) -> Result<QuoteRequest> {
        self.api
            .put(&format!("{}/requests/{}", API_PREFIX, id), request)
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.api
            .delete(&format!("{}/requests/{}", API_PREFIX, id))
            .await
    }

    async fn check(&self, lookup: &LookupQuoteRequest) -> Result<QuoteRequest> {
        // Credentials travel as query parameters on a body-less POST; this is
        // the shape the backend exposes for anonymous lookups.
        self.api
            .post_query(
                &format!("{}/requests/check", API_PREFIX),
                &[
                    ("mobile", lookup.mobile.clone()),
                    ("password", lookup.password.clone()),
                ],
            )
            .await
    }
}
