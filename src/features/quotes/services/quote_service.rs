use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::session::SessionStore;
use crate::features::quotes::clients::QuoteApi;
use crate::features::quotes::dtos::{CreateQuoteRequest, LookupQuoteRequest, UpdateQuoteRequest};
use crate::features::quotes::models::{QuoteRequest, QuoteStatus};
use crate::shared::types::{Page, PaginationQuery};

/// Quote request workflow.
///
/// Submitting and looking up a request is open to anyone; everything else is
/// staff-only and guarded by the session. The status graph is advisory: an
/// admin may set any status directly and nothing is blocked client-side.
pub struct QuoteService {
    client: Arc<dyn QuoteApi>,
    session: Arc<SessionStore>,
}

impl QuoteService {
    pub fn new(client: Arc<dyn QuoteApi>, session: Arc<SessionStore>) -> Self {
        Self { client, session }
    }

    /// Customer submission. New requests always enter the workflow as PENDING
    /// regardless of what the caller put in the DTO.
    pub async fn submit(&self, request: &CreateQuoteRequest) -> Result<QuoteRequest> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let mut request = request.clone();
        request.status = QuoteStatus::Pending;

        let created = self.client.create(&request).await?;
        tracing::info!("Submitted quote request {}", created.id);
        Ok(created)
    }

    /// Customer-side lookup by mobile number and password
    pub async fn lookup(&self, lookup: &LookupQuoteRequest) -> Result<QuoteRequest> {
        lookup
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.client.check(lookup).await
    }

    pub async fn list(&self, page: &PaginationQuery) -> Result<Page<QuoteRequest>> {
        self.session.require_admin()?;
        self.client.list(page).await
    }

    /// Staff fetch by id, bypassing the password check
    pub async fn get(&self, id: i64) -> Result<QuoteRequest> {
        self.session.require_admin()?;
        self.client.get(id).await
    }

    pub async fn update(&self, id: i64, request: &UpdateQuoteRequest) -> Result<QuoteRequest> {
        self.session.require_admin()?;
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let updated = self.client.update(id, request).await?;
        tracing::info!(
            "Quote request {} moved to {}",
            updated.id,
            updated.status.label()
        );
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.session.require_admin()?;
        self.client.delete(id).await?;
        tracing::info!("Deleted quote request {}", id);
        Ok(())
    }
}
