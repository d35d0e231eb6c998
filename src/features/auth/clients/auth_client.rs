use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::auth::dtos::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::shared::constants::API_PREFIX;

/// Auth endpoints of the backend
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse>;
}

/// HTTP implementation talking to /api/v1/auth
pub struct HttpAuthClient {
    api: Arc<ApiClient>,
}

impl HttpAuthClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthApi for HttpAuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.api
            .post(&format!("{}/auth/login", API_PREFIX), request)
            .await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        self.api
            .post(&format!("{}/auth/register", API_PREFIX), request)
            .await
    }
}
