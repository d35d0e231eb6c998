use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::clients::AuthApi;
use crate::features::auth::dtos::{LoginRequest, RegisterRequest, RegisterResponse};
use crate::features::auth::model::Session;
use crate::features::auth::session::SessionStore;

/// Login, registration and logout against the auth endpoints, writing the
/// shared session store on success.
pub struct AuthService {
    client: Arc<dyn AuthApi>,
    session: Arc<SessionStore>,
}

impl AuthService {
    pub fn new(client: Arc<dyn AuthApi>, session: Arc<SessionStore>) -> Self {
        Self { client, session }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<Session> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let response = self.client.login(&request).await?;
        let session = response.into_session();
        self.session.set(session.clone());
        tracing::info!("User logged in: {}", session.user.username);

        Ok(session)
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if request.password != request.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        let response = self.client.register(&request).await?;
        tracing::info!("User registered: {}", response.username);

        Ok(response)
    }

    pub fn logout(&self) {
        self.session.clear();
        tracing::info!("User logged out");
    }
}
