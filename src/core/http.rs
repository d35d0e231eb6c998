use reqwest::multipart::Form;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::session::SessionStore;

/// Error payload shape returned by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Thin wrapper around `reqwest::Client` for the storefront REST backend.
///
/// Attaches `Authorization: Bearer <token>` from the session store when a
/// session exists and maps response statuses onto [`AppError`]. A 401
/// response clears the session so the next view starts unauthenticated.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Arc<SessionStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            base_url: config.trimmed_base_url().to_string(),
            http,
            session,
        })
    }

    /// Absolute URL for an API path (path must start with '/')
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.authorize(self.http.get(url)).send().await?;
        self.parse(response).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self
            .authorize(self.http.get(url).query(query))
            .send()
            .await?;
        self.parse(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self.authorize(self.http.post(url).json(body)).send().await?;
        self.parse(response).await
    }

    /// Body-less POST carrying query parameters (quote lookup uses this shape)
    pub async fn post_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self
            .authorize(self.http.post(url).query(query))
            .send()
            .await?;
        self.parse(response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("PUT {}", url);
        let response = self.authorize(self.http.put(url).json(body)).send().await?;
        self.parse(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        tracing::debug!("DELETE {}", url);
        let response = self.authorize(self.http.delete(url)).send().await?;
        self.expect_success(response).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let url = self.url(path);
        tracing::debug!("POST {} (multipart)", url);
        let response = self
            .authorize(self.http.post(url).multipart(form))
            .send()
            .await?;
        self.parse(response).await
    }

    pub async fn put_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let url = self.url(path);
        tracing::debug!("PUT {} (multipart)", url);
        let response = self
            .authorize(self.http.put(url).multipart(form))
            .send()
            .await?;
        self.parse(response).await
    }

    async fn parse<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(self.error_for(status, response).await);
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse API response: {}", e);
            AppError::ExternalServiceError(format!("Failed to parse response: {}", e))
        })
    }

    async fn expect_success(&self, response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.error_for(status, response).await)
        }
    }

    async fn error_for(&self, status: StatusCode, response: Response) -> AppError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .map(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {}", status));

        match status {
            StatusCode::UNAUTHORIZED => {
                // A rejected token is useless; drop the session so the next
                // view starts from a clean unauthenticated state.
                self.session.clear();
                AppError::Unauthorized(message)
            }
            StatusCode::FORBIDDEN => AppError::Forbidden(message),
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            StatusCode::BAD_REQUEST => AppError::BadRequest(message),
            StatusCode::CONFLICT => AppError::Conflict(message),
            StatusCode::UNPROCESSABLE_ENTITY => AppError::Validation(message),
            _ => {
                tracing::error!("API error: HTTP {} - {}", status, body);
                AppError::ExternalServiceError(message)
            }
        }
    }
}
