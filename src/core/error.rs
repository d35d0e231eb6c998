use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Dangling parent reference: category {id} points to missing parent {parent_id}")]
    DanglingParent { id: i64, parent_id: i64 },

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True for failures a form can surface inline without logging the user out.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_)
                | AppError::Validation(_)
                | AppError::BadRequest(_)
                | AppError::Conflict(_)
                | AppError::DanglingParent { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
