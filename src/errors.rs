use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::FormError;
use crate::services::page::SubmitFailure;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] FormError),

    #[error("backend error: {0}")]
    Backend(anyhow::Error),

    #[error("booking already submitted")]
    Duplicate,

    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Backend(_) => StatusCode::BAD_GATEWAY,
            AppError::Duplicate => StatusCode::CONFLICT,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SubmitFailure> for AppError {
    fn from(failure: SubmitFailure) -> Self {
        match failure {
            SubmitFailure::Invalid(e) => AppError::Validation(e),
            SubmitFailure::Backend(e) => AppError::Backend(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), axum::Json(body)).into_response()
    }
}
