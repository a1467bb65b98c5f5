use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::error::DomainError;

/// Error body returned by every failing user endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// REST-level errors for the users surface
#[derive(Debug, Error)]
pub enum RestError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl RestError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl From<DomainError> for RestError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::UserNotFound { .. } => Self::NotFound("User not found".to_string()),
            DomainError::Storage { message } => Self::Internal(message),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            Self::NotFound(m) => (StatusCode::NOT_FOUND, m),
            Self::Internal(m) => {
                tracing::error!(error = %m, "user store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, m)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
