use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::error::CalculatorError;

/// Error body returned by every failing calculator endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// REST-level errors for the calculator surface
#[derive(Debug, Error)]
pub enum RestError {
    #[error("{0}")]
    BadRequest(String),
}

impl RestError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl From<CalculatorError> for RestError {
    fn from(error: CalculatorError) -> Self {
        match error {
            CalculatorError::DivisionByZero => Self::BadRequest("Division by zero".to_string()),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let Self::BadRequest(message) = self;
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: message }),
        )
            .into_response()
    }
}
