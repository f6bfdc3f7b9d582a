//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::data::DataError;
use crate::figure::FigureError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Figure could not be built for the request
    #[error("Figure error: {0}")]
    Figure(#[from] FigureError),

    /// Dataset loading or preparation failed
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Figure(FigureError::UnrecognizedMode(_)) => {
                (StatusCode::BAD_REQUEST, "UNRECOGNIZED_MODE")
            }
            ApiError::Figure(FigureError::EmptyDataset(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "EMPTY_DATASET")
            }
            ApiError::Data(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATA_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_client_error() {
            tracing::warn!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API request rejected"
            );
        } else {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
