//! HTTP error handling and response types.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use apiary_units::{registry, ConversionError};

use crate::error::ServiceError;

fn known_symbols() -> String {
    registry::all_units()
        .iter()
        .map(|unit| unit.symbol())
        .collect::<Vec<_>>()
        .join(", ")
}

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (malformed body or query)
    BadRequest(String),
    /// Service error
    Service(ServiceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::Service(e) => {
                let status = if e.is_client_error() {
                    StatusCode::BAD_REQUEST
                } else {
                    tracing::error!("Service error: {}", e);
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                let mut error = ApiError::new(e.code(), e.to_string());
                if let ServiceError::Conversion(ConversionError::UnknownUnit(_)) = &e {
                    error = error.with_details(format!("Known units: {}", known_symbols()));
                }
                (status, error)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        AppError::Service(err)
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        AppError::Service(err.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
