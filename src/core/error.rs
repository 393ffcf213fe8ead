//! Typed error handling for the shop-orders service
//!
//! Every failure surfaced to a caller maps to a distinct HTTP status and a
//! structured JSON body. The important distinction lives between
//! [`OrderServiceError::InvalidAuth`] (the downstream customer service
//! rejected the caller's credential) and the not-found family: clients must
//! be able to tell "you may not see this" apart from "this does not exist".

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// The main error type for order operations
#[derive(Debug, Error)]
pub enum OrderServiceError {
    /// Input failed field-level validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No order with the requested id
    #[error("Could not find order {id}")]
    OrderNotFound { id: i64 },

    /// The customer referenced by an order could not be resolved
    #[error("Could not find customer {id}")]
    CustomerNotFound { id: i64 },

    /// An item referenced by an order detail could not be resolved
    #[error("Could not find item {id}")]
    ItemNotFound { id: i64 },

    /// A downstream service rejected the caller's credential
    #[error("You are not authorized to access this data")]
    InvalidAuth,

    /// A downstream service failed at the transport or payload level
    #[error("{service} service unavailable: {message}")]
    DownstreamUnavailable {
        service: &'static str,
        message: String,
    },

    /// The record store failed
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Single field validation error
    #[error("Validation error for field '{field}': {message}")]
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    #[error("Validation errors: {}", join_fields(.0))]
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

fn join_fields(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = Vec::new();
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                fields.push(FieldValidationError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                });
            }
        }
        ValidationError::FieldErrors(fields)
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// When the error was produced (RFC 3339, UTC)
    pub timestamp: DateTime<Utc>,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl OrderServiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderServiceError::OrderNotFound { .. } => StatusCode::NOT_FOUND,
            OrderServiceError::CustomerNotFound { .. } => StatusCode::NOT_FOUND,
            OrderServiceError::ItemNotFound { .. } => StatusCode::NOT_FOUND,
            OrderServiceError::InvalidAuth => StatusCode::UNAUTHORIZED,
            OrderServiceError::DownstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
            OrderServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderServiceError::Validation(_) => "VALIDATION_ERROR",
            OrderServiceError::OrderNotFound { .. } => "ORDER_NOT_FOUND",
            OrderServiceError::CustomerNotFound { .. } => "CUSTOMER_NOT_FOUND",
            OrderServiceError::ItemNotFound { .. } => "ITEM_NOT_FOUND",
            OrderServiceError::InvalidAuth => "INVALID_AUTH",
            OrderServiceError::DownstreamUnavailable { .. } => "DOWNSTREAM_UNAVAILABLE",
            OrderServiceError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            timestamp: Utc::now(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            OrderServiceError::OrderNotFound { id }
            | OrderServiceError::CustomerNotFound { id }
            | OrderServiceError::ItemNotFound { id } => Some(serde_json::json!({ "id": id })),
            OrderServiceError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            OrderServiceError::DownstreamUnavailable { service, .. } => {
                Some(serde_json::json!({ "service": service }))
            }
            _ => None,
        }
    }

    /// Wrap a store-level failure
    pub fn storage(err: anyhow::Error) -> Self {
        OrderServiceError::Storage(err.to_string())
    }
}

impl IntoResponse for OrderServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// A specialized Result type for order operations
pub type OrderResult<T> = Result<T, OrderServiceError>;
