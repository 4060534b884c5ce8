use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::InternalError;
use crate::types::dto::common::ErrorResponse;

/// Error responses for item endpoints
#[derive(ApiResponse, Debug)]
pub enum ItemError {
    /// No item with the requested id exists
    #[oai(status = 404)]
    NotFound,

    /// Request payload failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Unexpected store failure
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemError {
    /// Create a ValidationFailed error
    pub fn validation_failed(message: impl Into<String>) -> Self {
        ItemError::ValidationFailed(Json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        ItemError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }
}

impl From<InternalError> for ItemError {
    fn from(err: InternalError) -> Self {
        ItemError::internal_error(err.to_string())
    }
}
