//! API error envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::domain::DomainError;

pub const USER_NOT_FOUND_MESSAGE: &str = "The user with the specified ID does not exist";
pub const INVALID_ID_MESSAGE: &str = "Invalid ID";
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const INTERNAL_ERROR_MESSAGE: &str = "something went wrong";

/// Error response body: `{"error": "<message>"}`
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: message.into(),
            },
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// The requested user does not exist
    pub fn user_not_found() -> Self {
        Self::not_found(USER_NOT_FOUND_MESSAGE)
    }

    /// Method not allowed on an existing route
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
    }

    /// Internal server error. The cause is never sent to the client.
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => Self::user_not_found(),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::InvalidId { .. } => Self::bad_request(INVALID_ID_MESSAGE),
            DomainError::Internal { message } => {
                error!(error = %message, "Internal error while handling request");
                Self::internal()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.error)
    }
}

impl std::error::Error for ApiError {}
