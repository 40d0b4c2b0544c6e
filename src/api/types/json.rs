//! Custom JSON extractor that returns errors as JSON

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::{ApiError, INVALID_PAYLOAD_MESSAGE};

/// Custom JSON extractor that converts all rejection errors to JSON format
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
/// Every body that cannot be read as `T` (bad syntax, wrong shape, unreadable
/// stream) is answered with `400 {"error": "Invalid request payload"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            debug!(reason = %rejection.body_text(), "Failed to read request body");
            ApiError::bad_request(INVALID_PAYLOAD_MESSAGE)
        })?;

        parse_json_body(&bytes).map(Json)
    }
}

/// Decode a request body, mapping any failure to the invalid payload error
pub fn parse_json_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|err| {
        debug!(reason = %format_rejection_message(&err), "Rejected request body");
        ApiError::bad_request(INVALID_PAYLOAD_MESSAGE)
    })
}

/// Describe the decode failure for logs
fn format_rejection_message(err: &serde_json::Error) -> String {
    use serde_json::error::Category;

    match err.classify() {
        Category::Data => format!("Invalid JSON data: {}", err),
        Category::Syntax => format!("Invalid JSON syntax: {}", err),
        Category::Eof => format!("Truncated JSON body: {}", err),
        Category::Io => format!("Failed to read request body: {}", err),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
