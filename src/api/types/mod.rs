//! API request/response types
//!
//! Every response body is either `{"data": ...}` or `{"error": "..."}`.

pub mod error;
pub mod json;
pub mod response;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use response::DataResponse;
