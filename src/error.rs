//! API Errors
//!
//! Failures reported by the item resource client.

use thiserror::Error;

use crate::models::ItemId;

/// Errors that can occur when talking to the items API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("Request failed ({status}): {message}")]
    Request { status: u16, message: String },

    /// The addressed item does not exist on the backend.
    #[error("Item {0} was not found")]
    NotFound(ItemId),

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("Could not encode request: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Build a `Request` error, falling back to the reason phrase for empty bodies.
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            reason_phrase(status).to_string()
        } else {
            body.to_string()
        };
        ApiError::Request { status, message }
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unexpected response",
    }
}
