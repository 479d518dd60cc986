//! Error types for the todo API client.
//!
//! `NotFound` keeps its own variant because callers routinely distinguish
//! "does not exist" from "unexpected status"; everything else non-2xx lands
//! in `Http` with the raw status and body. `Transport` wraps failures where
//! no response arrived at all.

use thiserror::Error;

/// Errors returned by [`TodoApi`](crate::TodoApi).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 for the requested todo.
    #[error("todo not found")]
    NotFound,

    /// The server answered with an unexpected status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed (connection refused, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// A payload could not be encoded or a response decoded as JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_status_and_body() {
        let err = ApiError::Http {
            status: 500,
            body: "internal server error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: internal server error");
    }

    #[test]
    fn not_found_is_terse() {
        assert_eq!(ApiError::NotFound.to_string(), "todo not found");
    }
}
