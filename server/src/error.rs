//! Error taxonomy and the HTTP response boundary.
//!
//! # Design
//!
//! Handlers never classify failures themselves; they bubble every [`Error`]
//! up with `?` and the [`IntoResponse`] impl here maps the kind to a status
//! code and a JSON `{ "message": ... }` body. Store failures log their
//! detail server-side and send a generic message to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Result alias used throughout the server crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the store and the data access model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field is missing or malformed, or an id is not a valid
    /// identifier. Maps to 400.
    #[error("{0}")]
    Validation(String),

    /// No document matched the requested id. Maps to 404.
    #[error("no todo found with id {0}")]
    NotFound(String),

    /// The backing file could not be read or written, or a stored document
    /// no longer matches the expected shape. Maps to 500.
    #[error("store error: {0}")]
    Store(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Store(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Store(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
