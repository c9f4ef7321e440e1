//! Error handling for the NVR Console

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure talking to the recorder
    #[error("Backend request failed: {0}")]
    Backend(#[from] reqwest::Error),

    /// Recorder answered with a non-success status
    #[error("Backend returned {status} for {url}")]
    Api { status: StatusCode, url: String },

    /// Recorder response body did not decode
    #[error("Failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Page template failed to render
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Invalid startup configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            Error::Backend(_) => (StatusCode::BAD_GATEWAY, "BACKEND_ERROR"),
            Error::Api { .. } => (StatusCode::BAD_GATEWAY, "API_ERROR"),
            Error::Decode(_) => (StatusCode::BAD_GATEWAY, "DECODE_ERROR"),
            Error::Template(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TEMPLATE_ERROR"),
            Error::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
        };

        tracing::error!(
            status = %status,
            error_code = %error_code,
            message = %self,
            "Request error"
        );

        // Static markup only; the error detail stays in the log.
        let body = Html(format!(
            "<!doctype html>\n<html><head><title>{status}</title></head>\n\
             <body><h1>{status}</h1><p>{error_code}</p>\n\
             <p><a href=\"/\">Back to console</a></p></body></html>"
        ));

        (status, body).into_response()
    }
}
