//! Server error types with HTTP status code mapping.
//!
//! [`ServerError`] is the error type returned by HTTP handlers. Each variant
//! maps to a status code and a plain-text body.

use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

/// Handler-side error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Neither the forwarded header nor the peer address yielded an IP.
    #[error("500 - No request ip found")]
    NoClientIp,
}

impl ServerError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NoClientIp => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request failed");
        (
            self.status_code(),
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_client_ip_is_internal_error() {
        let response = ServerError::NoClientIp.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).map(|v| v.as_bytes()),
            Some(&b"text/plain; charset=utf-8"[..])
        );
    }
}
