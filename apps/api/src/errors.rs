use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad client input. The message is returned verbatim.
    #[error("{0}")]
    Validation(String),

    /// The CSV upload could not be read or parsed as a whole.
    #[error("Processing failed: {0}")]
    Processing(String),

    /// The upload exceeded the configured body limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// The single-record search request could not be handled.
    #[error("Search failed: {0}")]
    Search(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg.clone()),
            AppError::Processing(_) | AppError::Search(_) => {
                tracing::error!("{self}");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_bad_request() {
        let response = AppError::Validation("Name is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_payload_too_large_status() {
        let response = AppError::PayloadTooLarge("too big".into()).into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_processing_message_is_prefixed() {
        let err = AppError::Processing("stream ended early".into());
        assert_eq!(err.to_string(), "Processing failed: stream ended early");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_search_error_is_server_error() {
        let err = AppError::Search("expected value at line 1 column 2".into());
        assert!(err.to_string().starts_with("Search failed: "));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
