use axum::http::StatusCode;
use std::fmt;
use thiserror::Error;

/// Failure talking to the activities backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, reset).
    #[error("request failed: {0}")]
    Transport(String),
    /// The activity list endpoint answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(StatusCode),
    /// The body was not JSON of the expected shape.
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn transport(err: impl fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode(err: impl fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err)
        } else {
            Self::transport(err)
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid ACTIVITIES_API_URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
    #[error("failed to build http client: {0}")]
    Client(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_messages_name_the_failure() {
        assert_eq!(
            ApiError::Status(StatusCode::SERVICE_UNAVAILABLE).to_string(),
            "unexpected status 503 Service Unavailable"
        );
        assert!(ApiError::decode("expected value").to_string().contains("expected value"));
        let err = ConfigError::InvalidUrl {
            value: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid ACTIVITIES_API_URL \"nope\": relative URL without a base"
        );
    }
}
