//! Error types for the catalog API.

use serde::Deserialize;
use thiserror::Error;

/// A failed catalog request. `Display` is the display-ready message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never got an answer.
    #[error("{0}")]
    Transport(String),

    /// The answer was not the expected JSON.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl From<String> for ApiError {
    fn from(msg: String) -> Self {
        ApiError::Transport(msg)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Message for a non-success response: the body's JSON `message` field when
/// there is one, otherwise a generic line naming the status.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_wins() {
        let message = error_message(404, r#"{"message":"Product Not Found"}"#);
        assert_eq!(message, "Product Not Found");
    }

    #[test]
    fn test_fallback_names_status() {
        assert_eq!(
            error_message(500, "<html>oops</html>"),
            "Request failed with status code 500"
        );
        assert_eq!(
            error_message(502, r#"{"message":""}"#),
            "Request failed with status code 502"
        );
    }

    #[test]
    fn test_display_is_the_message() {
        let err = ApiError::Status {
            status: 404,
            message: "Product Not Found".into(),
        };
        assert_eq!(err.to_string(), "Product Not Found");
        assert_eq!(ApiError::from("connection refused".to_string()).to_string(), "connection refused");
    }
}
