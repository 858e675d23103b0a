//! Error taxonomy for remote content operations.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Categories of API errors for consistent error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// Transport failure, no response arrived (connect error, timeout)
    Network,
    /// Non-2xx response other than not-found
    Server,
    /// The remote reports the id does not exist
    NotFound,
    /// No credential present when one is required
    Unauthenticated,
    /// Login rejected by the remote
    AuthenticationFailed,
    /// Signup rejected by the remote
    SignupFailed,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Server => write!(f, "server"),
            ApiErrorKind::NotFound => write!(f, "not_found"),
            ApiErrorKind::Unauthenticated => write!(f, "unauthenticated"),
            ApiErrorKind::AuthenticationFailed => write!(f, "authentication_failed"),
            ApiErrorKind::SignupFailed => write!(f, "signup_failed"),
        }
    }
}

/// Structured error from the remote content service with kind and details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an error for a non-2xx response, pulling a cleaner message
    /// out of a JSON error body when one is present.
    pub fn http_status(kind: ApiErrorKind, status: u16, body: &str) -> Self {
        let message = format!("HTTP {status}");
        let details = if body.is_empty() {
            None
        } else {
            if let Ok(json) = serde_json::from_str::<Value>(body)
                && let Some(msg) = json
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .or_else(|| json.get("message"))
                    .and_then(|v| v.as_str())
            {
                return Self {
                    kind,
                    message: format!("HTTP {status}: {msg}"),
                    details: Some(body.to_string()),
                };
            }
            Some(body.to_string())
        };
        Self {
            kind,
            message,
            details,
        }
    }

    /// Creates a transport-failure error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    /// Creates a missing-credential error.
    pub fn unauthenticated() -> Self {
        Self::new(
            ApiErrorKind::Unauthenticated,
            "no session credential present",
        )
    }

    /// Creates a not-found error for an id the remote does not know.
    pub fn not_found(id: u64) -> Self {
        Self::new(ApiErrorKind::NotFound, format!("post {id} does not exist"))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for remote content operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: `http_status` extracts a message from a JSON error body.
    #[test]
    fn test_http_status_extracts_json_message() {
        let err = ApiError::http_status(
            ApiErrorKind::Server,
            500,
            r#"{"error":{"message":"database unavailable"}}"#,
        );
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert_eq!(err.message, "HTTP 500: database unavailable");
        assert!(err.details.is_some());
    }

    /// Test: `http_status` also accepts a top-level `message` field.
    #[test]
    fn test_http_status_top_level_message() {
        let err = ApiError::http_status(
            ApiErrorKind::AuthenticationFailed,
            401,
            r#"{"message":"bad credentials"}"#,
        );
        assert_eq!(err.message, "HTTP 401: bad credentials");
    }

    /// Test: a non-JSON body lands in details, message stays the status line.
    #[test]
    fn test_http_status_plain_body() {
        let err = ApiError::http_status(ApiErrorKind::Server, 502, "Bad Gateway");
        assert_eq!(err.message, "HTTP 502");
        assert_eq!(err.details.as_deref(), Some("Bad Gateway"));
    }

    /// Test: an empty body leaves details unset.
    #[test]
    fn test_http_status_empty_body() {
        let err = ApiError::http_status(ApiErrorKind::NotFound, 404, "");
        assert_eq!(err.message, "HTTP 404");
        assert!(err.details.is_none());
    }
}
