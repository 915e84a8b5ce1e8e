//! Error types for the marvel-api crate.
//!
//! This module defines the error types that can occur when talking to the
//! Marvel API: transport failures, non-success HTTP statuses, malformed
//! response bodies and client misconfiguration.

use serde_json::Value;

/// The main error type for this crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed (DNS, connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON for the expected envelope
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration (missing public key, bad rate limit, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Query parameters could not be flattened into a query string
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Resource / relation / id combination has no endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// API returned a non-success status
    #[error("API error ({}): {}", .0.status, .0.message)]
    Api(ApiError),
}

impl Error {
    /// Check if the underlying transport timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }
}

/// Error returned by the Marvel API
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Error code from API (if provided, e.g. "InvalidCredentials")
    pub code: Option<String>,
    /// Error message
    pub message: String,
    /// Raw response body
    pub body: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status,
            code: None,
            body: message.clone(),
            message,
        }
    }

    /// Build an API error from a status and raw body.
    ///
    /// Marvel error bodies look like `{"code": 409, "status": "..."}` or
    /// `{"code": "InvalidCredentials", "message": "..."}`; anything else
    /// keeps the body as the message.
    pub fn from_body(status: u16, body: String) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(&body) else {
            return Self {
                status,
                code: None,
                message: body.clone(),
                body,
            };
        };

        let message = value
            .get("message")
            .or_else(|| value.get("status"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| body.clone());

        let code = value.get("code").and_then(|c| match c {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });

        Self {
            status,
            code,
            message,
            body,
        }
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Upstream throttling (429)
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    /// Rejected credentials or signature (401)
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}
