//! Error types for the Fontory client.
//!
//! The backend surfaces failures in four distinct ways: the transport can
//! fail outright, the HTTP status can be non-2xx, the body can fail to
//! decode, or a 2xx envelope can carry a non-success `status` field. Call
//! sites must be able to tell these apart, so each gets its own variant
//! instead of collapsing into a generic "request failed".

use thiserror::Error;

/// Client result type.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response was received: DNS, connect, or timeout failure.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP error {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body, preserved verbatim (may be plain text).
        body: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A 2xx response whose envelope signals a domain-level failure.
    #[error("Service error (status {status}): {message}")]
    Service {
        /// The envelope `status` field.
        status: i64,
        /// The envelope `message` field, or a placeholder when absent.
        message: String,
    },

    /// The request was cancelled by its owning scope before completion.
    #[error("Request cancelled")]
    Cancelled,

    /// A relative path could not be joined onto the base endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Session storage read/write failure.
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Client-side payload validation failure.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns a stable discriminant string for logging and assertions.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Http { .. } => "http-error",
            Self::Decode(_) => "decode-error",
            Self::Service { .. } => "service-error",
            Self::Cancelled => "cancelled",
            Self::InvalidUrl(_) => "invalid-url",
            Self::Storage(_) => "storage",
            Self::Validation(_) => "validation",
            Self::Config(_) => "config",
        }
    }

    /// Whether the failure happened before any response was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err)
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
