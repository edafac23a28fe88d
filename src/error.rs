//! Error types for the Zendesk MCP server.
//!
//! This module defines `ZendeskError`, the unified error type used throughout
//! the application for consistent error handling and propagation.
//!
//! # Security
//!
//! All error messages are sanitized to ensure the API token is never leaked
//! in logs or error responses. Use `sanitize_message()` when constructing
//! error messages from external sources.

use thiserror::Error;

/// Unified error type for all Zendesk MCP server operations.
///
/// Each variant provides specific context about the failure, enabling
/// meaningful error messages without leaking sensitive information
/// like the API token.
#[derive(Error, Debug)]
pub enum ZendeskError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// A tool argument failed validation before any upstream call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Requested resource was not found (HTTP 404).
    #[error("not found: {resource}")]
    NotFound {
        /// Description of the resource that was not found (e.g., "ticket 42").
        resource: String,
    },

    /// Authentication failed - likely bad credentials (HTTP 401/403).
    #[error("authentication failed - check ZENDESK_EMAIL and ZENDESK_API_KEY")]
    Authentication,

    /// Rate limited by Zendesk (HTTP 429).
    #[error("rate limited by Zendesk - wait before retrying")]
    RateLimited,

    /// HTTP response returned a non-success status code.
    #[error("Zendesk API returned HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The (sanitized, truncated) response body.
        body: String,
    },

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse error classification exposed to MCP clients.
///
/// Every `ZendeskError` maps onto exactly one of these kinds; the kind
/// prefixes the error string returned from tool calls so clients can react
/// without parsing free-form text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Schema or argument validation failure; no upstream call was made.
    InvalidArgument,
    /// The referenced ticket or resource does not exist.
    NotFound,
    /// The Zendesk API call failed (network, auth, rate limit, or 5xx).
    Upstream,
    /// Missing or invalid credentials at startup.
    Configuration,
}

impl ErrorKind {
    /// Returns the stable string label for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Upstream => "upstream_error",
            ErrorKind::Configuration => "configuration_error",
        }
    }
}

impl ZendeskError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        ZendeskError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ZendeskError::Config(message.into())
    }

    /// Creates an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ZendeskError::InvalidArgument(message.into())
    }

    /// Creates a not-found error for a resource description.
    pub fn not_found(resource: impl Into<String>) -> Self {
        ZendeskError::NotFound {
            resource: resource.into(),
        }
    }

    /// Classifies this error into one of the four client-facing kinds.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ZendeskError::Config(_) => ErrorKind::Configuration,
            ZendeskError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ZendeskError::NotFound { .. } => ErrorKind::NotFound,
            ZendeskError::Authentication
            | ZendeskError::RateLimited
            | ZendeskError::HttpStatus { .. }
            | ZendeskError::Http(_)
            | ZendeskError::HttpClient(_)
            | ZendeskError::Serialization(_) => ErrorKind::Upstream,
        }
    }

    /// Sanitizes an error message to remove any occurrence of the API token.
    ///
    /// This is critical for security - the token must never appear in logs,
    /// error messages, or responses to users.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `token` - The API token to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the token replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, token: &str) -> String {
        if token.is_empty() {
            return message.to_string();
        }
        message.replace(token, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    ///
    /// Use this when you need to include error details in logs or responses
    /// and want to ensure no sensitive data is leaked.
    #[must_use]
    pub fn sanitized_display(&self, token: &str) -> String {
        Self::sanitize_message(&self.to_string(), token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = ZendeskError::missing_env("ZENDESK_API_KEY");
        assert!(err.to_string().contains("ZENDESK_API_KEY"));
        assert!(err.to_string().contains("missing"));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = ZendeskError::invalid_argument("subject is required");
        assert_eq!(err.to_string(), "invalid argument: subject is required");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_not_found_error() {
        let err = ZendeskError::not_found("ticket 12345");
        assert_eq!(err.to_string(), "not found: ticket 12345");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_upstream_kinds() {
        assert_eq!(ZendeskError::Authentication.kind(), ErrorKind::Upstream);
        assert_eq!(ZendeskError::RateLimited.kind(), ErrorKind::Upstream);
        let err = ZendeskError::HttpStatus {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: "upstream down".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Upstream);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ErrorKind::InvalidArgument.as_str(), "invalid_argument");
        assert_eq!(ErrorKind::NotFound.as_str(), "not_found");
        assert_eq!(ErrorKind::Upstream.as_str(), "upstream_error");
        assert_eq!(ErrorKind::Configuration.as_str(), "configuration_error");
    }

    #[test]
    fn test_sanitize_message_removes_token() {
        let token = "super_secret_token_12345";
        let message = format!("Error connecting with token {} to server", token);
        let sanitized = ZendeskError::sanitize_message(&message, token);
        assert!(!sanitized.contains(token));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_token() {
        let message = "Some error message";
        let sanitized = ZendeskError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_sanitize_message_no_match() {
        let message = "Some error message";
        let sanitized = ZendeskError::sanitize_message(message, "not_present");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_sanitized_display() {
        let err = ZendeskError::HttpStatus {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "token=abc123 rejected".to_string(),
        };
        let msg = err.sanitized_display("abc123");
        assert!(!msg.contains("abc123"));
        assert!(msg.contains("[REDACTED]"));
    }
}
