//! Configuration management for the Zendesk MCP server.
//!
//! This module handles loading configuration from environment variables,
//! with validation to ensure all required values are present.

use crate::error::ZendeskError;
use std::env;

/// Configuration for connecting to Zendesk.
///
/// All fields are required and loaded from environment variables.
/// The API token is stored but never logged or exposed in error messages.
#[derive(Clone)]
pub struct Config {
    /// Zendesk subdomain (the `acme` in `acme.zendesk.com`).
    pub subdomain: String,

    /// Email address of the agent the token belongs to.
    pub email: String,

    /// Zendesk API token for authentication.
    /// This value must never be logged or included in error messages.
    pub token: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `ZENDESK_SUBDOMAIN`: The Zendesk subdomain (not a full URL)
    /// - `ZENDESK_EMAIL`: The agent email the API token belongs to
    /// - `ZENDESK_API_KEY`: The API token for authentication
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::Config` if any required variable is missing
    /// or if values fail validation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, ZendeskError> {
        let subdomain = Self::get_required_env("ZENDESK_SUBDOMAIN")?;
        let email = Self::get_required_env("ZENDESK_EMAIL")?;
        let token = Self::get_required_env("ZENDESK_API_KEY")?;

        let subdomain = Self::validate_subdomain(subdomain)?;
        Self::validate_email(&email)?;
        Self::validate_token(&token)?;

        Ok(Config {
            subdomain,
            email: email.trim().to_string(),
            token,
        })
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, ZendeskError> {
        env::var(name)
            .map_err(|_| ZendeskError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(ZendeskError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Validates and normalizes the subdomain.
    ///
    /// Users sometimes paste a full URL here; reject that early with a
    /// clear message instead of producing a garbled base URL later.
    fn validate_subdomain(subdomain: String) -> Result<String, ZendeskError> {
        let subdomain = subdomain.trim().to_lowercase();

        if subdomain.contains("://") || subdomain.contains('.') || subdomain.contains('/') {
            return Err(ZendeskError::invalid_config(
                "ZENDESK_SUBDOMAIN must be the bare subdomain (e.g. 'acme'), not a URL",
            ));
        }

        if !subdomain
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            return Err(ZendeskError::invalid_config(
                "ZENDESK_SUBDOMAIN may only contain letters, digits, and hyphens",
            ));
        }

        Ok(subdomain)
    }

    /// Validates the email has a plausible shape.
    fn validate_email(email: &str) -> Result<(), ZendeskError> {
        let email = email.trim();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(ZendeskError::invalid_config(
                "ZENDESK_EMAIL does not look like an email address",
            ));
        }
        Ok(())
    }

    /// Validates the API token is not a placeholder value.
    fn validate_token(token: &str) -> Result<(), ZendeskError> {
        let token_lower = token.to_lowercase();
        let placeholder_patterns = [
            "your_api_key",
            "your_token",
            "placeholder",
            "xxx",
            "changeme",
        ];

        for pattern in placeholder_patterns {
            if token_lower.contains(pattern) {
                return Err(ZendeskError::invalid_config(
                    "ZENDESK_API_KEY appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }
}
