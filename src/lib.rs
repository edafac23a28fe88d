//! # Zendesk MCP Server
//!
//! An MCP (Model Context Protocol) server for Zendesk Support.
//!
//! It exposes Zendesk ticket operations as MCP tools, the help-center
//! knowledge base as a read-only resource, and two ticket-work prompts,
//! enabling AI assistants to manage support tickets through natural
//! language.
//!
//! ## Features
//!
//! - **Read operations**: List tickets with pagination and sorting, view
//!   single tickets, read comment threads
//! - **Write operations**: Create tickets, apply partial updates, add
//!   public or internal comments
//! - **Knowledge base**: The `zendesk://knowledge-base` resource exposes
//!   all help-center articles
//! - **Prompts**: `analyze-ticket` and `draft-ticket-response` templates
//! - **Security**: the API token is never logged or exposed in error
//!   messages
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error types with security-conscious message sanitization
//! - [`zendesk_client`] - HTTP client for the Zendesk REST API
//! - [`server`] - MCP server implementation with tool routing
//! - [`models`] - Data models for Zendesk API payloads
//! - [`shape`] - Pure projections onto the declared tool output shapes
//! - [`tools`] - Tool input parameter structs
//! - [`prompts`] - Prompt catalog and templates
//!
//! ## Usage
//!
//! The crate is primarily used as a binary. To run:
//!
//! ```bash
//! # Set required environment variables
//! export ZENDESK_SUBDOMAIN=acme
//! export ZENDESK_EMAIL=agent@example.com
//! export ZENDESK_API_KEY=your-api-token
//!
//! # Run the server
//! ./zendesk
//! ```
//!
//! ## Configuration
//!
//! Three environment variables are required:
//!
//! - `ZENDESK_SUBDOMAIN`: The Zendesk subdomain (the `acme` in
//!   `acme.zendesk.com`)
//! - `ZENDESK_EMAIL`: Agent email the API token belongs to
//! - `ZENDESK_API_KEY`: API token for authentication
//!
//! Optional:
//! - `RUST_LOG`: Log level (e.g., `zendesk=debug`)
//!
//! Missing or invalid credentials abort startup; there is no partial
//! service.
//!
//! ## Security Considerations
//!
//! The API token is stored only in memory and is:
//! - Never logged at any log level
//! - Sanitized from all error messages
//! - Not included in any tool responses

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod prompts;
pub mod server;
pub mod shape;
pub mod tools;
pub mod zendesk_client;
