//! Zendesk MCP server binary.
//!
//! This binary runs as an MCP server using stdio transport, allowing an
//! LLM-driven client (e.g., a desktop assistant) to work with Zendesk
//! tickets and help-center articles through natural language.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `ZENDESK_SUBDOMAIN`: The Zendesk subdomain (the `acme` in `acme.zendesk.com`)
//! - `ZENDESK_EMAIL`: Agent email the API token belongs to
//! - `ZENDESK_API_KEY`: API token for authentication
//!
//! # Usage
//!
//! ```bash
//! # Direct execution
//! ./zendesk
//!
//! # With environment variables
//! ZENDESK_SUBDOMAIN=acme ZENDESK_EMAIL=agent@example.com ZENDESK_API_KEY=xxx ./zendesk
//! ```

use anyhow::{Context, Result};
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{fmt, EnvFilter};

use zendesk::{config, server, zendesk_client};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Initialize logging to stderr (critical for stdio transport!)
    // stdout is reserved for MCP JSON-RPC messages
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zendesk=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting Zendesk MCP server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from environment; missing credentials are fatal
    let config = config::Config::from_env().context("Failed to load configuration")?;

    tracing::debug!("Configuration loaded, subdomain: {}", config.subdomain);

    // Create the Zendesk client
    let client =
        zendesk_client::ZendeskClient::new(&config).context("Failed to create Zendesk client")?;

    tracing::debug!("Zendesk client initialized");

    // Test connection to Zendesk before starting
    tracing::info!("Testing connection to Zendesk...");
    if let Err(e) = client.test_connection().await {
        tracing::error!(error = %e.sanitized_display(&config.token), "Connection test failed");
        // Continue anyway - the instance might become available later
        tracing::warn!(
            "Server will start but may not be able to reach Zendesk. \
             Check configuration and network connectivity."
        );
    }

    // Create the MCP server
    let server = server::ZendeskServer::new(client);

    tracing::info!("Server initialized, starting stdio transport");

    // Serve on stdio transport
    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })
        .context("Failed to start server")?;

    tracing::info!("Server running, waiting for requests");

    // Wait for the service to complete (shutdown signal)
    service
        .waiting()
        .await
        .context("Server error during operation")?;

    tracing::info!("Server shutting down");

    Ok(())
}
