//! MCP tool implementations for the Zendesk server.
//!
//! This module contains the input types for the MCP tools that expose
//! Zendesk operations.

mod inputs;

pub use inputs::*;
