//! Data models for the Zendesk REST API.
//!
//! This module contains type definitions for the Zendesk API, including
//! ticket models, comment models, help-center article models, and the
//! enumerations shared between tool inputs and API payloads.

mod article;
mod comment;
mod common;
mod ticket;

pub use article::*;
pub use comment::*;
pub use common::*;
pub use ticket::*;
