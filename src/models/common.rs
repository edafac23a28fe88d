//! Enumerations shared between tool inputs and API query parameters.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

/// Field to sort ticket listings by.
///
/// These are the sort fields Zendesk accepts on `GET /api/v2/tickets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Sort by ticket creation time.
    CreatedAt,
    /// Sort by last update time.
    UpdatedAt,
    /// Sort by priority.
    Priority,
    /// Sort by status.
    Status,
}

impl SortBy {
    /// Returns the wire value used in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::CreatedAt => "created_at",
            SortBy::UpdatedAt => "updated_at",
            SortBy::Priority => "priority",
            SortBy::Status => "status",
        }
    }
}

/// Sort direction for ticket listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Returns the wire value used in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}
