//! Tool input parameter structs for MCP tools.
//!
//! This module defines the input types for each MCP tool, with
//! JSON Schema derivation for MCP tool discovery. The schemas double as
//! the validation layer: enumerated fields use typed enums, so an
//! out-of-set value fails deserialization before any upstream call.
//!
//! # Input Sanitization
//!
//! String-carrying input structs implement `sanitize()` which trims
//! whitespace. This should be called before processing input.

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;

use crate::models::{CustomField, SortBy, SortOrder, TicketPriority, TicketStatus, TicketType};

/// Helper function to trim an optional string.
fn trim_option(s: &Option<String>) -> Option<String> {
    s.as_ref()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Input parameters for the get_tickets tool.
///
/// All fields are optional; defaults are first page, 25 tickets.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTicketsInput {
    /// Page number to fetch (1-based, default: 1).
    #[serde(default)]
    pub page: Option<u32>,

    /// Tickets per page (default: 25, max: 100; larger values are clamped).
    #[serde(default)]
    pub per_page: Option<u32>,

    /// Field to sort by: 'created_at', 'updated_at', 'priority', or 'status'.
    #[serde(default)]
    pub sort_by: Option<SortBy>,

    /// Sort direction: 'asc' or 'desc'. Requires sort_by; defaults to 'asc'
    /// when sort_by is given alone.
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
}

/// Input parameters for the get_ticket tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTicketInput {
    /// The numeric ID of the ticket to retrieve.
    pub ticket_id: u64,
}

/// Input parameters for the get_ticket_comments tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTicketCommentsInput {
    /// The numeric ID of the ticket to get comments for.
    pub ticket_id: u64,
}

/// Input parameters for the create_ticket_comment tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateTicketCommentInput {
    /// The numeric ID of the ticket to comment on.
    pub ticket_id: u64,

    /// The comment text to add.
    pub comment: String,

    /// Whether the comment is visible to the requester. Default: true.
    #[serde(default)]
    pub public: Option<bool>,
}

impl CreateTicketCommentInput {
    /// Sanitizes input by trimming whitespace from the comment text.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            ticket_id: self.ticket_id,
            comment: self.comment.trim().to_string(),
            public: self.public,
        }
    }
}

/// Input parameters for the create_ticket tool.
///
/// Subject and description are required. All other fields are optional.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateTicketInput {
    /// Ticket subject/title (required).
    pub subject: String,

    /// Detailed description of the issue; becomes the first comment.
    pub description: String,

    /// ID of the user requesting the ticket.
    #[serde(default)]
    pub requester_id: Option<u64>,

    /// ID of the agent to assign the ticket to.
    #[serde(default)]
    pub assignee_id: Option<u64>,

    /// Priority level: 'low', 'normal', 'high', or 'urgent'.
    #[serde(default)]
    pub priority: Option<TicketPriority>,

    /// Ticket type: 'problem', 'incident', 'question', or 'task'.
    #[serde(rename = "type", default)]
    pub ticket_type: Option<TicketType>,

    /// Tags to attach to the ticket.
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Custom field values as `{id, value}` pairs.
    #[serde(default)]
    pub custom_fields: Option<Vec<CustomField>>,

    /// Due date for task tickets (ISO 8601).
    #[serde(default)]
    pub due_at: Option<String>,
}

impl CreateTicketInput {
    /// Sanitizes input by trimming whitespace from string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            subject: self.subject.trim().to_string(),
            description: self.description.trim().to_string(),
            requester_id: self.requester_id,
            assignee_id: self.assignee_id,
            priority: self.priority,
            ticket_type: self.ticket_type,
            tags: self.tags,
            custom_fields: self.custom_fields,
            due_at: trim_option(&self.due_at),
        }
    }
}

/// Input parameters for the update_ticket tool.
///
/// Ticket ID is required. At least one other field must be provided;
/// unspecified fields are left unchanged on the remote ticket.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateTicketInput {
    /// The numeric ID of the ticket to update.
    pub ticket_id: u64,

    /// New subject/title.
    #[serde(default)]
    pub subject: Option<String>,

    /// New status: 'new', 'open', 'pending', 'hold', 'solved', or 'closed'.
    #[serde(default)]
    pub status: Option<TicketStatus>,

    /// New priority: 'low', 'normal', 'high', or 'urgent'.
    #[serde(default)]
    pub priority: Option<TicketPriority>,

    /// New ticket type: 'problem', 'incident', 'question', or 'task'.
    #[serde(rename = "type", default)]
    pub ticket_type: Option<TicketType>,

    /// New requester user ID.
    #[serde(default)]
    pub requester_id: Option<u64>,

    /// Agent ID to reassign the ticket to.
    #[serde(default)]
    pub assignee_id: Option<u64>,

    /// Replacement tag set.
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Custom field values to set as `{id, value}` pairs.
    #[serde(default)]
    pub custom_fields: Option<Vec<CustomField>>,

    /// New due date (ISO 8601).
    #[serde(default)]
    pub due_at: Option<String>,
}

impl UpdateTicketInput {
    /// Returns true if at least one field besides ticket_id is set.
    pub fn has_updates(&self) -> bool {
        self.subject.is_some()
            || self.status.is_some()
            || self.priority.is_some()
            || self.ticket_type.is_some()
            || self.requester_id.is_some()
            || self.assignee_id.is_some()
            || self.tags.is_some()
            || self.custom_fields.is_some()
            || self.due_at.is_some()
    }

    /// Sanitizes input by trimming whitespace from string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            ticket_id: self.ticket_id,
            subject: trim_option(&self.subject),
            status: self.status,
            priority: self.priority,
            ticket_type: self.ticket_type,
            requester_id: self.requester_id,
            assignee_id: self.assignee_id,
            tags: self.tags,
            custom_fields: self.custom_fields,
            due_at: trim_option(&self.due_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Sanitization tests
    // ========================================================================

    #[test]
    fn test_trim_option_trims_whitespace() {
        let s = Some("  hello  ".to_string());
        assert_eq!(trim_option(&s), Some("hello".to_string()));
    }

    #[test]
    fn test_trim_option_filters_empty() {
        let s = Some("   ".to_string());
        assert_eq!(trim_option(&s), None);
    }

    #[test]
    fn test_trim_option_none_stays_none() {
        let s: Option<String> = None;
        assert_eq!(trim_option(&s), None);
    }

    #[test]
    fn test_create_ticket_input_sanitize() {
        let input = CreateTicketInput {
            subject: "  Printer on fire  ".to_string(),
            description: "  It burns.  ".to_string(),
            requester_id: Some(123),
            assignee_id: None,
            priority: Some(TicketPriority::Urgent),
            ticket_type: None,
            tags: None,
            custom_fields: None,
            due_at: Some("   ".to_string()),
        };
        let sanitized = input.sanitize();
        assert_eq!(sanitized.subject, "Printer on fire");
        assert_eq!(sanitized.description, "It burns.");
        assert_eq!(sanitized.due_at, None); // Whitespace-only becomes None
        assert_eq!(sanitized.priority, Some(TicketPriority::Urgent));
    }

    #[test]
    fn test_create_ticket_comment_input_sanitize() {
        let input = CreateTicketCommentInput {
            ticket_id: 42,
            comment: "  Looking into it.  ".to_string(),
            public: None,
        };
        let sanitized = input.sanitize();
        assert_eq!(sanitized.comment, "Looking into it.");
        assert_eq!(sanitized.ticket_id, 42);
    }

    // ========================================================================
    // Deserialization tests
    // ========================================================================

    #[test]
    fn test_get_tickets_input_deserialize_empty() {
        let json = "{}";
        let input: GetTicketsInput = serde_json::from_str(json).unwrap();
        assert!(input.page.is_none());
        assert!(input.per_page.is_none());
        assert!(input.sort_by.is_none());
    }

    #[test]
    fn test_get_tickets_input_deserialize_full() {
        let json = r#"{"page": 2, "per_page": 50, "sort_by": "priority", "sort_order": "desc"}"#;
        let input: GetTicketsInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.page, Some(2));
        assert_eq!(input.per_page, Some(50));
        assert_eq!(input.sort_by, Some(SortBy::Priority));
        assert_eq!(input.sort_order, Some(SortOrder::Desc));
    }

    #[test]
    fn test_get_tickets_input_rejects_bad_sort() {
        let json = r#"{"sort_by": "subject"}"#;
        let result: Result<GetTicketsInput, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_ticket_input_rejects_non_integer_id() {
        let json = r#"{"ticket_id": "abc"}"#;
        let result: Result<GetTicketInput, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_ticket_comment_input_defaults() {
        let json = r#"{"ticket_id": 42, "comment": "On it."}"#;
        let input: CreateTicketCommentInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.ticket_id, 42);
        assert!(input.public.is_none());
    }

    #[test]
    fn test_create_ticket_input_minimal() {
        let json = r#"{"subject": "X", "description": "Y"}"#;
        let input: CreateTicketInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.subject, "X");
        assert_eq!(input.description, "Y");
        assert!(input.priority.is_none());
        assert!(input.tags.is_none());
    }

    #[test]
    fn test_create_ticket_input_requires_description() {
        let json = r#"{"subject": "X"}"#;
        let result: Result<CreateTicketInput, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_ticket_input_rejects_bad_priority() {
        let json = r#"{"subject": "X", "description": "Y", "priority": "severe"}"#;
        let result: Result<CreateTicketInput, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_ticket_input_full() {
        let json = r#"{
            "subject": "Printer on fire",
            "description": "It burns.",
            "requester_id": 20978392,
            "assignee_id": 235323,
            "priority": "urgent",
            "type": "incident",
            "tags": ["hardware", "fire"],
            "custom_fields": [{"id": 27642, "value": "745"}],
            "due_at": "2026-03-01T00:00:00Z"
        }"#;
        let input: CreateTicketInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.priority, Some(TicketPriority::Urgent));
        assert_eq!(input.ticket_type, Some(TicketType::Incident));
        assert_eq!(input.tags.as_ref().unwrap().len(), 2);
        assert_eq!(input.custom_fields.as_ref().unwrap()[0].id, 27642);
    }

    #[test]
    fn test_update_ticket_input_has_updates() {
        let json = r#"{"ticket_id": 123}"#;
        let input: UpdateTicketInput = serde_json::from_str(json).unwrap();
        assert!(!input.has_updates());

        let json = r#"{"ticket_id": 123, "priority": "high"}"#;
        let input: UpdateTicketInput = serde_json::from_str(json).unwrap();
        assert!(input.has_updates());
        assert_eq!(input.priority, Some(TicketPriority::High));
    }

    #[test]
    fn test_update_ticket_input_rejects_bad_status() {
        let json = r#"{"ticket_id": 123, "status": "archived"}"#;
        let result: Result<UpdateTicketInput, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
