//! Ticket models for the Zendesk API.
//!
//! This module defines the data structures for Zendesk tickets, including
//! the status/priority/type enumerations and list-response envelopes.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a ticket.
///
/// Zendesk's wire value for "on hold" is `hold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    /// Newly created, not yet triaged.
    New,
    /// Assigned and being worked on.
    Open,
    /// Waiting on the requester.
    Pending,
    /// Waiting on a third party.
    Hold,
    /// Resolved, awaiting confirmation.
    Solved,
    /// Closed; no further updates allowed by Zendesk.
    Closed,
}

impl TicketStatus {
    /// Returns the wire value for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::New => "new",
            TicketStatus::Open => "open",
            TicketStatus::Pending => "pending",
            TicketStatus::Hold => "hold",
            TicketStatus::Solved => "solved",
            TicketStatus::Closed => "closed",
        }
    }
}

/// Priority of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    /// Low priority.
    Low,
    /// Normal priority (Zendesk's default).
    Normal,
    /// High priority.
    High,
    /// Urgent priority.
    Urgent,
}

impl TicketPriority {
    /// Returns the wire value for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Normal => "normal",
            TicketPriority::High => "high",
            TicketPriority::Urgent => "urgent",
        }
    }
}

/// Classification of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    /// Something is broken for multiple users.
    Problem,
    /// A single occurrence of a problem.
    Incident,
    /// A question from a user.
    Question,
    /// A task for an agent.
    Task,
}

impl TicketType {
    /// Returns the wire value for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Problem => "problem",
            TicketType::Incident => "incident",
            TicketType::Question => "question",
            TicketType::Task => "task",
        }
    }
}

/// A custom field value on a ticket.
///
/// Zendesk represents custom fields as an ordered sequence of
/// `{id, value}` pairs; the value type depends on the field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CustomField {
    /// The custom field definition ID.
    pub id: u64,

    /// The field value (string, number, boolean, or null).
    pub value: serde_json::Value,
}

/// A Zendesk support ticket.
///
/// Fields are a subset of Zendesk's canonical ticket representation;
/// unknown fields in API responses are ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID.
    pub id: u64,

    /// Ticket subject line.
    #[serde(default)]
    pub subject: Option<String>,

    /// Full description (the body of the first comment).
    #[serde(default)]
    pub description: Option<String>,

    /// Lifecycle status.
    #[serde(default)]
    pub status: Option<TicketStatus>,

    /// Priority level.
    #[serde(default)]
    pub priority: Option<TicketPriority>,

    /// Ticket classification.
    #[serde(rename = "type", default)]
    pub ticket_type: Option<TicketType>,

    /// ID of the user who requested the ticket.
    #[serde(default)]
    pub requester_id: Option<u64>,

    /// ID of the agent the ticket is assigned to.
    #[serde(default)]
    pub assignee_id: Option<u64>,

    /// Tags attached to the ticket.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Custom field values.
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,

    /// Due date for task tickets (ISO 8601).
    #[serde(default)]
    pub due_at: Option<String>,

    /// When the ticket was created (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// When the ticket was last updated (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Ticket {
    /// Returns the subject or a placeholder.
    pub fn display_subject(&self) -> &str {
        self.subject.as_deref().unwrap_or("(No subject)")
    }
}

/// Response wrapper for single ticket operations.
///
/// Zendesk wraps single tickets as `{"ticket": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetTicketResponse {
    /// The ticket payload.
    pub ticket: Ticket,
}

/// Response wrapper for `GET /api/v2/tickets`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListTicketsResponse {
    /// Tickets on this page.
    #[serde(default)]
    pub tickets: Vec<Ticket>,

    /// Absolute URL of the next page, if any.
    #[serde(default)]
    pub next_page: Option<String>,

    /// Absolute URL of the previous page, if any.
    #[serde(default)]
    pub previous_page: Option<String>,

    /// Total number of matching tickets.
    #[serde(default)]
    pub count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(TicketStatus::Hold.as_str(), "hold");
        assert_eq!(TicketStatus::Solved.as_str(), "solved");
        let status: TicketStatus = serde_json::from_str(r#""hold""#).unwrap();
        assert_eq!(status, TicketStatus::Hold);
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        let result: Result<TicketStatus, _> = serde_json::from_str(r#""archived""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_priority_rejects_unknown_value() {
        let result: Result<TicketPriority, _> = serde_json::from_str(r#""severe""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_ticket_deserialize_minimal() {
        let json = r#"{"id": 35436}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, 35436);
        assert!(ticket.subject.is_none());
        assert!(ticket.tags.is_empty());
        assert_eq!(ticket.display_subject(), "(No subject)");
    }

    #[test]
    fn test_ticket_deserialize_full() {
        let json = r#"{
            "id": 35436,
            "subject": "Printer on fire",
            "description": "The printer is literally on fire.",
            "status": "open",
            "priority": "urgent",
            "type": "incident",
            "requester_id": 20978392,
            "assignee_id": 235323,
            "tags": ["hardware", "fire"],
            "custom_fields": [{"id": 27642, "value": "745"}],
            "due_at": null,
            "created_at": "2026-02-06T10:32:28Z",
            "updated_at": "2026-02-06T12:05:10Z",
            "url": "https://acme.zendesk.com/api/v2/tickets/35436.json"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.subject.as_deref(), Some("Printer on fire"));
        assert_eq!(ticket.status, Some(TicketStatus::Open));
        assert_eq!(ticket.priority, Some(TicketPriority::Urgent));
        assert_eq!(ticket.ticket_type, Some(TicketType::Incident));
        assert_eq!(ticket.tags.len(), 2);
        assert_eq!(ticket.custom_fields[0].id, 27642);
    }

    #[test]
    fn test_list_tickets_response_deserialize() {
        let json = r#"{
            "tickets": [{"id": 1}, {"id": 2}],
            "next_page": "https://acme.zendesk.com/api/v2/tickets.json?page=2",
            "previous_page": null,
            "count": 150
        }"#;
        let response: ListTicketsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.tickets.len(), 2);
        assert!(response.next_page.is_some());
        assert_eq!(response.count, Some(150));
    }
}
