//! Response shaping for tool and resource outputs.
//!
//! Every tool declares a reduced output shape; the functions here project
//! raw Zendesk payloads onto those shapes. Shaping is a pure projection -
//! it filters and renames fields, never invents them, and the same input
//! always serializes to byte-identical output.

use serde::Serialize;

use crate::models::{Article, Comment, CustomField, ListTicketsResponse, Ticket};

/// Reduced ticket shape for list results.
#[derive(Debug, Clone, Serialize)]
pub struct TicketSummary {
    /// Ticket ID.
    pub id: u64,
    /// Subject line.
    pub subject: Option<String>,
    /// Status wire value.
    pub status: Option<String>,
    /// Priority wire value.
    pub priority: Option<String>,
    /// Full description.
    pub description: Option<String>,
    /// Assigned agent ID.
    pub assignee_id: Option<u64>,
    /// Creation timestamp (ISO 8601).
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601).
    pub updated_at: Option<String>,
}

/// Full ticket shape for single-ticket results.
#[derive(Debug, Clone, Serialize)]
pub struct TicketView {
    /// Ticket ID.
    pub id: u64,
    /// Subject line.
    pub subject: Option<String>,
    /// Full description.
    pub description: Option<String>,
    /// Status wire value.
    pub status: Option<String>,
    /// Priority wire value.
    pub priority: Option<String>,
    /// Ticket type wire value.
    #[serde(rename = "type")]
    pub ticket_type: Option<String>,
    /// Requester user ID.
    pub requester_id: Option<u64>,
    /// Assigned agent ID.
    pub assignee_id: Option<u64>,
    /// Tags attached to the ticket.
    pub tags: Vec<String>,
    /// Custom field values.
    pub custom_fields: Vec<CustomField>,
    /// Due date for task tickets (ISO 8601).
    pub due_at: Option<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601).
    pub updated_at: Option<String>,
}

/// One page of shaped tickets with pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct TicketPage {
    /// Shaped tickets on this page.
    pub tickets: Vec<TicketSummary>,
    /// Page number the caller requested.
    pub page: u32,
    /// Page size the caller requested (after clamping).
    pub per_page: u32,
    /// Total number of matching tickets, if Zendesk reported it.
    pub count: Option<u64>,
    /// Whether another page exists.
    pub has_more: bool,
}

/// Reduced comment shape.
#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    /// Comment ID.
    pub id: u64,
    /// Author user ID.
    pub author_id: Option<u64>,
    /// Plain-text body.
    pub body: Option<String>,
    /// HTML body.
    pub html_body: Option<String>,
    /// Whether the comment is visible to the requester.
    pub public: Option<bool>,
    /// Creation timestamp (ISO 8601).
    pub created_at: Option<String>,
}

/// Reduced help-center article shape.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleView {
    /// Article ID.
    pub id: u64,
    /// Article title.
    pub title: Option<String>,
    /// Article body (HTML).
    pub body: Option<String>,
    /// Section the article belongs to.
    pub section_id: Option<u64>,
    /// Public URL.
    pub html_url: Option<String>,
    /// Last update timestamp (ISO 8601).
    pub updated_at: Option<String>,
}

/// Projects a ticket onto the list-result shape.
pub fn shape_ticket_summary(ticket: &Ticket) -> TicketSummary {
    TicketSummary {
        id: ticket.id,
        subject: ticket.subject.clone(),
        status: ticket.status.map(|s| s.as_str().to_string()),
        priority: ticket.priority.map(|p| p.as_str().to_string()),
        description: ticket.description.clone(),
        assignee_id: ticket.assignee_id,
        created_at: ticket.created_at.clone(),
        updated_at: ticket.updated_at.clone(),
    }
}

/// Projects a ticket onto the single-ticket shape.
pub fn shape_ticket(ticket: &Ticket) -> TicketView {
    TicketView {
        id: ticket.id,
        subject: ticket.subject.clone(),
        description: ticket.description.clone(),
        status: ticket.status.map(|s| s.as_str().to_string()),
        priority: ticket.priority.map(|p| p.as_str().to_string()),
        ticket_type: ticket.ticket_type.map(|t| t.as_str().to_string()),
        requester_id: ticket.requester_id,
        assignee_id: ticket.assignee_id,
        tags: ticket.tags.clone(),
        custom_fields: ticket.custom_fields.clone(),
        due_at: ticket.due_at.clone(),
        created_at: ticket.created_at.clone(),
        updated_at: ticket.updated_at.clone(),
    }
}

/// Projects a ticket list response onto a page with pagination metadata.
pub fn shape_ticket_page(response: &ListTicketsResponse, page: u32, per_page: u32) -> TicketPage {
    TicketPage {
        tickets: response.tickets.iter().map(shape_ticket_summary).collect(),
        page,
        per_page,
        count: response.count,
        has_more: response.next_page.is_some(),
    }
}

/// Projects a comment onto the reduced comment shape.
pub fn shape_comment(comment: &Comment) -> CommentView {
    CommentView {
        id: comment.id,
        author_id: comment.author_id,
        body: comment.body.clone(),
        html_body: comment.html_body.clone(),
        public: comment.public,
        created_at: comment.created_at.clone(),
    }
}

/// Projects an article onto the reduced article shape.
pub fn shape_article(article: &Article) -> ArticleView {
    ArticleView {
        id: article.id,
        title: article.title.clone(),
        body: article.body.clone(),
        section_id: article.section_id,
        html_url: article.html_url.clone(),
        updated_at: article.updated_at.clone(),
    }
}
