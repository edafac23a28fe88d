//! Prompt templates exposed over MCP.
//!
//! Prompts are pure template text generation; they make no Zendesk calls.
//! The client fills in the ticket context by invoking the tools the
//! templates reference.

use rmcp::model::{Prompt, PromptArgument};

/// Name of the ticket-analysis prompt.
pub const ANALYZE_TICKET: &str = "analyze-ticket";

/// Name of the response-drafting prompt.
pub const DRAFT_TICKET_RESPONSE: &str = "draft-ticket-response";

/// Returns the prompt catalog advertised to MCP clients.
pub fn definitions() -> Vec<Prompt> {
    vec![
        Prompt::new(
            ANALYZE_TICKET,
            Some("Analyze a Zendesk ticket's state, urgency, and next steps"),
            Some(vec![PromptArgument {
                name: "ticket_id".to_string(),
                title: None,
                description: Some("The ID of the ticket to analyze".to_string()),
                required: Some(true),
            }]),
        ),
        Prompt::new(
            DRAFT_TICKET_RESPONSE,
            Some("Draft a customer-facing response for a Zendesk ticket"),
            Some(vec![PromptArgument {
                name: "ticket_id".to_string(),
                title: None,
                description: Some("The ID of the ticket to respond to".to_string()),
                required: Some(true),
            }]),
        ),
    ]
}

/// Builds the analyze-ticket prompt text for a ticket ID.
pub fn analyze_ticket(ticket_id: u64) -> String {
    format!(
        "You are assisting with Zendesk ticket #{id}.\n\
         \n\
         1. Call get_ticket with ticket_id={id} to fetch the ticket.\n\
         2. Call get_ticket_comments with ticket_id={id} to fetch the conversation.\n\
         \n\
         Then provide:\n\
         - A one-paragraph summary of the issue and its current state.\n\
         - An assessment of urgency based on status, priority, and how long\n\
           the requester has been waiting.\n\
         - The concrete next step an agent should take, and whether the\n\
           ticket's priority or status should change (use update_ticket if so).",
        id = ticket_id
    )
}

/// Builds the draft-ticket-response prompt text for a ticket ID.
pub fn draft_ticket_response(ticket_id: u64) -> String {
    format!(
        "You are drafting a reply for Zendesk ticket #{id}.\n\
         \n\
         1. Call get_ticket with ticket_id={id} to fetch the ticket.\n\
         2. Call get_ticket_comments with ticket_id={id} to read the full\n\
            conversation so far.\n\
         \n\
         Draft a customer-facing response that:\n\
         - Acknowledges the requester's issue in their own terms.\n\
         - Answers the most recent open question or explains the current\n\
           status plainly.\n\
         - States what happens next and when.\n\
         \n\
         Show the draft for review; post it with create_ticket_comment\n\
         (public=true) only after approval.",
        id = ticket_id
    )
}
