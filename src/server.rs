//! MCP server implementation for the Zendesk bridge.
//!
//! This module defines the `ZendeskServer` struct that implements the MCP
//! `ServerHandler` trait, exposing Zendesk operations as tools, the
//! help-center knowledge base as a resource, and two ticket-work prompts.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        AnnotateAble, ErrorData, GetPromptRequestParam, GetPromptResult, JsonObject,
        ListPromptsResult, ListResourcesResult, PaginatedRequestParam, PromptMessage,
        PromptMessageContent, PromptMessageRole, RawResource, ReadResourceRequestParam,
        ReadResourceResult, ResourceContents, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router, ServerHandler,
};

use crate::error::ZendeskError;
use crate::models::NewComment;
use crate::prompts;
use crate::shape;
use crate::tools::{
    CreateTicketCommentInput, CreateTicketInput, GetTicketCommentsInput, GetTicketInput,
    GetTicketsInput, UpdateTicketInput,
};
use crate::zendesk_client::{ListTicketsParams, ZendeskClient};

/// URI of the read-only knowledge-base resource.
pub const KNOWLEDGE_BASE_URI: &str = "zendesk://knowledge-base";

/// The Zendesk MCP server.
///
/// This server exposes Zendesk ticket and help-center operations as MCP
/// tools, resources, and prompts.
#[derive(Clone)]
pub struct ZendeskServer {
    /// Zendesk client for API operations.
    client: ZendeskClient,
    /// Tool router for MCP tool dispatch.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ZendeskServer {
    /// Creates a new Zendesk server instance.
    ///
    /// # Arguments
    ///
    /// * `client` - The Zendesk client for API operations
    pub fn new(client: ZendeskClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// A simple ping tool to verify the server is running.
    ///
    /// Returns "pong" on success without contacting Zendesk.
    #[tool(description = "Test connectivity to the Zendesk MCP server. Returns 'pong' if the server is running correctly.")]
    fn ping(&self) -> String {
        tracing::debug!("ping tool called");
        "pong".to_string()
    }

    /// List tickets with pagination and sorting.
    ///
    /// Returns a reduced ticket shape plus pagination metadata.
    #[tool(description = "List Zendesk tickets with pagination. Supports sorting by created_at, updated_at, priority, or status. Returns ticket ID, subject, status, priority, and pagination metadata.")]
    async fn get_tickets(
        &self,
        Parameters(input): Parameters<GetTicketsInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "get_tickets tool called");

        let mut params = ListTicketsParams::new();
        if let Some(page) = input.page {
            params = params.with_page(page);
        }
        if let Some(per_page) = input.per_page {
            // Policy: values above the Zendesk maximum are clamped, not rejected.
            params = params.with_per_page(per_page);
        }
        if input.sort_order.is_some() && input.sort_by.is_none() {
            return Err(self.tool_error(&ZendeskError::invalid_argument(
                "sort_order requires sort_by",
            )));
        }
        if let Some(sort_by) = input.sort_by {
            let sort_order = input.sort_order.unwrap_or(crate::models::SortOrder::Asc);
            params = params.with_sort(sort_by, sort_order);
        }

        let page = params.page();
        let per_page = params.per_page();

        let response = self.client.list_tickets(params).await.map_err(|e| {
            let message = self.tool_error(&e);
            tracing::error!(error = %message, "Failed to list tickets");
            message
        })?;

        let shaped = shape::shape_ticket_page(&response, page, per_page);
        to_json_text(&shaped)
    }

    /// Get a single ticket by its ID.
    #[tool(description = "Retrieve a Zendesk ticket by its ID. Returns the full ticket including status, priority, type, tags, and custom fields.")]
    async fn get_ticket(
        &self,
        Parameters(input): Parameters<GetTicketInput>,
    ) -> Result<String, String> {
        tracing::debug!(ticket_id = input.ticket_id, "get_ticket tool called");

        let ticket = self.client.get_ticket(input.ticket_id).await.map_err(|e| {
            let message = self.tool_error(&e);
            tracing::error!(error = %message, ticket_id = input.ticket_id, "Failed to get ticket");
            message
        })?;

        to_json_text(&shape::shape_ticket(&ticket))
    }

    /// Get all comments on a ticket, in chronological order.
    #[tool(description = "Retrieve all comments for a Zendesk ticket by its ID, in chronological order.")]
    async fn get_ticket_comments(
        &self,
        Parameters(input): Parameters<GetTicketCommentsInput>,
    ) -> Result<String, String> {
        tracing::debug!(ticket_id = input.ticket_id, "get_ticket_comments tool called");

        let response = self.client.list_comments(input.ticket_id).await.map_err(|e| {
            let message = self.tool_error(&e);
            tracing::error!(error = %message, ticket_id = input.ticket_id, "Failed to get comments");
            message
        })?;

        let shaped: Vec<_> = response.comments.iter().map(shape::shape_comment).collect();
        to_json_text(&shaped)
    }

    /// Add a comment to an existing ticket.
    ///
    /// The comment is public (visible to the requester) unless `public`
    /// is explicitly false.
    #[tool(description = "Create a new comment on an existing Zendesk ticket. Comments are public (visible to the requester) by default; pass public=false for an internal note.")]
    async fn create_ticket_comment(
        &self,
        Parameters(input): Parameters<CreateTicketCommentInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(ticket_id = input.ticket_id, "create_ticket_comment tool called");

        if input.comment.is_empty() {
            return Err(self.tool_error(&ZendeskError::invalid_argument(
                "comment is required and cannot be empty",
            )));
        }

        let comment = NewComment::new(&input.comment, input.public);
        let visibility = if comment.public { "public" } else { "internal" };

        self.client
            .create_comment(input.ticket_id, comment)
            .await
            .map_err(|e| {
                let message = self.tool_error(&e);
                tracing::error!(error = %message, ticket_id = input.ticket_id, "Failed to create comment");
                message
            })?;

        Ok(format!(
            "Comment created successfully on ticket #{} ({}).",
            input.ticket_id, visibility
        ))
    }

    /// Create a new ticket.
    ///
    /// Subject and description are required; the description becomes the
    /// ticket's first comment.
    #[tool(description = "Create a new Zendesk ticket. Subject and description are required. Optionally set requester, assignee, priority, type, tags, custom fields, and due date.")]
    async fn create_ticket(
        &self,
        Parameters(input): Parameters<CreateTicketInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(subject = %input.subject, "create_ticket tool called");

        if input.subject.is_empty() {
            return Err(self.tool_error(&ZendeskError::invalid_argument(
                "subject is required and cannot be empty",
            )));
        }
        if input.description.is_empty() {
            return Err(self.tool_error(&ZendeskError::invalid_argument(
                "description is required and cannot be empty",
            )));
        }

        let ticket = self.client.create_ticket(&input).await.map_err(|e| {
            let message = self.tool_error(&e);
            tracing::error!(error = %message, "Failed to create ticket");
            message
        })?;

        let shaped = to_json_text(&shape::shape_ticket(&ticket))?;
        Ok(format!(
            "Created ticket #{}: {}\n\n{}",
            ticket.id,
            ticket.display_subject(),
            shaped
        ))
    }

    /// Update an existing ticket's properties.
    ///
    /// Partial update: only the supplied fields change, everything else on
    /// the remote ticket is left as-is.
    #[tool(description = "Update an existing Zendesk ticket. Only the supplied fields change (partial update). At least one field besides ticket_id must be provided.")]
    async fn update_ticket(
        &self,
        Parameters(input): Parameters<UpdateTicketInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(ticket_id = input.ticket_id, "update_ticket tool called");

        if !input.has_updates() {
            return Err(self.tool_error(&ZendeskError::invalid_argument(
                "at least one field must be provided for update (subject, status, priority, \
                 type, requester_id, assignee_id, tags, custom_fields, or due_at)",
            )));
        }

        if let Some(ref subject) = input.subject {
            if subject.is_empty() {
                return Err(self.tool_error(&ZendeskError::invalid_argument(
                    "subject cannot be empty",
                )));
            }
        }

        let ticket = self
            .client
            .update_ticket(input.ticket_id, &input)
            .await
            .map_err(|e| {
                let message = self.tool_error(&e);
                tracing::error!(error = %message, ticket_id = input.ticket_id, "Failed to update ticket");
                message
            })?;

        let shaped = to_json_text(&shape::shape_ticket(&ticket))?;
        Ok(format!(
            "Updated ticket #{}: {}\n\n{}",
            ticket.id,
            ticket.display_subject(),
            shaped
        ))
    }

    /// Formats an error for the MCP client: kind label plus sanitized message.
    fn tool_error(&self, error: &ZendeskError) -> String {
        format!(
            "{}: {}",
            error.kind().as_str(),
            error.sanitized_display(self.client.token_for_sanitization())
        )
    }
}

#[tool_handler]
impl ServerHandler for ZendeskServer {
    /// Returns server information for the MCP initialize handshake.
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server bridges Zendesk Support. Use get_tickets to list \
                 tickets, get_ticket for details, and get_ticket_comments for a \
                 ticket's conversation. Create tickets with create_ticket, modify \
                 them with update_ticket, and reply with create_ticket_comment. \
                 The zendesk://knowledge-base resource holds all help-center \
                 articles. Start with 'ping' to verify connectivity."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        let mut resource = RawResource::new(KNOWLEDGE_BASE_URI, "Zendesk Knowledge Base");
        resource.description = Some("All help-center articles, read-only".to_string());
        resource.mime_type = Some("application/json".to_string());

        Ok(ListResourcesResult {
            resources: vec![resource.no_annotation()],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        if uri != KNOWLEDGE_BASE_URI {
            return Err(ErrorData::resource_not_found(
                format!("unknown resource: {}", uri),
                None,
            ));
        }

        tracing::debug!("reading knowledge-base resource");

        let articles = self.client.fetch_knowledge_base().await.map_err(|e| {
            let message = self.tool_error(&e);
            tracing::error!(error = %message, "Failed to fetch knowledge base");
            ErrorData::internal_error(message, None)
        })?;

        let shaped: Vec<_> = articles.iter().map(shape::shape_article).collect();
        let text = to_json_text(&shaped).map_err(|e| ErrorData::internal_error(e, None))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        Ok(ListPromptsResult {
            next_cursor: None,
            prompts: prompts::definitions(),
        })
    }

    async fn get_prompt(
        &self,
        GetPromptRequestParam { name, arguments }: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        let ticket_id = parse_ticket_id_arg(arguments.as_ref())?;

        let (description, text) = match name.as_str() {
            prompts::ANALYZE_TICKET => (
                format!("Analyze ticket #{}", ticket_id),
                prompts::analyze_ticket(ticket_id),
            ),
            prompts::DRAFT_TICKET_RESPONSE => (
                format!("Draft a response for ticket #{}", ticket_id),
                prompts::draft_ticket_response(ticket_id),
            ),
            _ => {
                return Err(ErrorData::invalid_params(
                    format!("unknown prompt: {}", name),
                    None,
                ))
            }
        };

        Ok(GetPromptResult {
            description: Some(description),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(text),
            }],
        })
    }
}

/// Extracts the required `ticket_id` prompt argument.
///
/// Accepts either a JSON number or a numeric string, since prompt
/// arguments are string-typed in some MCP clients.
fn parse_ticket_id_arg(arguments: Option<&JsonObject>) -> Result<u64, ErrorData> {
    let value = arguments
        .and_then(|args| args.get("ticket_id"))
        .ok_or_else(|| ErrorData::invalid_params("ticket_id argument is required", None))?;

    match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
    .ok_or_else(|| {
        ErrorData::invalid_params("ticket_id must be a positive integer", None)
    })
}

/// Serializes a shaped value as pretty JSON for tool output.
fn to_json_text<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| format!("upstream_error: failed to serialize response: {}", e))
}
