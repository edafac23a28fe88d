//! HTTP client for the Zendesk REST API.
//!
//! This module provides the `ZendeskClient` struct for making authenticated
//! requests to the Zendesk Support and Help Center APIs.
//!
//! Upstream failures are surfaced to the caller as structured errors; the
//! client never retries on its own. Zendesk is the sole source of
//! consistency for ticket state, so every call is a direct translation of
//! one tool invocation.
//!
//! # Security
//!
//! The API token is never logged. All error messages are sanitized before
//! logging.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use url::Url;

use crate::config::Config;
use crate::error::ZendeskError;
use crate::models::{
    Article, GetTicketResponse, ListArticlesResponse, ListCommentsResponse, ListTicketsResponse,
    NewComment, SortBy, SortOrder, Ticket,
};
use crate::tools::{CreateTicketInput, UpdateTicketInput};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default page size for ticket listings.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Maximum page size Zendesk accepts; larger values are clamped.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when walking the help-center article set.
const ARTICLE_PAGE_SIZE: u32 = 100;

/// Hard stop when following article pagination links.
const MAX_ARTICLE_PAGES: u32 = 50;

/// Maximum length for HTTP error response bodies to avoid leaking verbose
/// upstream internals.
const MAX_ERROR_BODY_LEN: usize = 500;

/// HTTP client for the Zendesk REST API.
///
/// Handles authentication, request formatting, and response parsing
/// for all Zendesk operations the server exposes.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = ZendeskClient::new(&config)?;
///
/// let page = client.list_tickets(ListTicketsParams::new()).await?;
/// ```
#[derive(Clone)]
pub struct ZendeskClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL for the Zendesk API (e.g., `https://acme.zendesk.com/api/v2`).
    base_url: String,

    /// Agent email the token belongs to.
    email: String,

    /// API token for authentication.
    /// SECURITY: Never log this value!
    token: String,
}

impl ZendeskClient {
    /// Creates a new Zendesk client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::HttpClient` if the HTTP client fails to
    /// initialize.
    pub fn new(config: &Config) -> Result<Self, ZendeskError> {
        let base_url = format!("https://{}.zendesk.com/api/v2", config.subdomain);
        Self::with_base_url(base_url, &config.email, &config.token)
    }

    /// Creates a client against an explicit base URL.
    ///
    /// Used by tests to point the client at a mock server; `new` is the
    /// production path.
    pub fn with_base_url(
        base_url: impl Into<String>,
        email: &str,
        token: &str,
    ) -> Result<Self, ZendeskError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(ZendeskError::HttpClient)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            email: email.to_string(),
            token: token.to_string(),
        })
    }

    /// Returns a reference to the API token for sanitization purposes.
    ///
    /// This should ONLY be used for sanitizing error messages, never for
    /// logging.
    pub(crate) fn token_for_sanitization(&self) -> &str {
        &self.token
    }

    /// Tests connectivity to the Zendesk instance.
    ///
    /// Lists a single ticket to verify the instance is reachable and
    /// authentication is working.
    pub async fn test_connection(&self) -> Result<(), ZendeskError> {
        tracing::debug!("Testing connection to Zendesk");

        let params = ListTicketsParams::new().with_per_page(1);
        match self.list_tickets(params).await {
            Ok(_) => {
                tracing::info!("Connection test successful");
                Ok(())
            }
            Err(ZendeskError::Authentication) => Err(ZendeskError::Authentication),
            Err(e) => Err(e),
        }
    }

    /// Makes a request to the Zendesk API.
    ///
    /// Handles authentication, JSON body formatting, and response parsing.
    async fn request<T>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<T, ZendeskError>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(method = %method, url = %url, "Making Zendesk API request");

        let mut req = self
            .http
            .request(method, url)
            .basic_auth(format!("{}/token", self.email), Some(&self.token))
            .header("Accept", "application/json");

        if !query.is_empty() {
            req = req.query(query);
        }

        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(ZendeskError::Http)?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_http_error(status, response).await);
        }

        let body = response.text().await.map_err(ZendeskError::Http)?;

        tracing::trace!(body = %body, "Zendesk API response");

        serde_json::from_str(&body).map_err(ZendeskError::Serialization)
    }

    /// Makes a GET request to an API path relative to the base URL.
    async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ZendeskError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        self.request(Method::GET, &url, query, None).await
    }

    /// Makes a POST request with a JSON body.
    async fn post<T>(&self, path: &str, body: &serde_json::Value) -> Result<T, ZendeskError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        self.request(Method::POST, &url, &[], Some(body)).await
    }

    /// Makes a PUT request with a JSON body.
    async fn put<T>(&self, path: &str, body: &serde_json::Value) -> Result<T, ZendeskError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        self.request(Method::PUT, &url, &[], Some(body)).await
    }

    /// Handles HTTP-level errors and converts them to `ZendeskError`.
    async fn handle_http_error(
        &self,
        status: StatusCode,
        response: reqwest::Response,
    ) -> ZendeskError {
        let body = response.text().await.unwrap_or_default();
        // Sanitize the body to ensure no token leakage
        let body = ZendeskError::sanitize_message(&body, &self.token);
        // Prefer Zendesk's structured error description when present
        let body = extract_error_description(&body).unwrap_or(body);
        // Truncate to avoid leaking verbose upstream internals
        let body = truncate_error_body(body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ZendeskError::Authentication,
            StatusCode::NOT_FOUND => ZendeskError::not_found("resource"),
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!("Rate limited by Zendesk");
                ZendeskError::RateLimited
            }
            _ => ZendeskError::HttpStatus { status, body },
        }
    }

    /// Replaces a generic not-found error with one naming the ticket.
    fn tag_not_found(e: ZendeskError, ticket_id: u64) -> ZendeskError {
        if matches!(e, ZendeskError::NotFound { .. }) {
            ZendeskError::not_found(format!("ticket {}", ticket_id))
        } else {
            e
        }
    }

    // ========================================================================
    // Read operations
    // ========================================================================

    /// Lists tickets with pagination and sorting.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let params = ListTicketsParams::new()
    ///     .with_page(2)
    ///     .with_sort(SortBy::UpdatedAt, SortOrder::Desc);
    /// let response = client.list_tickets(params).await?;
    /// ```
    pub async fn list_tickets(
        &self,
        params: ListTicketsParams,
    ) -> Result<ListTicketsResponse, ZendeskError> {
        let query = params.to_query();
        self.get("/tickets.json", &query).await
    }

    /// Gets a single ticket by ID.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::NotFound` if the ticket doesn't exist.
    pub async fn get_ticket(&self, ticket_id: u64) -> Result<Ticket, ZendeskError> {
        let path = format!("/tickets/{}.json", ticket_id);
        let response: GetTicketResponse = self
            .get(&path, &[])
            .await
            .map_err(|e| Self::tag_not_found(e, ticket_id))?;
        Ok(response.ticket)
    }

    /// Gets all comments for a ticket, in chronological order.
    pub async fn list_comments(
        &self,
        ticket_id: u64,
    ) -> Result<ListCommentsResponse, ZendeskError> {
        let path = format!("/tickets/{}/comments.json", ticket_id);
        self.get(&path, &[])
            .await
            .map_err(|e| Self::tag_not_found(e, ticket_id))
    }

    // ========================================================================
    // Write operations
    // ========================================================================

    /// Appends a comment to an existing ticket.
    ///
    /// Zendesk models comment creation as a ticket update carrying a
    /// `comment` object, so this is a PUT on the ticket.
    pub async fn create_comment(
        &self,
        ticket_id: u64,
        comment: NewComment,
    ) -> Result<Ticket, ZendeskError> {
        let body = serde_json::json!({
            "ticket": { "comment": comment }
        });

        let path = format!("/tickets/{}.json", ticket_id);
        let response: GetTicketResponse = self
            .put(&path, &body)
            .await
            .map_err(|e| Self::tag_not_found(e, ticket_id))?;
        Ok(response.ticket)
    }

    /// Creates a new ticket.
    ///
    /// The description becomes the body of the ticket's first comment,
    /// which is how Zendesk represents it.
    pub async fn create_ticket(&self, input: &CreateTicketInput) -> Result<Ticket, ZendeskError> {
        let mut ticket = serde_json::Map::new();

        ticket.insert("subject".to_string(), serde_json::json!(input.subject));
        ticket.insert(
            "comment".to_string(),
            serde_json::json!({ "body": input.description }),
        );

        if let Some(requester_id) = input.requester_id {
            ticket.insert("requester_id".to_string(), serde_json::json!(requester_id));
        }
        if let Some(assignee_id) = input.assignee_id {
            ticket.insert("assignee_id".to_string(), serde_json::json!(assignee_id));
        }
        if let Some(priority) = input.priority {
            ticket.insert("priority".to_string(), serde_json::json!(priority));
        }
        if let Some(ticket_type) = input.ticket_type {
            ticket.insert("type".to_string(), serde_json::json!(ticket_type));
        }
        if let Some(ref tags) = input.tags {
            ticket.insert("tags".to_string(), serde_json::json!(tags));
        }
        if let Some(ref custom_fields) = input.custom_fields {
            ticket.insert("custom_fields".to_string(), serde_json::json!(custom_fields));
        }
        if let Some(ref due_at) = input.due_at {
            ticket.insert("due_at".to_string(), serde_json::json!(due_at));
        }

        let body = serde_json::json!({ "ticket": ticket });

        let response: GetTicketResponse = self.post("/tickets.json", &body).await?;
        Ok(response.ticket)
    }

    /// Updates an existing ticket.
    ///
    /// Only the fields present in `input` are sent; Zendesk leaves
    /// everything else unchanged (partial-update semantics).
    pub async fn update_ticket(
        &self,
        ticket_id: u64,
        input: &UpdateTicketInput,
    ) -> Result<Ticket, ZendeskError> {
        let mut ticket = serde_json::Map::new();

        if let Some(ref subject) = input.subject {
            ticket.insert("subject".to_string(), serde_json::json!(subject));
        }
        if let Some(status) = input.status {
            ticket.insert("status".to_string(), serde_json::json!(status));
        }
        if let Some(priority) = input.priority {
            ticket.insert("priority".to_string(), serde_json::json!(priority));
        }
        if let Some(ticket_type) = input.ticket_type {
            ticket.insert("type".to_string(), serde_json::json!(ticket_type));
        }
        if let Some(requester_id) = input.requester_id {
            ticket.insert("requester_id".to_string(), serde_json::json!(requester_id));
        }
        if let Some(assignee_id) = input.assignee_id {
            ticket.insert("assignee_id".to_string(), serde_json::json!(assignee_id));
        }
        if let Some(ref tags) = input.tags {
            ticket.insert("tags".to_string(), serde_json::json!(tags));
        }
        if let Some(ref custom_fields) = input.custom_fields {
            ticket.insert("custom_fields".to_string(), serde_json::json!(custom_fields));
        }
        if let Some(ref due_at) = input.due_at {
            ticket.insert("due_at".to_string(), serde_json::json!(due_at));
        }

        let body = serde_json::json!({ "ticket": ticket });

        let path = format!("/tickets/{}.json", ticket_id);
        let response: GetTicketResponse = self
            .put(&path, &body)
            .await
            .map_err(|e| Self::tag_not_found(e, ticket_id))?;
        Ok(response.ticket)
    }

    // ========================================================================
    // Help center
    // ========================================================================

    /// Fetches the whole help-center article set.
    ///
    /// Walks Zendesk's `next_page` links. Each link is an absolute URL
    /// supplied by the upstream response, so its host must match the
    /// configured base URL before it is followed.
    pub async fn fetch_knowledge_base(&self) -> Result<Vec<Article>, ZendeskError> {
        let query = [("per_page", ARTICLE_PAGE_SIZE.to_string())];
        let mut response: ListArticlesResponse =
            self.get("/help_center/articles.json", &query).await?;

        let mut articles = std::mem::take(&mut response.articles);
        let mut pages = 1;

        while let Some(next) = response.next_page.take() {
            if pages >= MAX_ARTICLE_PAGES {
                tracing::warn!(
                    pages = pages,
                    "Stopping article pagination at page limit"
                );
                break;
            }

            self.validate_same_host(&next)?;

            response = self.request(Method::GET, &next, &[], None).await?;
            articles.append(&mut response.articles);
            pages += 1;
        }

        tracing::debug!(count = articles.len(), pages = pages, "Fetched knowledge base");

        Ok(articles)
    }

    /// Validates that an upstream-supplied URL stays on the same host as
    /// the configured base URL, preventing SSRF via crafted pagination
    /// links.
    fn validate_same_host(&self, candidate: &str) -> Result<(), ZendeskError> {
        let parsed = Url::parse(candidate).map_err(|e| {
            ZendeskError::invalid_argument(format!("invalid pagination URL: {}", e))
        })?;
        let base = Url::parse(&self.base_url).map_err(|e| {
            ZendeskError::invalid_argument(format!("invalid base URL: {}", e))
        })?;

        if parsed.host() != base.host() {
            return Err(ZendeskError::invalid_argument(format!(
                "pagination URL host mismatch: expected {:?}, got {:?}",
                base.host(),
                parsed.host()
            )));
        }
        Ok(())
    }
}

/// Truncates an error body to `MAX_ERROR_BODY_LEN` bytes.
///
/// The cut must land on a char boundary: proxies and localized error pages
/// put multibyte UTF-8 in the body, and slicing mid-character panics.
fn truncate_error_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY_LEN {
        return body;
    }
    let mut end = MAX_ERROR_BODY_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

/// Parses a Zendesk error body and extracts the human-readable description.
///
/// Zendesk error payloads look like
/// `{"error": "RecordNotFound", "description": "Not found"}`.
fn extract_error_description(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    let description = json.get("description").and_then(|d| d.as_str());
    let error = json.get("error").and_then(|e| e.as_str());

    match (error, description) {
        (Some(error), Some(description)) => Some(format!("{}: {}", error, description)),
        (Some(error), None) => Some(error.to_string()),
        (None, Some(description)) => Some(description.to_string()),
        (None, None) => None,
    }
}

/// Parameters for listing tickets.
///
/// Use the builder methods to set pagination and sorting.
#[derive(Debug, Clone, Default)]
pub struct ListTicketsParams {
    /// 1-based page number.
    page: Option<u32>,

    /// Page size (clamped to `MAX_PAGE_SIZE`).
    per_page: Option<u32>,

    /// Sort field.
    sort_by: Option<SortBy>,

    /// Sort direction.
    sort_order: Option<SortOrder>,
}

impl ListTicketsParams {
    /// Creates empty parameters (first page with the default page size).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the 1-based page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page.max(1));
        self
    }

    /// Sets the page size. Values above `MAX_PAGE_SIZE` are clamped.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page.clamp(1, MAX_PAGE_SIZE));
        self
    }

    /// Sets the sort field and direction.
    pub fn with_sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = Some(sort_by);
        self.sort_order = Some(sort_order);
        self
    }

    /// Returns the effective page number.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Returns the effective page size.
    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Converts parameters to query-string pairs.
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", self.page().to_string()),
            ("per_page", self.per_page().to_string()),
        ];

        if let Some(sort_by) = self.sort_by {
            query.push(("sort_by", sort_by.as_str().to_string()));
        }
        if let Some(sort_order) = self.sort_order {
            query.push(("sort_order", sort_order.as_str().to_string()));
        }

        query
    }
}
