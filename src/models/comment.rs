//! Comment models for the Zendesk API.
//!
//! Comments are the conversation entries on a ticket. They are created by
//! updating the ticket with a `comment` object; Zendesk never exposes a
//! standalone comment-creation endpoint.

use serde::{Deserialize, Serialize};

/// A comment on a ticket.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// Unique comment ID.
    pub id: u64,

    /// ID of the user who authored the comment.
    #[serde(default)]
    pub author_id: Option<u64>,

    /// Plain-text body.
    #[serde(default)]
    pub body: Option<String>,

    /// HTML body.
    #[serde(default)]
    pub html_body: Option<String>,

    /// Whether the comment is visible to the requester.
    #[serde(default)]
    pub public: Option<bool>,

    /// When the comment was created (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Outbound comment payload for `PUT /api/v2/tickets/{id}`.
///
/// Sent nested inside the ticket object; `public` defaults to `true`
/// when not specified by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    /// The comment text.
    pub body: String,

    /// Whether the comment is visible to the requester.
    pub public: bool,
}

impl NewComment {
    /// Creates a new comment payload.
    ///
    /// `public` defaults to `true` when `None`.
    pub fn new(body: impl Into<String>, public: Option<bool>) -> Self {
        Self {
            body: body.into(),
            public: public.unwrap_or(true),
        }
    }
}

/// Response wrapper for `GET /api/v2/tickets/{id}/comments`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListCommentsResponse {
    /// Comments in chronological order, as returned by Zendesk.
    #[serde(default)]
    pub comments: Vec<Comment>,

    /// Absolute URL of the next page, if any.
    #[serde(default)]
    pub next_page: Option<String>,

    /// Total number of comments.
    #[serde(default)]
    pub count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment_defaults_public_true() {
        let comment = NewComment::new("Thanks for reporting this.", None);
        assert!(comment.public);

        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["public"], true);
        assert_eq!(json["body"], "Thanks for reporting this.");
    }

    #[test]
    fn test_new_comment_explicit_private() {
        let comment = NewComment::new("Internal note", Some(false));
        assert!(!comment.public);
    }

    #[test]
    fn test_comment_deserialize() {
        let json = r#"{
            "id": 1274,
            "author_id": 123,
            "body": "Thanks for your help!",
            "html_body": "<p>Thanks for your help!</p>",
            "public": true,
            "created_at": "2026-02-06T10:32:28Z"
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.id, 1274);
        assert_eq!(comment.author_id, Some(123));
        assert_eq!(comment.public, Some(true));
        assert_eq!(comment.body.as_deref(), Some("Thanks for your help!"));
    }

    #[test]
    fn test_list_comments_response_deserialize() {
        let json = r#"{
            "comments": [{"id": 1}, {"id": 2}, {"id": 3}],
            "next_page": null,
            "count": 3
        }"#;
        let response: ListCommentsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.comments.len(), 3);
        assert_eq!(response.count, Some(3));
    }
}
