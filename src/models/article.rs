//! Help-center article models for the Zendesk API.
//!
//! Articles back the read-only `zendesk://knowledge-base` resource.

use serde::Deserialize;

/// A help-center article.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    /// Unique article ID.
    pub id: u64,

    /// Article title.
    #[serde(default)]
    pub title: Option<String>,

    /// Article body (HTML).
    #[serde(default)]
    pub body: Option<String>,

    /// ID of the section the article belongs to.
    #[serde(default)]
    pub section_id: Option<u64>,

    /// Public URL of the article.
    #[serde(default)]
    pub html_url: Option<String>,

    /// When the article was last updated (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Response wrapper for `GET /api/v2/help_center/articles`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListArticlesResponse {
    /// Articles on this page.
    #[serde(default)]
    pub articles: Vec<Article>,

    /// Absolute URL of the next page, if any.
    #[serde(default)]
    pub next_page: Option<String>,

    /// Current page number.
    #[serde(default)]
    pub page: Option<u32>,

    /// Total number of pages.
    #[serde(default)]
    pub page_count: Option<u32>,

    /// Total number of articles.
    #[serde(default)]
    pub count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_deserialize() {
        let json = r#"{
            "id": 37486578,
            "title": "How to reset your password",
            "body": "<p>Click the reset link.</p>",
            "section_id": 98838,
            "html_url": "https://acme.zendesk.com/hc/en-us/articles/37486578",
            "updated_at": "2026-01-15T08:00:00Z",
            "author_id": 3465
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, 37486578);
        assert_eq!(article.title.as_deref(), Some("How to reset your password"));
        assert_eq!(article.section_id, Some(98838));
    }

    #[test]
    fn test_list_articles_response_deserialize() {
        let json = r#"{
            "articles": [{"id": 1}, {"id": 2}],
            "next_page": "https://acme.zendesk.com/api/v2/help_center/articles.json?page=2",
            "page": 1,
            "page_count": 2,
            "count": 120
        }"#;
        let response: ListArticlesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.articles.len(), 2);
        assert_eq!(response.page, Some(1));
        assert_eq!(response.page_count, Some(2));
    }
}
