//! HTTP comment scraper adapter.
//!
//! Talks to an external scraping service that resolves a post URL into its
//! comments. Implements `CommentSource`.

use super::payload::comments_from_payload;
use crate::domain::{Comment, DomainError, Platform};
use crate::ports::CommentSource;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Scraping-service client.
///
/// Endpoint layout: `POST {base_url}/{platform}/comments` with body
/// `{"url": "...", "limit": N}`. The response is a JSON array of comments or an
/// object wrapping one (see [`comments_from_payload`]).
pub struct HttpScraperSource {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    max_comments: usize,
}

impl HttpScraperSource {
    /// Create a new scraper client.
    ///
    /// # Arguments
    /// * `base_url` - Scraping service root (no trailing slash)
    /// * `api_key` - Optional bearer token
    /// * `timeout` - Whole-request timeout
    /// * `max_comments` - Upper bound requested per post
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
        max_comments: usize,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Scraper(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url,
            api_key,
            max_comments,
        })
    }

    fn endpoint(&self, platform: Platform) -> String {
        format!("{}/{}/comments", self.base_url, platform.slug())
    }

    /// Human-readable reason for a failed scraper response.
    fn status_error(status: StatusCode) -> DomainError {
        let reason = match status {
            StatusCode::NOT_FOUND => "post not found, check the URL",
            StatusCode::TOO_MANY_REQUESTS => "rate limited by the scraping service",
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => "scraper rejected the API key",
            s if s.is_server_error() => "scraping service is having issues, try again later",
            _ => "unexpected response",
        };
        DomainError::Scraper(format!("{} ({})", reason, status))
    }
}

#[derive(Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
    limit: usize,
}

#[async_trait::async_trait]
impl CommentSource for HttpScraperSource {
    async fn fetch_comments(
        &self,
        platform: Platform,
        url: &str,
    ) -> Result<Vec<Comment>, DomainError> {
        let endpoint = self.endpoint(platform);
        info!(%platform, %endpoint, "requesting comments from scraper");

        let mut request = self.client.post(&endpoint).json(&ScrapeRequest {
            url,
            limit: self.max_comments,
        });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::Scraper(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "scraper returned an error status");
            return Err(Self::status_error(status));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DomainError::Scraper(format!("Failed to parse response: {}", e)))?;

        let comments = comments_from_payload(&body)?;
        debug!(count = comments.len(), "scraper payload parsed");
        if comments.len() > self.max_comments {
            warn!(
                received = comments.len(),
                limit = self.max_comments,
                "scraper returned more comments than requested"
            );
        }

        info!(%platform, comments = comments.len(), "comments fetched");
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> HttpScraperSource {
        HttpScraperSource::new(
            "http://localhost:9999".to_string(),
            None,
            Duration::from_secs(1),
            100,
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_per_platform() {
        let s = source();
        assert_eq!(
            s.endpoint(Platform::Instagram),
            "http://localhost:9999/instagram/comments"
        );
        assert_eq!(
            s.endpoint(Platform::YouTube),
            "http://localhost:9999/youtube/comments"
        );
    }

    #[test]
    fn test_status_error_messages() {
        let err = HttpScraperSource::status_error(StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("post not found"));
        let err = HttpScraperSource::status_error(StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("try again later"));
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(ScrapeRequest {
            url: "https://youtu.be/x",
            limit: 10,
        })
        .unwrap();
        assert_eq!(body["url"], "https://youtu.be/x");
        assert_eq!(body["limit"], 10);
    }
}
