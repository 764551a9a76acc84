//! Mock comment source for running without a scraping service.
//!
//! Returns canned comments for development and testing purposes.

use crate::domain::{Comment, DomainError, Platform};
use crate::ports::CommentSource;
use std::time::Duration;
use tracing::info;

const INSTAGRAM_COMMENTS: &[&str] = &[
    "Absolutely love this! 😍",
    "so cute ❤️",
    "meh",
    "This is the best post this week 🔥🔥",
    "not a fan of the filter honestly",
    "Where did you buy that jacket?",
    "worst collab ever, unfollow",
];

const YOUTUBE_COMMENTS: &[&str] = &[
    "Great explanation, very helpful. Thanks!",
    "First",
    "The audio is kinda bad in the second half",
    "This channel is so underrated 👏",
    "clickbait title, disappointed",
    "Who's watching in 2025?",
    "Amazing editing, keep it up!",
];

/// Mock source. Returns predetermined comments without network calls.
/// Simulates network latency with configurable delay.
pub struct MockCommentSource {
    delay_ms: u64,
}

impl MockCommentSource {
    /// Create a new mock source with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    /// Create a mock source with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockCommentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CommentSource for MockCommentSource {
    async fn fetch_comments(
        &self,
        platform: Platform,
        url: &str,
    ) -> Result<Vec<Comment>, DomainError> {
        info!(%platform, url, "[MOCK] Simulating comment scrape");

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let canned = match platform {
            Platform::Instagram => INSTAGRAM_COMMENTS,
            Platform::YouTube => YOUTUBE_COMMENTS,
        };
        Ok(canned.iter().map(|t| Comment::new(*t)).collect())
    }
}
