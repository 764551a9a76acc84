//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{AnalysisResult, Comment, DomainError, Platform};
use std::path::PathBuf;

/// Sentiment scoring engine. Maps one comment text to a value in [-1, 1].
///
/// Implementations must be pure and must not fail: text they cannot
/// interpret scores 0.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

/// Comment scraper. Resolves a post URL into its ordered list of comments.
#[async_trait::async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetch all comments of the post at `url`, in the order the platform returns them.
    async fn fetch_comments(
        &self,
        platform: Platform,
        url: &str,
    ) -> Result<Vec<Comment>, DomainError>;
}

/// Report exporter. Writes a finished analysis somewhere durable.
#[async_trait::async_trait]
pub trait ReportExporter: Send + Sync {
    /// Export `result` for the post at `source_url`. Returns the written path.
    async fn export(
        &self,
        source_url: &str,
        result: &AnalysisResult,
    ) -> Result<PathBuf, DomainError>;
}
