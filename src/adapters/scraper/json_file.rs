//! Implements CommentSource from a local JSON file.
//!
//! Offline stand-in for the scraper: the file holds a previously scraped
//! comment list (bare array or wrapped, see `comments_from_payload`).

use super::payload::comments_from_payload;
use crate::domain::{Comment, DomainError, Platform};
use crate::ports::CommentSource;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// File-backed comment source. The post URL is only used for logging.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl CommentSource for JsonFileSource {
    async fn fetch_comments(
        &self,
        platform: Platform,
        url: &str,
    ) -> Result<Vec<Comment>, DomainError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::Scraper(format!("read {}: {}", self.path.display(), e))
        })?;
        let payload: Value = serde_json::from_str(&raw).map_err(|e| {
            DomainError::InvalidInput(format!("{} is not valid JSON: {}", self.path.display(), e))
        })?;
        let comments = comments_from_payload(&payload)?;
        info!(
            path = %self.path.display(),
            %platform,
            url,
            comments = comments.len(),
            "loaded comments from file"
        );
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_wrapped_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comments.json");
        tokio::fs::write(&path, r#"{"comments": ["great video", {"text": null}]}"#)
            .await
            .unwrap();

        let source = JsonFileSource::new(&path);
        let comments = source
            .fetch_comments(Platform::YouTube, "https://youtu.be/x")
            .await
            .unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text(), "great video");
        assert_eq!(comments[1], Comment::missing());
    }

    #[tokio::test]
    async fn test_missing_file_is_scraper_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("nope.json"));
        let err = source
            .fetch_comments(Platform::Instagram, "https://instagram.com/p/x")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Scraper(_)));
    }

    #[tokio::test]
    async fn test_non_list_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        tokio::fs::write(&path, r#"{"text": "lonely"}"#).await.unwrap();

        let err = JsonFileSource::new(&path)
            .fetch_comments(Platform::Instagram, "https://instagram.com/p/x")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
