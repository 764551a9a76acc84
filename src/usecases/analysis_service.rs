//! Analysis service. Orchestrates the comment sentiment workflow.
//!
//! Coordinates between comment source (scraper), pipeline (scoring) and
//! exporters (reports).

use super::pipeline::SentimentPipeline;
use crate::domain::{AnalysisResult, DomainError, Platform};
use crate::ports::{CommentSource, ReportExporter};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Service for URL-to-summary sentiment analysis.
///
/// Orchestrates the flow:
/// 1. Resolve the platform from the post URL
/// 2. Fetch comments through the comment source
/// 3. Score and aggregate on a blocking worker
/// 4. Export reports (optional)
pub struct AnalysisService {
    source: Arc<dyn CommentSource>,
    pipeline: SentimentPipeline,
    exporters: Vec<Arc<dyn ReportExporter>>,
}

impl AnalysisService {
    /// Create a new analysis service.
    ///
    /// # Arguments
    /// * `source` - Comment source implementation (HTTP scraper, file, mock)
    /// * `pipeline` - Configured sentiment pipeline
    /// * `exporters` - Report exporters; empty disables export
    pub fn new(
        source: Arc<dyn CommentSource>,
        pipeline: SentimentPipeline,
        exporters: Vec<Arc<dyn ReportExporter>>,
    ) -> Self {
        Self {
            source,
            pipeline,
            exporters,
        }
    }

    /// Fetch and analyze the comments of the post at `url`.
    ///
    /// Either the whole run succeeds or a single error is returned; partial
    /// results are never produced.
    pub async fn analyze_url(&self, url: &str) -> Result<AnalysisResult, DomainError> {
        let url = url.trim();
        let platform = Platform::from_url(url)?;
        info!(%platform, url, "analyzing post");

        let comments = self.source.fetch_comments(platform, url).await?;
        if comments.is_empty() {
            warn!(url, "post has no comments");
        }

        // Scoring is CPU-bound; keep it off the async workers. Awaiting the
        // handle is the join barrier before the result is used.
        let pipeline = self.pipeline.clone();
        let result = tokio::task::spawn_blocking(move || pipeline.analyze(&comments))
            .await
            .map_err(|e| DomainError::Task(e.to_string()))?;

        info!(
            url,
            comments = result.summary.total_comments,
            average = result.summary.average_score,
            overall = %result.summary.overall_sentiment,
            "analysis complete"
        );
        Ok(result)
    }

    /// Run every configured exporter. Returns the written paths.
    pub async fn export(
        &self,
        url: &str,
        result: &AnalysisResult,
    ) -> Result<Vec<PathBuf>, DomainError> {
        let mut paths = Vec::with_capacity(self.exporters.len());
        for exporter in &self.exporters {
            paths.push(exporter.export(url.trim(), result).await?);
        }
        Ok(paths)
    }

    pub fn has_exporters(&self) -> bool {
        !self.exporters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::CsvExporter;
    use crate::adapters::scoring::LexiconScorer;
    use crate::adapters::scraper::MockCommentSource;
    use crate::domain::Comment;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        comments: Vec<Comment>,
    }

    #[async_trait::async_trait]
    impl CommentSource for CountingSource {
        async fn fetch_comments(
            &self,
            _platform: Platform,
            _url: &str,
        ) -> Result<Vec<Comment>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.comments.clone())
        }
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl CommentSource for FailingSource {
        async fn fetch_comments(
            &self,
            _platform: Platform,
            _url: &str,
        ) -> Result<Vec<Comment>, DomainError> {
            Err(DomainError::Scraper("boom".to_string()))
        }
    }

    fn pipeline() -> SentimentPipeline {
        SentimentPipeline::new(Arc::new(LexiconScorer::new()))
    }

    #[tokio::test]
    async fn test_analyze_url_with_mock_source() {
        let service = AnalysisService::new(
            Arc::new(MockCommentSource::with_delay(1)),
            pipeline(),
            vec![],
        );
        let result = service
            .analyze_url("https://www.youtube.com/watch?v=abc")
            .await
            .unwrap();

        let s = &result.summary;
        assert!(s.total_comments > 0);
        assert_eq!(s.total_comments, result.results.len());
        assert_eq!(
            s.positive_count + s.neutral_count + s.negative_count,
            s.total_comments
        );
        assert!(!service.has_exporters());
    }

    #[tokio::test]
    async fn test_unsupported_url_skips_fetch() {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            comments: vec![],
        });
        let service = AnalysisService::new(source.clone(), pipeline(), vec![]);

        let err = service
            .analyze_url("https://example.com/post")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedUrl(_)));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_post_yields_zero_summary() {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            comments: vec![],
        });
        let service = AnalysisService::new(source, pipeline(), vec![]);
        let result = service
            .analyze_url("https://instagram.com/p/quiet")
            .await
            .unwrap();
        assert!(result.results.is_empty());
        assert_eq!(result.summary.overall_sentiment, "Neutral");
        assert_eq!(result.summary.average_score, 0.0);
    }

    #[tokio::test]
    async fn test_source_error_propagates() {
        let service = AnalysisService::new(Arc::new(FailingSource), pipeline(), vec![]);
        let err = service
            .analyze_url("https://youtu.be/abc")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Scraper(_)));
    }

    #[tokio::test]
    async fn test_concurrent_runs_are_independent() {
        let service = Arc::new(AnalysisService::new(
            Arc::new(MockCommentSource::with_delay(5)),
            pipeline(),
            vec![],
        ));
        let a = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.analyze_url("https://youtu.be/a").await })
        };
        let b = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.analyze_url("https://youtu.be/a").await })
        };
        let (a, b) = (a.await.unwrap().unwrap(), b.await.unwrap().unwrap());
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_export_runs_every_exporter() {
        let dir = tempfile::tempdir().unwrap();
        let exporter: Arc<dyn ReportExporter> = Arc::new(CsvExporter::new(dir.path()));
        let service = AnalysisService::new(
            Arc::new(MockCommentSource::with_delay(1)),
            pipeline(),
            vec![exporter],
        );
        let url = "https://instagram.com/p/abc";
        let result = service.analyze_url(url).await.unwrap();
        let paths = service.export(url, &result).await.unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].exists());
    }
}
