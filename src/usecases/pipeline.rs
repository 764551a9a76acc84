//! Sentiment pipeline. Scorer -> Classifier -> Aggregator over one comment list.
//!
//! - Every input comment yields exactly one result, in input order
//! - Scoring sees the full text; only the returned display text is truncated
//! - Aggregation runs once, after every comment has been scored

use crate::domain::classifier::clamp_score;
use crate::domain::{AnalysisResult, Comment, DomainError, ScoredComment, aggregate};
use crate::ports::SentimentScorer;
use crate::shared::config::DEFAULT_DISPLAY_TEXT_LIMIT;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Marker appended to display text cut at the limit.
pub const ELLIPSIS: &str = "...";

/// Stateless analysis pipeline. Cheap to share across concurrent runs.
#[derive(Clone)]
pub struct SentimentPipeline {
    scorer: Arc<dyn SentimentScorer>,
    display_limit: usize,
}

impl SentimentPipeline {
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self {
            scorer,
            display_limit: DEFAULT_DISPLAY_TEXT_LIMIT,
        }
    }

    /// Maximum number of characters kept in returned comment text.
    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    /// Analyze an ordered list of comments. Empty input is valid.
    pub fn analyze(&self, comments: &[Comment]) -> AnalysisResult {
        let results: Vec<ScoredComment> = comments.iter().map(|c| self.score_comment(c)).collect();
        let summary = aggregate(&results);
        debug!(
            comments = results.len(),
            average = summary.average_score,
            overall = %summary.overall_sentiment,
            "pipeline run complete"
        );
        AnalysisResult { results, summary }
    }

    /// Convenience for plain strings.
    pub fn analyze_texts<S: AsRef<str>>(&self, texts: &[S]) -> AnalysisResult {
        let comments: Vec<Comment> = texts.iter().map(|t| Comment::new(t.as_ref())).collect();
        self.analyze(&comments)
    }

    /// Analyze an untyped scraper payload.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidInput` if `value` is not a JSON array.
    /// Individual malformed entries are scored as empty text, never dropped.
    pub fn analyze_value(&self, value: &Value) -> Result<AnalysisResult, DomainError> {
        let comments = Comment::list_from_value(value)?;
        Ok(self.analyze(&comments))
    }

    fn score_comment(&self, comment: &Comment) -> ScoredComment {
        let text = comment.text();
        let sentiment = clamp_score(self.scorer.score(text));
        ScoredComment::new(truncate_for_display(text, self.display_limit), sentiment)
    }
}

/// Cut `text` to `limit` characters (not bytes), appending [`ELLIPSIS`] when cut.
pub fn truncate_for_display(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scores known texts from a table, everything else 0.
    struct TableScorer(HashMap<String, f64>);

    impl TableScorer {
        fn new(entries: &[(&str, f64)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(t, s)| ((*t).to_string(), *s))
                    .collect(),
            )
        }
    }

    impl SentimentScorer for TableScorer {
        fn score(&self, text: &str) -> f64 {
            self.0.get(text).copied().unwrap_or(0.0)
        }
    }

    /// Positive only when it sees more than 150 characters.
    struct LengthScorer;

    impl SentimentScorer for LengthScorer {
        fn score(&self, text: &str) -> f64 {
            if text.chars().count() > 150 { 0.9 } else { -0.9 }
        }
    }

    struct WildScorer;

    impl SentimentScorer for WildScorer {
        fn score(&self, text: &str) -> f64 {
            match text {
                "nan" => f64::NAN,
                "inf" => f64::INFINITY,
                _ => -7.0,
            }
        }
    }

    struct CountingScorer(AtomicUsize);

    impl SentimentScorer for CountingScorer {
        fn score(&self, _text: &str) -> f64 {
            self.0.fetch_add(1, Ordering::SeqCst);
            0.5
        }
    }

    fn example_pipeline() -> SentimentPipeline {
        SentimentPipeline::new(Arc::new(TableScorer::new(&[
            ("I love this!", 0.8),
            ("meh", 0.0),
            ("terrible, worst ever", -0.85),
        ])))
    }

    #[test]
    fn test_end_to_end_example() {
        let result = example_pipeline().analyze_texts(&["I love this!", "meh", "terrible, worst ever"]);

        assert_eq!(result.results.len(), 3);
        let categories: Vec<Category> = result.results.iter().map(|r| r.category()).collect();
        assert_eq!(
            categories,
            vec![Category::Positive, Category::Neutral, Category::Negative]
        );
        let s = &result.summary;
        assert_eq!(s.total_comments, 3);
        assert_eq!(s.positive_count, 1);
        assert_eq!(s.neutral_count, 1);
        assert_eq!(s.negative_count, 1);
        assert_eq!(s.average_score, -0.02);
        assert_eq!(s.overall_sentiment, "Neutral");
    }

    #[test]
    fn test_empty_input() {
        let result = example_pipeline().analyze(&[]);
        assert!(result.results.is_empty());
        assert_eq!(result.summary.total_comments, 0);
        assert_eq!(result.summary.positive_count, 0);
        assert_eq!(result.summary.neutral_count, 0);
        assert_eq!(result.summary.negative_count, 0);
        assert_eq!(result.summary.average_score, 0.0);
        assert_eq!(result.summary.overall_sentiment, "Neutral");
    }

    #[test]
    fn test_order_preserved_with_truncation() {
        let long = "x".repeat(400);
        let texts = vec!["first".to_string(), long.clone(), "third".to_string()];
        let result = example_pipeline().analyze_texts(&texts);

        assert_eq!(result.results[0].text, "first");
        assert_eq!(result.results[1].text, format!("{}...", "x".repeat(150)));
        assert_eq!(result.results[2].text, "third");
    }

    #[test]
    fn test_scoring_uses_full_text() {
        let pipeline = SentimentPipeline::new(Arc::new(LengthScorer));
        let long = "y".repeat(151);
        let result = pipeline.analyze_texts(&[long.as_str(), "short"]);

        assert_eq!(result.results[0].sentiment, 0.9);
        assert!(result.results[0].text.ends_with(ELLIPSIS));
        assert_eq!(result.results[1].sentiment, -0.9);
    }

    #[test]
    fn test_malformed_entries_are_kept() {
        let pipeline = example_pipeline();
        let value = json!(["I love this!", null, {"text": 5}, {"text": "meh"}]);
        let result = pipeline.analyze_value(&value).unwrap();

        assert_eq!(result.results.len(), 4);
        assert_eq!(result.results[1].text, "");
        assert_eq!(result.results[1].sentiment, 0.0);
        assert_eq!(result.results[2].text, "");
        assert_eq!(result.summary.total_comments, 4);
    }

    #[test]
    fn test_non_list_input_is_invalid() {
        let pipeline = example_pipeline();
        assert!(matches!(
            pipeline.analyze_value(&json!({"comments": ["a"]})),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            pipeline.analyze_value(&json!(null)),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_scorer_output_is_sanitized() {
        let pipeline = SentimentPipeline::new(Arc::new(WildScorer));
        let result = pipeline.analyze_texts(&["nan", "inf", "other"]);
        let sentiments: Vec<f64> = result.results.iter().map(|r| r.sentiment).collect();
        assert_eq!(sentiments, vec![0.0, 1.0, -1.0]);
        assert!(result.summary.average_score.is_finite());
    }

    #[test]
    fn test_idempotent() {
        let pipeline = example_pipeline();
        let texts = ["I love this!", "meh", "terrible, worst ever", "unknown"];
        let a = serde_json::to_string(&pipeline.analyze_texts(&texts)).unwrap();
        let b = serde_json::to_string(&pipeline.analyze_texts(&texts)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_each_comment_scored_once() {
        let scorer = Arc::new(CountingScorer(AtomicUsize::new(0)));
        let pipeline = SentimentPipeline::new(scorer.clone());
        pipeline.analyze_texts(&["a", "b", "c"]);
        assert_eq!(scorer.0.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_truncate_for_display() {
        assert_eq!(truncate_for_display("short", 150), "short");
        let exact = "z".repeat(150);
        assert_eq!(truncate_for_display(&exact, 150), exact);
        // Multibyte characters are counted as characters, not bytes.
        let emoji = "😀".repeat(151);
        let cut = truncate_for_display(&emoji, 150);
        assert_eq!(cut.chars().count(), 153);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_for_display("abcdef", 3), "abc...");
    }

    #[test]
    fn test_custom_display_limit() {
        let pipeline = example_pipeline().with_display_limit(4);
        assert_eq!(pipeline.display_limit(), 4);
        let result = pipeline.analyze_texts(&["I love this!"]);
        assert_eq!(result.results[0].text, "I lo...");
        assert_eq!(result.results[0].sentiment, 0.8);
    }
}
