//! Markdown digest of one analysis: overall verdict, category breakdown and
//! the most positive / most negative comments.

use super::report_stem;
use crate::domain::{AnalysisResult, Category, DomainError, Platform, ScoredComment};
use crate::ports::ReportExporter;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// How many comments to quote in each highlight section.
const HIGHLIGHTS: usize = 3;

/// Render the Markdown report. Pure; `analyzed_at` is injected for testability.
pub fn render_markdown(
    source_url: &str,
    result: &AnalysisResult,
    analyzed_at: DateTime<Utc>,
) -> String {
    let summary = &result.summary;
    let platform = Platform::from_url(source_url)
        .map(|p| p.to_string())
        .unwrap_or_else(|_| "Post".to_string());

    let mut md = String::new();

    // Header
    md.push_str(&format!("# Sentiment Report: {}\n\n", platform));
    md.push_str(&format!(
        "**Source:** {} | **Analyzed:** {}\n\n",
        source_url,
        analyzed_at.format("%Y-%m-%d %H:%M UTC")
    ));
    md.push_str("---\n\n");

    // Verdict
    md.push_str(&format!(
        "## {} Overall: {} ({:.2})\n\n",
        summary.emoji, summary.overall_sentiment, summary.average_score
    ));
    md.push_str(&format!("> {}\n\n", summary.marketing_comment));

    // Breakdown
    md.push_str("## 📊 Breakdown\n\n");
    md.push_str("| Category | Count | Share |\n|---|---:|---:|\n");
    for (label, count) in [
        ("Positive", summary.positive_count),
        ("Neutral", summary.neutral_count),
        ("Negative", summary.negative_count),
    ] {
        md.push_str(&format!(
            "| {} | {} | {:.0}% |\n",
            label,
            count,
            share(count, summary.total_comments)
        ));
    }
    md.push_str(&format!(
        "| **Total** | **{}** | |\n\n",
        summary.total_comments
    ));

    // Highlights
    let positive = top_comments(&result.results, Category::Positive);
    if !positive.is_empty() {
        md.push_str("## 👍 Most Positive\n\n");
        push_quotes(&mut md, &positive);
    }
    let negative = top_comments(&result.results, Category::Negative);
    if !negative.is_empty() {
        md.push_str("## 👎 Most Negative\n\n");
        push_quotes(&mut md, &negative);
    }

    // Footer
    md.push_str("---\n");
    md.push_str("*Generated by sentiment-sense*\n");
    md
}

fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Strongest comments of `category`, most extreme first.
fn top_comments(results: &[ScoredComment], category: Category) -> Vec<&ScoredComment> {
    let mut picked: Vec<&ScoredComment> = results
        .iter()
        .filter(|c| c.category() == category)
        .collect();
    picked.sort_by(|a, b| b.sentiment.abs().total_cmp(&a.sentiment.abs()));
    picked.truncate(HIGHLIGHTS);
    picked
}

fn push_quotes(md: &mut String, comments: &[&ScoredComment]) {
    for c in comments {
        let text = c.text.replace('\n', " ");
        md.push_str(&format!("- \"{}\" ({:+.2})\n", text, c.sentiment));
    }
    md.push('\n');
}

/// Writes one Markdown report per analysis into `reports_dir`.
pub struct MarkdownReportExporter {
    reports_dir: PathBuf,
}

impl MarkdownReportExporter {
    pub fn new(reports_dir: impl AsRef<Path>) -> Self {
        Self {
            reports_dir: reports_dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ReportExporter for MarkdownReportExporter {
    async fn export(
        &self,
        source_url: &str,
        result: &AnalysisResult,
    ) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| DomainError::Export(format!("Failed to create reports dir: {}", e)))?;

        let md = render_markdown(source_url, result, Utc::now());
        let path = self
            .reports_dir
            .join(format!("{}.md", report_stem(source_url)));
        fs::write(&path, md)
            .await
            .map_err(|e| DomainError::Export(format!("Failed to write report: {}", e)))?;

        info!(path = %path.display(), "report generated");
        Ok(path)
    }
}
