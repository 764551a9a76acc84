//! CSV export of per-comment results. Uses the `csv` crate for safe serialization.
//!
//! Format: `index;text;sentiment;category;tier` (semicolon-delimited, header row).

use super::report_stem;
use crate::domain::{AnalysisResult, DomainError};
use crate::ports::ReportExporter;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Convert results to a CSV string.
///
/// Newlines inside comment text are replaced with spaces; the csv crate
/// handles quoting of delimiters and quotes.
pub fn results_to_csv(result: &AnalysisResult) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_writer(Vec::new());

    wtr.write_record(["index", "text", "sentiment", "category", "tier"])?;

    for (i, item) in result.results.iter().enumerate() {
        let classification = item.classification();
        let clean_text = item.text.replace('\n', " ").replace('\r', "");
        wtr.write_record([
            i.to_string(),
            clean_text,
            format!("{:.2}", item.sentiment),
            classification.category.to_string(),
            classification.label.to_string(),
        ])?;
    }

    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;

    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

/// Writes one CSV file per analysis into `reports_dir`.
pub struct CsvExporter {
    reports_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(reports_dir: impl AsRef<Path>) -> Self {
        Self {
            reports_dir: reports_dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ReportExporter for CsvExporter {
    async fn export(
        &self,
        source_url: &str,
        result: &AnalysisResult,
    ) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| DomainError::Export(format!("Failed to create reports dir: {}", e)))?;

        let content = results_to_csv(result)
            .map_err(|e| DomainError::Export(format!("Failed to generate CSV: {}", e)))?;

        let path = self
            .reports_dir
            .join(format!("{}.csv", report_stem(source_url)));
        fs::write(&path, content)
            .await
            .map_err(|e| DomainError::Export(format!("Failed to write CSV: {}", e)))?;

        info!(path = %path.display(), rows = result.results.len(), "csv exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ScoredComment, aggregate};

    fn sample() -> AnalysisResult {
        let results = vec![
            ScoredComment::new("Love it", 0.8),
            ScoredComment::new("Hmm; \"really\"?\nok", 0.0),
            ScoredComment::new("awful", -0.8),
        ];
        let summary = aggregate(&results);
        AnalysisResult { results, summary }
    }

    #[test]
    fn test_results_to_csv() {
        let csv = results_to_csv(&sample()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("index;text;sentiment;category;tier"));
        assert_eq!(lines.next(), Some("0;Love it;0.80;positive;Very Positive"));
        // Delimiter and quotes inside text are quoted, newline flattened.
        assert_eq!(csv.lines().count(), 4);
        assert!(csv.contains("-0.80;negative;Very Negative"));
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CsvExporter::new(dir.path().join("reports"));
        let path = exporter
            .export("https://www.instagram.com/p/abc/", &sample())
            .await
            .unwrap();

        assert!(path.extension().is_some_and(|e| e == "csv"));
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.starts_with("index;text;sentiment;category;tier"));
    }
}
