//! Report export module. Implements ReportExporter.
//!
//! CSV for per-comment rows, Markdown for a human-readable digest.

pub mod csv_export;
pub mod markdown_report;

pub use csv_export::{CsvExporter, results_to_csv};
pub use markdown_report::{MarkdownReportExporter, render_markdown};

use crate::domain::Platform;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

static REPORT_SEQ: AtomicU64 = AtomicU64::new(0);

/// File stem for a report: `sentiment_{platform}_{UTC timestamp, ms}_{seq}`.
///
/// The per-process sequence keeps stems unique within the same millisecond.
pub fn report_stem(source_url: &str) -> String {
    let platform = Platform::from_url(source_url)
        .map(|p| p.slug())
        .unwrap_or("post");
    format!(
        "sentiment_{}_{}_{}",
        platform,
        Utc::now().format("%Y%m%d_%H%M%S_%3f"),
        REPORT_SEQ.fetch_add(1, Ordering::Relaxed)
    )
}
