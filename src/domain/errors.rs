//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Structurally malformed input (e.g. a comment payload that is not a list).
    /// Surfaced to the caller, never recovered.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported URL: {0}")]
    UnsupportedUrl(String),

    #[error("Comment scraper error: {0}")]
    Scraper(String),

    #[error("Report export failed: {0}")]
    Export(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Background scoring task panicked or was cancelled.
    #[error("Analysis task failed: {0}")]
    Task(String),
}
