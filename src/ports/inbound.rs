//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI invokes application use cases.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Analyze a single post URL and present the outcome.
    async fn run_once(&self, url: &str) -> Result<(), DomainError>;

    /// Interactive loop: prompt for URLs until the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
