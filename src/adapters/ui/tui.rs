//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Prompts for a post URL, runs the analysis behind a spinner and prints the
//! summary and per-comment results (or raw JSON).

use super::progress::spinner;
use crate::domain::{AnalysisResult, DomainError};
use crate::ports::InputPort;
use crate::usecases::AnalysisService;
use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{InquireError, Text};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::warn;

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightMagenta))
        .with_answered_prompt_prefix(Styled::new("✔").with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

/// Render a result for the terminal. Pure, so it can be tested.
pub fn render_result(result: &AnalysisResult) -> String {
    let s = &result.summary;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "\n{}  {}  (score {:+.2})",
        s.emoji, s.overall_sentiment, s.average_score
    );
    let _ = writeln!(out, "{}", s.marketing_comment);
    let _ = writeln!(
        out,
        "Total {} | Positive {} | Neutral {} | Negative {}\n",
        s.total_comments, s.positive_count, s.neutral_count, s.negative_count
    );

    let width = result.results.len().to_string().len();
    for (i, item) in result.results.iter().enumerate() {
        let c = item.classification();
        let text = if item.text.is_empty() {
            "(no text)"
        } else {
            item.text.as_str()
        };
        let _ = writeln!(
            out,
            "{:>width$}. {} {:<17} {:+.2}  {}",
            i + 1,
            c.emoji,
            c.label,
            item.sentiment,
            text.replace('\n', " "),
            width = width
        );
    }
    out
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<AnalysisService>,
    json_output: bool,
}

impl TuiInputPort {
    /// `json_output` prints the raw `AnalysisResult` JSON instead of the rendered view.
    pub fn new(service: Arc<AnalysisService>, json_output: bool) -> Self {
        Self {
            service,
            json_output,
        }
    }

    fn print_result(&self, result: &AnalysisResult) -> Result<(), DomainError> {
        if self.json_output {
            let json = serde_json::to_string_pretty(result)
                .map_err(|e| DomainError::Export(format!("serialize result: {}", e)))?;
            println!("{}", json);
        } else {
            print!("{}", render_result(result));
        }
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run_once(&self, url: &str) -> Result<(), DomainError> {
        let pb = (!self.json_output).then(|| spinner("Fetching and scoring comments..."));
        let outcome = self.service.analyze_url(url).await;
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }
        let result = outcome?;

        self.print_result(&result)?;

        if self.service.has_exporters() {
            for path in self.service.export(url, &result).await? {
                if !self.json_output {
                    println!("Report saved: {}", path.display());
                }
            }
        }
        Ok(())
    }

    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let answer = Text::new("Post URL (Instagram or YouTube):")
                .with_help_message("Leave empty or press Esc to quit")
                .prompt();

            let url = match answer {
                Ok(url) => url,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(e) => return Err(DomainError::Prompt(e.to_string())),
            };
            if url.trim().is_empty() {
                return Ok(());
            }

            match self.run_once(&url).await {
                Ok(()) => {}
                Err(e) if is_recoverable(&e) => {
                    warn!(error = %e, "analysis failed");
                    eprintln!("✖ {}", e);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Errors that end one analysis but leave the prompt loop running.
fn is_recoverable(err: &DomainError) -> bool {
    matches!(
        err,
        DomainError::InvalidInput(_)
            | DomainError::UnsupportedUrl(_)
            | DomainError::Scraper(_)
            | DomainError::Export(_)
    )
}
