//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; analysis is delegated to AnalysisService.
//!
//! Usage: `sentiment-sense [POST_URL] [--json]`

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use sentiment_sense::adapters::export::{CsvExporter, MarkdownReportExporter};
use sentiment_sense::adapters::scoring::LexiconScorer;
use sentiment_sense::adapters::scraper::{HttpScraperSource, JsonFileSource, MockCommentSource};
use sentiment_sense::adapters::ui::tui::TuiInputPort;
use sentiment_sense::ports::{CommentSource, InputPort, ReportExporter};
use sentiment_sense::shared::config::AppConfig;
use sentiment_sense::usecases::{AnalysisService, SentimentPipeline};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "sentiment-sense", version)]
#[command(about = "Score the sentiment of Instagram/YouTube post comments")]
struct Cli {
    /// Post URL to analyze; omit for the interactive prompt
    url: Option<String>,
    /// Print the analysis result as JSON on stdout
    #[arg(long, requires = "url")]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let env_loaded = dotenv();
    // Logs go to stderr so `--json` output stays machine-readable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found (check CWD)"),
    }

    if !args.json {
        sentiment_sense::adapters::ui::init_ui();
    }

    let cfg = AppConfig::load().context("invalid configuration (check SENSE_* variables)")?;

    // --- Comment source: local file > HTTP scraper > mock ---
    let source: Arc<dyn CommentSource> = if let Some(path) = &cfg.input_file {
        info!(path = %path, "reading comments from local file");
        Arc::new(JsonFileSource::new(path))
    } else if let Some(url) = cfg.scraper_url() {
        info!(
            url = %url,
            max_comments = cfg.max_comments_or_default(),
            "using HTTP comment scraper"
        );
        Arc::new(
            HttpScraperSource::new(
                url,
                cfg.scraper_api_key(),
                Duration::from_secs(cfg.scraper_timeout_secs_or_default()),
                cfg.max_comments_or_default(),
            )
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    } else {
        warn!("SENSE_SCRAPER_URL not set, using mock comment source");
        Arc::new(MockCommentSource::new())
    };

    // --- Scoring pipeline ---
    let pipeline = SentimentPipeline::new(Arc::new(LexiconScorer::new()))
        .with_display_limit(cfg.display_text_limit_or_default());

    // --- Report exporters (only when a reports dir is configured) ---
    let exporters: Vec<Arc<dyn ReportExporter>> = match &cfg.reports_dir {
        Some(dir) => {
            let dir = PathBuf::from(dir);
            info!(path = %dir.display(), "reports enabled");
            vec![
                Arc::new(CsvExporter::new(&dir)) as Arc<dyn ReportExporter>,
                Arc::new(MarkdownReportExporter::new(&dir)),
            ]
        }
        None => Vec::new(),
    };

    let service = Arc::new(AnalysisService::new(source, pipeline, exporters));
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(service, args.json));

    // --- Run (single URL from args, otherwise interactive loop) ---
    let outcome = match args.url {
        Some(url) => input_port.run_once(&url).await,
        None => input_port.run().await,
    };
    outcome.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_url_and_json() {
        let cli = Cli::try_parse_from(["sentiment-sense", "https://youtu.be/x", "--json"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://youtu.be/x"));
        assert!(cli.json);

        let cli = Cli::try_parse_from(["sentiment-sense"]).unwrap();
        assert!(cli.url.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_json_requires_url() {
        assert!(Cli::try_parse_from(["sentiment-sense", "--json"]).is_err());
        assert!(Cli::try_parse_from(["sentiment-sense", "a", "b"]).is_err());
    }
}
