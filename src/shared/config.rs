//! Application configuration. Scraper endpoint, input and report paths.

use serde::Deserialize;

/// Comment text longer than this many characters is cut for display.
pub const DEFAULT_DISPLAY_TEXT_LIMIT: usize = 150;

/// Upper bound on comments requested from the scraper per post.
pub const DEFAULT_MAX_COMMENTS: usize = 500;

/// Scraper request timeout in seconds.
pub const DEFAULT_SCRAPER_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Comment Source Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Base URL of the comment scraping service. Read from SENSE_SCRAPER_URL.
    #[serde(default)]
    pub scraper_url: Option<String>,

    /// Bearer token for the scraping service (optional). Read from SENSE_SCRAPER_API_KEY.
    #[serde(default)]
    pub scraper_api_key: Option<String>,

    /// Scraper request timeout in seconds (default 30). Read from SENSE_SCRAPER_TIMEOUT_SECS.
    #[serde(default)]
    pub scraper_timeout_secs: Option<u64>,

    /// Max comments requested per post (default 500). Read from SENSE_MAX_COMMENTS.
    #[serde(default)]
    pub max_comments: Option<usize>,

    /// Local JSON file with comments; takes precedence over the scraper. Read from SENSE_INPUT_FILE.
    #[serde(default)]
    pub input_file: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Output Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Directory for CSV and Markdown reports. Unset = no reports. Read from SENSE_REPORTS_DIR.
    #[serde(default)]
    pub reports_dir: Option<String>,

    /// Display truncation limit in characters (default 150). Read from SENSE_DISPLAY_TEXT_LIMIT.
    #[serde(default)]
    pub display_text_limit: Option<usize>,
}

impl AppConfig {
    /// Load from `SENSE_*` variables plus the optional file named by SENSE_CONFIG.
    ///
    /// A malformed value is an error; nothing falls back to defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        Self::from_sources(
            config::Environment::with_prefix("SENSE"),
            std::env::var("SENSE_CONFIG").ok(),
        )
    }

    fn from_sources(
        env: config::Environment,
        file: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        c = c.add_source(env.try_parsing(true));
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the scraper base URL without a trailing slash, if configured.
    pub fn scraper_url(&self) -> Option<String> {
        self.scraper_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
    }

    /// Returns the scraper API key if configured and non-empty.
    pub fn scraper_api_key(&self) -> Option<String> {
        self.scraper_api_key
            .clone()
            .filter(|s| !s.trim().is_empty())
    }

    /// Returns scraper timeout in seconds. Defaults to 30; 0 is treated as unset.
    pub fn scraper_timeout_secs_or_default(&self) -> u64 {
        self.scraper_timeout_secs
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_SCRAPER_TIMEOUT_SECS)
    }

    /// Returns max comments per post. Defaults to DEFAULT_MAX_COMMENTS; 0 is treated as unset.
    pub fn max_comments_or_default(&self) -> usize {
        self.max_comments
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_MAX_COMMENTS)
    }

    /// Returns the display truncation limit. Defaults to DEFAULT_DISPLAY_TEXT_LIMIT.
    pub fn display_text_limit_or_default(&self) -> usize {
        self.display_text_limit
            .unwrap_or(DEFAULT_DISPLAY_TEXT_LIMIT)
    }

    /// Returns true if the HTTP scraper is configured.
    pub fn is_scraper_configured(&self) -> bool {
        self.scraper_url().is_some()
    }
}
