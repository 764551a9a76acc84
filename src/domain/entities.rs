//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here. Adapters map scraper payloads into these.

use super::classifier::{self, Category, Classification};
use super::errors::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A raw comment as delivered by the scraper. Text may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub text: Option<String>,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// A comment whose text the scraper could not provide.
    pub fn missing() -> Self {
        Self { text: None }
    }

    /// Text used for scoring. Missing text reads as the empty string.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Lenient mapping from a single scraper entry.
    ///
    /// Accepts a bare string or an object with a string `text` field. Anything
    /// else becomes a comment with missing text rather than being dropped.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::new(s.as_str()),
            Value::Object(map) => match map.get("text") {
                Some(Value::String(s)) => Self::new(s.as_str()),
                _ => Self::missing(),
            },
            _ => Self::missing(),
        }
    }

    /// Map a scraper payload to comments, preserving order and length.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidInput` if `value` is not a JSON array.
    pub fn list_from_value(value: &Value) -> Result<Vec<Self>, DomainError> {
        let items = value.as_array().ok_or_else(|| {
            DomainError::InvalidInput(format!(
                "expected a list of comments, got {}",
                json_kind(value)
            ))
        })?;
        Ok(items.iter().map(Self::from_value).collect())
    }
}

impl From<&str> for Comment {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Comment {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A comment paired with its sentiment score in [-1, 1].
///
/// `text` is the display text (possibly truncated); the score was computed from
/// the full original text. Category is not stored, see [`ScoredComment::category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredComment {
    pub text: String,
    pub sentiment: f64,
}

impl ScoredComment {
    pub fn new(text: impl Into<String>, sentiment: f64) -> Self {
        Self {
            text: text.into(),
            sentiment: classifier::clamp_score(sentiment),
        }
    }

    /// Lenient mapping from a previously serialized result entry.
    /// Non-string text becomes empty; non-numeric sentiment becomes 0.
    pub fn from_value(value: &Value) -> Self {
        let text = value
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let sentiment = value
            .get("sentiment")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        Self::new(text, sentiment)
    }

    pub fn category(&self) -> Category {
        self.classification().category
    }

    pub fn classification(&self) -> Classification {
        classifier::classify(self.sentiment)
    }
}

/// Aggregate statistics over one full comment set.
///
/// Field names serialize in camelCase to match the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub emoji: String,
    pub overall_sentiment: String,
    pub average_score: f64,
    pub marketing_comment: String,
    pub total_comments: usize,
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
}

/// Complete output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub results: Vec<ScoredComment>,
    pub summary: Summary,
}

/// Social platform a post URL belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    YouTube,
}

impl Platform {
    /// Resolve the platform from a post URL.
    ///
    /// # Errors
    /// `InvalidInput` for a blank URL, `UnsupportedUrl` for anything that is
    /// neither an Instagram nor a YouTube link.
    pub fn from_url(url: &str) -> Result<Self, DomainError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(DomainError::InvalidInput("empty URL".to_string()));
        }
        let lower = url.to_lowercase();
        if lower.contains("youtube.com") || lower.contains("youtu.be") {
            Ok(Self::YouTube)
        } else if lower.contains("instagram.com") {
            Ok(Self::Instagram)
        } else {
            Err(DomainError::UnsupportedUrl(format!(
                "{} (expected an Instagram or YouTube post link)",
                url
            )))
        }
    }

    /// Path segment used by scraper endpoints.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::YouTube => "youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instagram => write!(f, "Instagram"),
            Self::YouTube => write!(f, "YouTube"),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
