//! Aggregator. Reduces a full list of scored comments into one `Summary`.

use super::classifier::{self, Category, Tier};
use super::entities::{ScoredComment, Summary};
use super::errors::DomainError;
use serde_json::Value;

/// Round to two decimals for display. Negative zero is normalized to 0.
pub fn round_score(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Unrounded arithmetic mean of the sentiments; 0 for an empty list.
pub fn mean_sentiment(scored: &[ScoredComment]) -> f64 {
    if scored.is_empty() {
        return 0.0;
    }
    let sum: f64 = scored
        .iter()
        .map(|c| classifier::clamp_score(c.sentiment))
        .sum();
    sum / scored.len() as f64
}

/// Build the summary for one analysis run. Pure; the empty list yields the
/// zero summary with a "Neutral" overall sentiment.
pub fn aggregate(scored: &[ScoredComment]) -> Summary {
    let (mut positive, mut neutral, mut negative) = (0usize, 0usize, 0usize);
    for comment in scored {
        match classifier::classify(comment.sentiment).category {
            Category::Positive => positive += 1,
            Category::Neutral => neutral += 1,
            Category::Negative => negative += 1,
        }
    }

    let average_score = round_score(mean_sentiment(scored));
    let tier = Tier::from_score(average_score);

    Summary {
        emoji: tier.emoji().to_string(),
        overall_sentiment: tier.label().to_string(),
        average_score,
        marketing_comment: tier.marketing_comment().to_string(),
        total_comments: scored.len(),
        positive_count: positive,
        neutral_count: neutral,
        negative_count: negative,
    }
}

/// Aggregate an untyped list of `{text, sentiment}` entries.
///
/// Stray fields are normalized per entry (see [`ScoredComment::from_value`]).
///
/// # Errors
/// Returns `DomainError::InvalidInput` if `value` is not a JSON array.
pub fn aggregate_value(value: &Value) -> Result<Summary, DomainError> {
    let items = value.as_array().ok_or_else(|| {
        DomainError::InvalidInput("expected a list of scored comments".to_string())
    })?;
    let scored: Vec<ScoredComment> = items.iter().map(ScoredComment::from_value).collect();
    Ok(aggregate(&scored))
}
