//! Sentiment classifier. Maps a score to a display tier and a coarse category.
//!
//! Seven tiers are used for display, three categories for aggregate counts.
//! A score sitting exactly on a threshold belongs to the less extreme tier.

use serde::{Deserialize, Serialize};
use std::fmt;

const VERY_STRONG: f64 = 0.7;
const STRONG: f64 = 0.4;
const SLIGHT: f64 = 0.1;

/// Coarse three-way classification used for counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Positive,
    Neutral,
    Negative,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seven descriptive sentiment bands, most positive first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    VeryPositive,
    Positive,
    SlightlyPositive,
    Neutral,
    SlightlyNegative,
    Negative,
    VeryNegative,
}

impl Tier {
    pub const ALL: [Tier; 7] = [
        Tier::VeryPositive,
        Tier::Positive,
        Tier::SlightlyPositive,
        Tier::Neutral,
        Tier::SlightlyNegative,
        Tier::Negative,
        Tier::VeryNegative,
    ];

    /// Tier for a score. Input is clamped first, see [`clamp_score`].
    pub fn from_score(score: f64) -> Self {
        let s = clamp_score(score);
        if s > VERY_STRONG {
            Self::VeryPositive
        } else if s > STRONG {
            Self::Positive
        } else if s > SLIGHT {
            Self::SlightlyPositive
        } else if s >= -SLIGHT {
            Self::Neutral
        } else if s >= -STRONG {
            Self::SlightlyNegative
        } else if s >= -VERY_STRONG {
            Self::Negative
        } else {
            Self::VeryNegative
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryPositive => "Very Positive",
            Self::Positive => "Positive",
            Self::SlightlyPositive => "Slightly Positive",
            Self::Neutral => "Neutral",
            Self::SlightlyNegative => "Slightly Negative",
            Self::Negative => "Negative",
            Self::VeryNegative => "Very Negative",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::VeryPositive => "😃",
            Self::Positive => "😊",
            Self::SlightlyPositive => "🙂",
            Self::Neutral => "😐",
            Self::SlightlyNegative => "😕",
            Self::Negative => "😠",
            Self::VeryNegative => "😡",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::VeryPositive | Self::Positive | Self::SlightlyPositive => Category::Positive,
            Self::Neutral => Category::Neutral,
            Self::SlightlyNegative | Self::Negative | Self::VeryNegative => Category::Negative,
        }
    }

    /// Audience-reception sentence shown with an overall summary of this tier.
    pub fn marketing_comment(&self) -> &'static str {
        match self {
            Self::VeryPositive => {
                "Outstanding reception! Your audience loves this content. Double down on this format and engage with your biggest fans."
            }
            Self::Positive => {
                "Strong positive response. The content resonates well; keep the momentum going with similar posts."
            }
            Self::SlightlyPositive => {
                "Generally favorable reactions. There is room to turn mild interest into real enthusiasm."
            }
            Self::Neutral => {
                "Mixed or neutral reception. The audience is watching but not yet invested; try a clearer hook or call to action."
            }
            Self::SlightlyNegative => {
                "Some audience pushback. Review the critical comments for recurring concerns before the next post."
            }
            Self::Negative => {
                "Predominantly negative feedback. Consider addressing the concerns publicly and adjusting your messaging."
            }
            Self::VeryNegative => {
                "Serious backlash detected. Respond promptly and transparently; reputation management should be a priority."
            }
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub tier: Tier,
    pub label: &'static str,
    pub emoji: &'static str,
}

/// Classify a score. Never fails.
pub fn classify(score: f64) -> Classification {
    let tier = Tier::from_score(score);
    Classification {
        category: tier.category(),
        tier,
        label: tier.label(),
        emoji: tier.emoji(),
    }
}

/// Bring any value into [-1, 1]. NaN has no nearest bound and maps to 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_table() {
        let cases = [
            (1.0, Tier::VeryPositive),
            (0.71, Tier::VeryPositive),
            (0.7, Tier::Positive),
            (0.5, Tier::Positive),
            (0.4, Tier::SlightlyPositive),
            (0.2, Tier::SlightlyPositive),
            (0.1, Tier::Neutral),
            (0.0, Tier::Neutral),
            (-0.1, Tier::Neutral),
            (-0.2, Tier::SlightlyNegative),
            (-0.4, Tier::SlightlyNegative),
            (-0.5, Tier::Negative),
            (-0.7, Tier::Negative),
            (-0.71, Tier::VeryNegative),
            (-1.0, Tier::VeryNegative),
        ];
        for (score, expected) in cases {
            assert_eq!(Tier::from_score(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_threshold_ties_resolve_to_less_extreme_tier() {
        assert_eq!(classify(0.1).category, Category::Neutral);
        assert_eq!(classify(-0.1).category, Category::Neutral);
        assert_eq!(classify(0.4).label, "Slightly Positive");
        assert_eq!(classify(0.7).label, "Positive");
        assert_eq!(classify(-0.4).label, "Slightly Negative");
        assert_eq!(classify(-0.7).label, "Negative");
    }

    #[test]
    fn test_neutral_band_is_neutral() {
        let mut s = -0.1;
        while s <= 0.1 {
            assert_eq!(classify(s).category, Category::Neutral, "score {}", s);
            s += 0.005;
        }
    }

    #[test]
    fn test_above_very_strong_is_very_positive() {
        for s in [0.7000001, 0.75, 0.9, 0.999, 1.0] {
            let c = classify(s);
            assert_eq!(c.label, "Very Positive");
            assert_eq!(c.emoji, "😃");
            assert_eq!(c.category, Category::Positive);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(classify(5.0).tier, Tier::VeryPositive);
        assert_eq!(classify(-42.0).tier, Tier::VeryNegative);
        assert_eq!(classify(f64::INFINITY).tier, Tier::VeryPositive);
        assert_eq!(classify(f64::NEG_INFINITY).tier, Tier::VeryNegative);
        assert_eq!(classify(f64::NAN).tier, Tier::Neutral);
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(2.0), 1.0);
    }

    #[test]
    fn test_each_tier_has_distinct_text() {
        for (i, a) in Tier::ALL.iter().enumerate() {
            for b in &Tier::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.emoji(), b.emoji());
                assert_ne!(a.marketing_comment(), b.marketing_comment());
            }
        }
    }
}
