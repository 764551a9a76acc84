//! Lexicon-based sentiment scorer. Implements `SentimentScorer`.
//!
//! Tokenizes a comment into lowercase words and single emoji, looks each token
//! up in the lexicon and averages the matched scores. Modifiers scale the next
//! matched token; a negation flips (and damps) matches within a short window.

use super::lexicon::SentimentLexicon;
use crate::ports::SentimentScorer;
use regex::Regex;
use std::sync::LazyLock;

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("URL pattern is valid")
});
static MENTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[\w.]+").expect("mention pattern is valid"));
/// A word (letters/digits with inner apostrophes) or one pictographic emoji.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:'[\p{L}\p{N}]+)*|[\p{Extended_Pictographic}--\p{Emoji_Modifier}]")
        .expect("token pattern is valid")
});

/// Default number of tokens a negation stays active for.
pub const DEFAULT_NEGATION_WINDOW: usize = 3;

/// Damping applied to a negated score ("not great" is weaker than "bad").
const NEGATION_DAMPING: f64 = 0.8;

/// Default scorer backed by [`SentimentLexicon`].
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: SentimentLexicon,
    negation_window: usize,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            lexicon: SentimentLexicon::new(),
            negation_window: DEFAULT_NEGATION_WINDOW,
        }
    }

    pub fn with_lexicon(mut self, lexicon: SentimentLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    /// Split text into lowercase word tokens and standalone emoji.
    ///
    /// Links and @mentions are dropped before matching; hashtags keep their
    /// words ("#love" -> "love"). Apostrophes stay inside words ("don't") and
    /// typographic apostrophes are normalized. Emoji joiners, variation
    /// selectors and skin-tone modifiers never become tokens.
    pub fn tokenize(text: &str) -> Vec<String> {
        let text = text.replace('\u{2019}', "'");
        let text = URL_REGEX.replace_all(&text, " ");
        let text = MENTION_REGEX.replace_all(&text, " ");
        TOKEN_REGEX
            .find_iter(&text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let tokens = Self::tokenize(text);

        let mut total = 0.0;
        let mut matched = 0usize;
        let mut modifier = 1.0;
        let mut negation_active = false;
        let mut since_negation = 0usize;

        for token in &tokens {
            if self.lexicon.is_negation(token) {
                negation_active = true;
                since_negation = 0;
                continue;
            }

            if let Some(factor) = self.lexicon.get_modifier(token) {
                modifier = factor;
                continue;
            }

            if let Some(base) = self.lexicon.get_score(token) {
                let mut score = base * modifier;
                if negation_active && since_negation < self.negation_window {
                    score = -score * NEGATION_DAMPING;
                }
                total += score;
                matched += 1;
                modifier = 1.0;
            }

            if negation_active {
                since_negation += 1;
                if since_negation >= self.negation_window {
                    negation_active = false;
                }
            }
        }

        if matched == 0 {
            return 0.0;
        }
        let mean = total / matched as f64;
        if mean.is_finite() {
            mean.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}
