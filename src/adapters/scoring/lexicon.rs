//! Sentiment lexicon for social-media comments.
//!
//! Maps lowercase words and single emoji to polarity scores in [-1, 1],
//! plus intensity modifiers and negation words.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// Strongly positive words and emoji (0.7 - 1.0).
const STRONG_POSITIVE: &[(&str, f64)] = &[
    ("love", 0.8),
    ("loved", 0.8),
    ("loving", 0.75),
    ("amazing", 0.85),
    ("excellent", 0.85),
    ("fantastic", 0.85),
    ("wonderful", 0.85),
    ("incredible", 0.8),
    ("awesome", 0.8),
    ("perfect", 0.85),
    ("masterpiece", 0.9),
    ("brilliant", 0.8),
    ("best", 0.8),
    ("beautiful", 0.75),
    ("gorgeous", 0.8),
    ("stunning", 0.8),
    ("legendary", 0.8),
    ("legend", 0.7),
    ("outstanding", 0.85),
    ("superb", 0.85),
    ("great", 0.7),
    ("happy", 0.7),
    ("lovely", 0.7),
    ("favorite", 0.7),
    ("favourite", 0.7),
    ("congrats", 0.7),
    ("congratulations", 0.7),
    ("epic", 0.7),
    ("adorable", 0.7),
    ("inspiring", 0.7),
    ("😍", 0.9),
    ("🥰", 0.9),
    ("❤", 0.8),
    ("💕", 0.8),
    ("😃", 0.75),
    ("😁", 0.7),
    ("😊", 0.7),
    ("🤩", 0.85),
    ("💯", 0.7),
];

/// Moderately positive words and emoji (0.2 - 0.65).
const MODERATE_POSITIVE: &[(&str, f64)] = &[
    ("good", 0.5),
    ("nice", 0.5),
    ("cool", 0.45),
    ("fun", 0.5),
    ("funny", 0.45),
    ("glad", 0.5),
    ("enjoy", 0.6),
    ("enjoyed", 0.6),
    ("helpful", 0.6),
    ("useful", 0.5),
    ("cute", 0.6),
    ("sweet", 0.5),
    ("wow", 0.5),
    ("fire", 0.5),
    ("lit", 0.5),
    ("goat", 0.6),
    ("inspired", 0.6),
    ("recommend", 0.6),
    ("proud", 0.6),
    ("win", 0.6),
    ("winning", 0.6),
    ("support", 0.4),
    ("thanks", 0.4),
    ("thank", 0.4),
    ("like", 0.3),
    ("liked", 0.4),
    ("underrated", 0.4),
    ("interesting", 0.35),
    ("lol", 0.3),
    ("haha", 0.3),
    ("yes", 0.2),
    ("🔥", 0.6),
    ("👍", 0.6),
    ("👏", 0.6),
    ("🙌", 0.6),
    ("🙂", 0.35),
    ("😂", 0.4),
];

/// Strongly negative words and emoji (-0.7 to -1.0).
const STRONG_NEGATIVE: &[(&str, f64)] = &[
    ("hate", -0.85),
    ("hated", -0.85),
    ("terrible", -0.8),
    ("awful", -0.8),
    ("horrible", -0.85),
    ("worst", -0.85),
    ("disgusting", -0.85),
    ("scam", -0.85),
    ("pathetic", -0.75),
    ("trash", -0.7),
    ("garbage", -0.7),
    ("sucks", -0.7),
    ("hideous", -0.8),
    ("atrocious", -0.9),
    ("😡", -0.9),
    ("🤬", -0.95),
    ("🤮", -0.9),
    ("😠", -0.7),
];

/// Moderately negative words and emoji (-0.2 to -0.65).
const MODERATE_NEGATIVE: &[(&str, f64)] = &[
    ("bad", -0.6),
    ("poor", -0.5),
    ("boring", -0.5),
    ("ugly", -0.6),
    ("stupid", -0.6),
    ("dumb", -0.55),
    ("cringe", -0.55),
    ("disappointing", -0.6),
    ("disappointed", -0.6),
    ("annoying", -0.5),
    ("sad", -0.45),
    ("angry", -0.6),
    ("fake", -0.55),
    ("waste", -0.6),
    ("wrong", -0.4),
    ("suck", -0.6),
    ("lame", -0.5),
    ("mediocre", -0.35),
    ("overrated", -0.4),
    ("useless", -0.6),
    ("ridiculous", -0.5),
    ("offensive", -0.6),
    ("dislike", -0.6),
    ("unfollow", -0.5),
    ("clickbait", -0.5),
    ("misleading", -0.5),
    ("broken", -0.45),
    ("fail", -0.55),
    ("failed", -0.55),
    ("problem", -0.3),
    ("meh", -0.2),
    ("👎", -0.6),
    ("😢", -0.45),
    ("😒", -0.4),
    ("🙄", -0.4),
    ("😕", -0.35),
    ("💩", -0.6),
];

/// Intensifiers (> 1.0) and diminishers (< 1.0). Applied to the next scored token.
const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.2),
    ("super", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("highly", 1.3),
    ("pretty", 1.1),
    ("most", 1.2),
    ("slightly", 0.5),
    ("somewhat", 0.6),
    ("kinda", 0.6),
    ("barely", 0.4),
    ("hardly", 0.4),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't",
    "isnt", "wasn't", "wasnt", "aren't", "arent", "can't", "cant", "cannot", "won't", "wont",
    "nothing", "nobody", "neither", "nor", "without",
];

/// Word/emoji sentiment dictionary. Lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    words: HashMap<String, f64>,
    modifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl SentimentLexicon {
    /// Lexicon with no entries.
    pub fn empty() -> Self {
        Self {
            words: HashMap::new(),
            modifiers: HashMap::new(),
            negations: HashSet::new(),
        }
    }

    /// Built-in English social-media lexicon.
    pub fn new() -> Self {
        let mut lexicon = Self::empty();
        for table in [
            STRONG_POSITIVE,
            MODERATE_POSITIVE,
            STRONG_NEGATIVE,
            MODERATE_NEGATIVE,
        ] {
            for (word, score) in table {
                lexicon.add_word(word, *score);
            }
        }
        for (word, factor) in MODIFIERS {
            lexicon.modifiers.insert((*word).to_string(), *factor);
        }
        lexicon.negations = NEGATIONS.iter().map(|w| (*w).to_string()).collect();
        lexicon
    }

    /// Add or replace a word. The score is clamped to [-1, 1].
    pub fn add_word(&mut self, word: &str, score: f64) {
        self.words
            .insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
    }

    pub fn get_score(&self, token: &str) -> Option<f64> {
        self.words.get(&*lowercase(token)).copied()
    }

    pub fn get_modifier(&self, token: &str) -> Option<f64> {
        self.modifiers.get(&*lowercase(token)).copied()
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(&*lowercase(token))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Tokens from the scorer are already lowercase; only allocate for the rest.
fn lowercase(token: &str) -> Cow<'_, str> {
    if token.chars().any(char::is_uppercase) {
        Cow::Owned(token.to_lowercase())
    } else {
        Cow::Borrowed(token)
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new()
    }
}
