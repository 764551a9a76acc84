//! Scoring adapter module. Implements SentimentScorer.

pub mod lexicon;
pub mod lexicon_scorer;

pub use lexicon::SentimentLexicon;
pub use lexicon_scorer::LexiconScorer;
