//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the sentiment classifier and the aggregator live here.
//! Dependencies flow inward.

pub mod aggregator;
pub mod classifier;
pub mod entities;
pub mod errors;

pub use aggregator::{aggregate, aggregate_value};
pub use classifier::{Category, Classification, Tier, classify};
pub use entities::{AnalysisResult, Comment, Platform, ScoredComment, Summary};
pub use errors::DomainError;
