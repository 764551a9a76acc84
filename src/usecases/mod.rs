//! Application use cases. Orchestrate domain logic via ports.

pub mod analysis_service;
pub mod pipeline;

pub use analysis_service::AnalysisService;
pub use pipeline::SentimentPipeline;
