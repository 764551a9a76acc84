//! Infrastructure adapters. Implement ports.
//!
//! Scoring engine, comment scrapers, report exporters, terminal UI.
//! Map errors to DomainError.

pub mod export;
pub mod scoring;
pub mod scraper;
pub mod ui;
