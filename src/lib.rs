//! sentiment-sense: comment sentiment scoring and audience summary with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
