pub mod config;
pub mod engine;

pub use config::{CategoryWeight, ScoringConfig, MAX_WEIGHT};
pub use engine::{aggregate, score};
