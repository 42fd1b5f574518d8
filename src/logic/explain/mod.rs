//! Explain Module - Human-readable reasons for a classification

pub mod engine;
pub mod types;


pub use engine::explain;
pub use types::{ExplanationFactor, Impact};
