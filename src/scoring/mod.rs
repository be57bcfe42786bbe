//! Sentence importance scoring
//!
//! Document summarization and transcript segment summarization share one
//! [`SentenceScorer`]; they differ only in the [`ScoringProfile`] applied.

pub mod factors;
pub mod scorer;

pub use scorer::{DocumentProfile, FactorTable, ScoringProfile, SentenceScorer};
