//! Summarization components
//!
//! Candidate filtering, automatic length estimation, redundancy-aware
//! selection, and the pluggable strategy seam.

pub mod candidates;
pub mod estimator;
pub mod selector;
pub mod strategy;

pub use candidates::CandidateFilter;
pub use estimator::{estimate_target, DocumentStats};
pub use selector::{SelectionResult, SentenceSelector};
pub use strategy::{ExtractiveSummarizer, Summarizer, WithFallback};
