//! # rapid_summarizer
//!
//! Extractive summarization of documents and timestamped transcripts.
//!
//! Documents are split into sentences, filtered for quality, scored by a
//! weighted combination of TF-IDF relevance, graph centrality, position,
//! surface cues and length, then selected greedily while rejecting
//! near-duplicates. Transcripts are first cut into topic segments by
//! comparing TF-IDF vectors of neighbouring windows; each segment gets a
//! short summary stamped with its start time.
//!
//! ## Quick start
//!
//! ```rust
//! use rapid_summarizer::summarize;
//!
//! let text = "Rust compilers check ownership rules at build time. \
//!     Glaciers carve deep valleys over many centuries. \
//!     The borrow checker in Rust compilers rejects unsafe aliasing.";
//!
//! let summary = summarize(text, Some(2)).unwrap();
//! assert_eq!(summary.selected_count, 2);
//! ```
//!
//! Every call is independent and deterministic. The only shared state is
//! the read-only stopword list.

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod scoring;
pub mod similarity;
pub mod summarizer;
pub mod transcript;
pub mod types;

pub use errors::{Result, SummarizeError};
pub use pipeline::{SummaryPipeline, SummaryRequest, TranscriptPipeline};
pub use summarizer::{ExtractiveSummarizer, Summarizer, WithFallback};
pub use transcript::format_timestamp;
pub use types::{
    Segment, SegmentSummaryConfig, SegmenterConfig, Summary, SummarizerConfig, TimestampedSummary,
    TranscriptEntry, TranscriptSummary,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text` with the default configuration
///
/// `target_sentences` of `None` or `Some(0)` estimates the length from the
/// document size.
pub fn summarize(text: &str, target_sentences: Option<usize>) -> Result<Summary> {
    SummaryPipeline::default().summarize(text, target_sentences)
}

/// Segment `entries` by topic and summarize each segment
///
/// `window_size` is the number of entries compared on each side of a
/// candidate boundary; `threshold` is the cosine similarity below which a
/// boundary is accepted.
pub fn summarize_transcript(
    entries: &[TranscriptEntry],
    window_size: usize,
    threshold: f64,
) -> Result<TranscriptSummary> {
    let segmenter = SegmenterConfig::default()
        .with_window_size(window_size)
        .with_threshold(threshold);
    TranscriptPipeline::new(segmenter, SegmentSummaryConfig::default())?.summarize(entries)
}
