//! Core types for rapid_summarizer
//!
//! This module defines the data structures shared across the engine:
//! tokenized sentences, summary outputs, transcript entries and segments,
//! and the configuration structs for every stage.

use crate::errors::{Result, SummarizeError};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::Range;

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
///
/// Immutable once produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text (whitespace collapsed)
    pub text: String,
    /// Sentence index within the document
    pub index: usize,
    /// Lower-cased words, punctuation removed
    pub words: Vec<String>,
    /// Lower-cased words with stopwords removed
    pub terms: Vec<String>,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(
        text: impl Into<String>,
        index: usize,
        words: Vec<String>,
        terms: Vec<String>,
    ) -> Self {
        Self {
            text: text.into(),
            index,
            words,
            terms,
        }
    }

    /// Number of words in the sentence
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Distinct lower-cased words
    pub fn word_set(&self) -> FxHashSet<&str> {
        self.words.iter().map(String::as_str).collect()
    }
}

// ============================================================================
// Summary output
// ============================================================================

/// Result of summarizing a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences in document order
    pub selected_sentences: Vec<String>,
    /// Number of sentences the tokenizer found in the input
    pub original_sentence_count: usize,
    /// Number of selected sentences
    pub selected_count: usize,
}

impl Summary {
    /// Create a summary from sentences already in document order
    pub fn new(selected_sentences: Vec<String>, original_sentence_count: usize) -> Self {
        let selected_count = selected_sentences.len();
        Self {
            selected_sentences,
            original_sentence_count,
            selected_count,
        }
    }

    /// The summary as a single string, whitespace collapsed
    pub fn text(&self) -> String {
        self.selected_sentences
            .iter()
            .flat_map(|s| s.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Word counts and compression ratio against the original text
    pub fn stats(&self, original: &str) -> SummaryStats {
        let original_words = original.split_whitespace().count();
        let summary_words = self.text().split_whitespace().count();
        let compression_ratio = if original_words == 0 {
            0.0
        } else {
            let ratio = (1.0 - summary_words as f64 / original_words as f64) * 100.0;
            (ratio * 10.0).round() / 10.0
        };
        SummaryStats {
            original_words,
            summary_words,
            compression_ratio,
        }
    }
}

/// Size statistics for a summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub original_words: usize,
    pub summary_words: usize,
    /// Percentage of words removed, rounded to one decimal
    pub compression_ratio: f64,
}

// ============================================================================
// Transcript
// ============================================================================

/// A timestamped chunk of a transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub text: String,
    /// Start time in seconds
    #[serde(alias = "start")]
    pub start_seconds: f64,
    /// Duration in seconds
    #[serde(alias = "duration", default)]
    pub duration_seconds: f64,
}

impl TranscriptEntry {
    /// Create a new transcript entry
    pub fn new(text: impl Into<String>, start_seconds: f64, duration_seconds: f64) -> Self {
        Self {
            text: text.into(),
            start_seconds,
            duration_seconds,
        }
    }

    /// End time in seconds
    pub fn end_seconds(&self) -> f64 {
        self.start_seconds + self.duration_seconds
    }
}

/// A contiguous run of transcript entries sharing a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start time of the first entry
    pub start_seconds: f64,
    /// Entry indices covered by this segment
    pub entries: Range<usize>,
    /// Entry texts joined by single spaces
    pub text: String,
}

/// Summary of one topic segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestampedSummary {
    /// `MM:SS` or `HH:MM:SS`
    pub timestamp: String,
    pub start_seconds: f64,
    pub summary: String,
}

/// Result of summarizing a transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSummary {
    /// One summary per topic segment, chronological
    pub segments: Vec<TimestampedSummary>,
    pub total_segments: usize,
    /// Formatted end time of the last entry
    pub total_duration: String,
    /// Segment summaries joined by a space
    pub full_summary: String,
}

// ============================================================================
// Configuration
// ============================================================================

/// Weights for combining the document scoring factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub relevance: f64,
    pub centrality: f64,
    pub position: f64,
    pub surface: f64,
    pub length: f64,
    /// Weight of the constant diversity term
    pub diversity: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            relevance: 3.0,
            centrality: 2.5,
            position: 2.0,
            surface: 1.5,
            length: 1.0,
            diversity: 0.5,
        }
    }
}

impl ScoreWeights {
    fn validate(&self) -> Result<()> {
        let all = [
            ("relevance", self.relevance),
            ("centrality", self.centrality),
            ("position", self.position),
            ("surface", self.surface),
            ("length", self.length),
            ("diversity", self.diversity),
        ];
        for (name, value) in all {
            if !value.is_finite() || value < 0.0 {
                return Err(SummarizeError::invalid_config(format!(
                    "weight {name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Weights for the lightweight segment scoring profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentWeights {
    pub position: f64,
    pub length: f64,
    /// Content-word count at which the length factor saturates
    pub length_norm: usize,
}

impl Default for SegmentWeights {
    fn default() -> Self {
        Self {
            position: 0.6,
            length: 0.4,
            length_norm: 15,
        }
    }
}

/// Settings for the centrality power iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentralityConfig {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Fixed number of iterations; there is no convergence check
    pub iterations: usize,
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 10,
        }
    }
}

/// Settings for the TF-IDF vectorizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfConfig {
    /// Keep only the most frequent terms (0 = unlimited)
    pub max_features: usize,
    /// Minimum number of documents a term must appear in
    pub min_df: usize,
    /// Maximum fraction of documents a term may appear in
    pub max_df: f64,
    /// Inclusive n-gram range, e.g. `(1, 2)` for unigrams and bigrams
    pub ngram_range: (usize, usize),
    /// Tokens shorter than this (in chars) are ignored
    pub min_token_len: usize,
    /// Use `1 + ln(tf)` instead of raw counts
    pub sublinear_tf: bool,
    /// Add one to document frequencies, as if an extra document held every term
    pub smooth_idf: bool,
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            max_features: 0,
            min_df: 1,
            max_df: 1.0,
            ngram_range: (1, 1),
            min_token_len: 2,
            sublinear_tf: false,
            smooth_idf: true,
        }
    }
}

impl TfIdfConfig {
    /// Settings for per-sentence content relevance
    pub fn relevance() -> Self {
        Self {
            max_features: 200,
            max_df: 0.85,
            ngram_range: (1, 2),
            ..Self::default()
        }
    }

    /// Settings for comparing transcript windows
    pub fn topic_window() -> Self {
        Self {
            max_features: 50,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = self.ngram_range;
        if lo == 0 || hi < lo {
            return Err(SummarizeError::invalid_config(format!(
                "ngram_range must satisfy 1 <= min <= max, got ({lo}, {hi})"
            )));
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(SummarizeError::invalid_config(format!(
                "max_df must be in (0, 1], got {}",
                self.max_df
            )));
        }
        Ok(())
    }
}

/// Configuration for document summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    #[serde(default)]
    pub weights: ScoreWeights,
    #[serde(default)]
    pub centrality: CentralityConfig,
    #[serde(default = "TfIdfConfig::relevance")]
    pub relevance: TfIdfConfig,
    /// Jaccard similarity above which a candidate is redundant
    pub redundancy_threshold: f64,
    /// Minimum words for a candidate sentence
    pub min_words: usize,
    /// Maximum words for a candidate sentence
    pub max_words: usize,
    /// All-caps sentences shorter than this are treated as headlines
    pub headline_max_words: usize,
    /// Sentence count from which the similarity matrix is built in parallel
    pub parallel_threshold: usize,
    /// Treat ", " as a sentence boundary
    ///
    /// Off by default. Turning it on reproduces summarizers that always
    /// break comma-chained text into clauses before splitting sentences.
    #[serde(default)]
    pub split_clauses: bool,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            weights: ScoreWeights::default(),
            centrality: CentralityConfig::default(),
            relevance: TfIdfConfig::relevance(),
            redundancy_threshold: 0.5,
            min_words: 3,
            max_words: 50,
            headline_max_words: 4,
            parallel_threshold: 64,
            split_clauses: false,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.relevance.validate()?;

        if !(0.0..=1.0).contains(&self.centrality.damping) {
            return Err(SummarizeError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.centrality.damping
            )));
        }

        if !(0.0..=1.0).contains(&self.redundancy_threshold) {
            return Err(SummarizeError::invalid_config(format!(
                "redundancy_threshold must be between 0 and 1, got {}",
                self.redundancy_threshold
            )));
        }

        if self.min_words == 0 {
            return Err(SummarizeError::invalid_config("min_words must be > 0"));
        }

        if self.max_words < self.min_words {
            return Err(SummarizeError::invalid_config(
                "max_words must be >= min_words",
            ));
        }

        Ok(())
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: set score weights
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Builder method: set redundancy threshold
    pub fn with_redundancy_threshold(mut self, threshold: f64) -> Self {
        self.redundancy_threshold = threshold;
        self
    }

    /// Builder method: set candidate word bounds
    pub fn with_word_bounds(mut self, min_words: usize, max_words: usize) -> Self {
        self.min_words = min_words;
        self.max_words = max_words;
        self
    }

    /// Builder method: set parallel threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Builder method: enable clause splitting
    pub fn with_split_clauses(mut self, split: bool) -> Self {
        self.split_clauses = split;
        self
    }
}

/// Configuration for transcript topic segmentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Number of entries on each side of a candidate boundary
    pub window_size: usize,
    /// Cosine similarity below which a boundary is proposed
    pub threshold: f64,
    #[serde(default = "TfIdfConfig::topic_window")]
    pub tfidf: TfIdfConfig,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            window_size: 5,
            threshold: 0.35,
            tfidf: TfIdfConfig::topic_window(),
        }
    }
}

impl SegmenterConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(SummarizeError::invalid_config("window_size must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SummarizeError::invalid_config(format!(
                "threshold must be between 0 and 1, got {}",
                self.threshold
            )));
        }
        self.tfidf.validate()
    }

    /// Builder method: set window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder method: set similarity threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Configuration for per-segment summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSummaryConfig {
    /// Maximum sentences kept per segment
    pub max_sentences: usize,
    #[serde(default)]
    pub weights: SegmentWeights,
}

impl Default for SegmentSummaryConfig {
    fn default() -> Self {
        Self {
            max_sentences: 2,
            weights: SegmentWeights::default(),
        }
    }
}

/// Fail-fast size bounds checked before the engine runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeLimits {
    /// Maximum input characters
    #[serde(default)]
    pub max_chars: Option<usize>,
    /// Maximum tokenized sentences
    #[serde(default)]
    pub max_sentences: Option<usize>,
    /// Maximum transcript entries
    #[serde(default)]
    pub max_entries: Option<usize>,
}

impl RuntimeLimits {
    /// Check a measured size against an optional limit
    pub fn check(limit: Option<usize>, actual: usize, unit: &'static str) -> Result<()> {
        match limit {
            Some(limit) if actual > limit => Err(SummarizeError::InputTooLarge {
                limit,
                actual,
                unit,
            }),
            _ => Ok(()),
        }
    }
}
