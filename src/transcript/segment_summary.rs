//! Per-segment summaries
//!
//! Segments are short, so the lightweight segment scoring profile is used
//! instead of the document profile: no TF-IDF and no similarity graph.

use super::timestamp::format_timestamp;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::scoring::SentenceScorer;
use crate::types::{Segment, SegmentSummaryConfig, TimestampedSummary};

/// Summarizes one topic segment at a time
#[derive(Debug, Clone)]
pub struct SegmentSummarizer<'a> {
    config: SegmentSummaryConfig,
    tokenizer: Tokenizer,
    stopwords: &'a StopwordFilter,
}

impl<'a> SegmentSummarizer<'a> {
    pub fn new(config: SegmentSummaryConfig, stopwords: &'a StopwordFilter) -> Self {
        Self {
            config,
            tokenizer: Tokenizer::new(),
            stopwords,
        }
    }

    pub fn config(&self) -> &SegmentSummaryConfig {
        &self.config
    }

    /// Keep the best `max_sentences` sentences of `text`, in their original order
    ///
    /// Text that already fits is returned trimmed but otherwise unchanged.
    pub fn summarize(&self, text: &str) -> String {
        let sentences = self.tokenizer.tokenize(text, self.stopwords);
        if sentences.len() <= self.config.max_sentences {
            return text.trim().to_string();
        }

        let scores = SentenceScorer::segment(self.config.weights, self.stopwords).score(&sentences);
        let mut keep: Vec<usize> = scores
            .ranked()
            .into_iter()
            .take(self.config.max_sentences)
            .map(|c| c.index)
            .collect();
        keep.sort_unstable();

        keep.iter()
            .map(|&i| sentences[i].text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Summary of `segment`, stamped with its start time
    pub fn summarize_segment(&self, segment: &Segment) -> TimestampedSummary {
        TimestampedSummary {
            timestamp: format_timestamp(segment.start_seconds),
            start_seconds: segment.start_seconds,
            summary: self.summarize(&segment.text),
        }
    }
}
