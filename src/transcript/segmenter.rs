//! Topic segmentation of transcripts
//!
//! A boundary is proposed before entry `i` when the TF-IDF cosine similarity
//! between the `W` entries before it and the `W` entries from it falls
//! below the threshold. Proposals closer than `W` entries to the previously
//! kept boundary are dropped.
//!
//! Boundary candidates are independent of each other and are evaluated in
//! parallel with rayon.

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::collapse_whitespace;
use crate::similarity::TfIdfVectorizer;
use crate::types::{Segment, SegmenterConfig, TranscriptEntry};
use rayon::prelude::*;

/// Splits a transcript into topic segments
#[derive(Debug, Clone)]
pub struct TopicSegmenter<'a> {
    config: SegmenterConfig,
    stopwords: &'a StopwordFilter,
}

impl<'a> TopicSegmenter<'a> {
    pub fn new(config: SegmenterConfig, stopwords: &'a StopwordFilter) -> Self {
        Self { config, stopwords }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Entry indices at which a new topic starts, ascending
    ///
    /// Empty when there are fewer than `2 * window_size` entries.
    pub fn detect_boundaries(&self, entries: &[TranscriptEntry]) -> Vec<usize> {
        let window = self.config.window_size;
        if window == 0 || entries.len() / 2 < window {
            return Vec::new();
        }

        let vectorizer = TfIdfVectorizer::new(self.config.tfidf.clone(), self.stopwords);
        let threshold = self.config.threshold;

        let candidates: Vec<usize> = (window..entries.len() - window)
            .into_par_iter()
            .filter_map(|i| {
                let before = join_texts(&entries[i - window..i]);
                let after = join_texts(&entries[i..i + window]);
                // No shared vocabulary to compare on: not a boundary
                let matrix = vectorizer.fit_transform(&[before, after])?;
                (matrix.cosine(0, 1) < threshold).then_some(i)
            })
            .collect();

        let boundaries = suppress_clusters(&candidates, window);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            entries = entries.len(),
            candidates = candidates.len(),
            boundaries = ?boundaries,
            "detected topic boundaries"
        );

        boundaries
    }

    /// Topic segments covering the transcript
    pub fn segments(&self, entries: &[TranscriptEntry]) -> Vec<Segment> {
        build_segments(entries, &self.detect_boundaries(entries))
    }
}

/// Keep a candidate only if it lies at least `window` entries after the last
/// kept one
pub fn suppress_clusters(candidates: &[usize], window: usize) -> Vec<usize> {
    let mut kept: Vec<usize> = Vec::with_capacity(candidates.len());
    for &candidate in candidates {
        let far_enough = kept
            .last()
            .map_or(true, |&last| candidate - last >= window);
        if far_enough {
            kept.push(candidate);
        }
    }
    kept
}

/// Cut `entries` at `boundaries` into contiguous segments
///
/// Boundaries must be ascending and within `1..entries.len()`; others are
/// ignored. Segments whose text is blank are skipped.
pub fn build_segments(entries: &[TranscriptEntry], boundaries: &[usize]) -> Vec<Segment> {
    let mut cuts: Vec<usize> = Vec::with_capacity(boundaries.len() + 2);
    cuts.push(0);
    for &b in boundaries {
        if b > *cuts.last().unwrap_or(&0) && b < entries.len() {
            cuts.push(b);
        }
    }
    cuts.push(entries.len());

    cuts.windows(2)
        .filter_map(|pair| {
            let range = pair[0]..pair[1];
            let slice = &entries[range.clone()];
            let first = slice.first()?;
            let text = join_texts(slice);
            (!text.is_empty()).then(|| Segment {
                start_seconds: first.start_seconds,
                entries: range,
                text,
            })
        })
        .collect()
}

fn join_texts(entries: &[TranscriptEntry]) -> String {
    let joined = entries
        .iter()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&joined)
}
