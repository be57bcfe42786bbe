//! Redundancy-aware sentence selection
//!
//! Two passes over the score-ranked candidates. The strict pass skips any
//! candidate whose word-set Jaccard similarity with an already selected
//! sentence exceeds the redundancy threshold. If that leaves the selection
//! short, a backfill pass adds the best remaining candidates regardless of
//! redundancy. The final selection is emitted in document order.

use crate::pipeline::artifacts::{ScoreVector, SelectionState};
use crate::similarity::jaccard_similarity;
use crate::types::{Sentence, SummarizerConfig};
use rustc_hash::FxHashSet;

/// Configuration for sentence selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    /// Jaccard similarity above which a candidate counts as redundant
    pub redundancy_threshold: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            redundancy_threshold: 0.5,
        }
    }
}

impl SelectorConfig {
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            redundancy_threshold: config.redundancy_threshold,
        }
    }
}

/// A selected sentence with its score
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSentence {
    pub sentence: Sentence,
    /// Composite score (0 when selection short-circuited)
    pub score: f64,
    /// Added by the backfill pass, so it may be redundant
    pub backfilled: bool,
}

/// Result of sentence selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionResult {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    /// Number added by the backfill pass
    pub backfilled: usize,
}

impl SelectionResult {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Selected sentence texts in document order
    pub fn texts(&self) -> Vec<String> {
        self.sentences
            .iter()
            .map(|s| s.sentence.text.clone())
            .collect()
    }
}

/// Redundancy-aware sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set the redundancy threshold
    pub fn with_redundancy_threshold(mut self, threshold: f64) -> Self {
        self.config.redundancy_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Candidates that fit within `target` are returned as-is, unscored
    pub fn take_all(candidates: &[Sentence]) -> SelectionResult {
        SelectionResult {
            sentences: candidates
                .iter()
                .map(|s| SelectedSentence {
                    sentence: s.clone(),
                    score: 0.0,
                    backfilled: false,
                })
                .collect(),
            backfilled: 0,
        }
    }

    /// Select up to `target` candidates
    ///
    /// `scores` must hold one entry per candidate.
    pub fn select(
        &self,
        candidates: &[Sentence],
        scores: &ScoreVector,
        target: usize,
    ) -> SelectionResult {
        if candidates.len() <= target {
            return Self::take_all(candidates);
        }

        let ranked = scores.ranked();
        let word_sets: Vec<FxHashSet<&str>> =
            candidates.iter().map(Sentence::word_set).collect();
        let mut state = SelectionState::with_target(target);

        for candidate in &ranked {
            if state.is_full() {
                break;
            }
            let redundant = state.selection_order().iter().any(|&chosen| {
                jaccard_similarity(&word_sets[candidate.index], &word_sets[chosen])
                    > self.config.redundancy_threshold
            });
            if !redundant {
                state.insert(candidate.index);
            }
        }

        let strict_count = state.len();
        for candidate in &ranked {
            if state.is_full() {
                break;
            }
            state.insert(candidate.index);
        }
        let backfilled = state.len() - strict_count;

        let backfilled_set: FxHashSet<usize> = state.selection_order()[strict_count..]
            .iter()
            .copied()
            .collect();

        let sentences = state
            .into_document_order()
            .into_iter()
            .map(|index| SelectedSentence {
                sentence: candidates[index].clone(),
                score: scores.get(index).unwrap_or(0.0),
                backfilled: backfilled_set.contains(&index),
            })
            .collect();

        SelectionResult {
            sentences,
            backfilled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(index: usize, text: &str) -> Sentence {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();
        Sentence::new(text, index, words.clone(), words)
    }

    fn candidates() -> Vec<Sentence> {
        vec![
            sentence(0, "alpha beta gamma delta epsilon zeta eta theta"),
            // Shares 6 of 8 words with the first: Jaccard 6 / 10
            sentence(1, "alpha beta gamma delta epsilon zeta iota kappa"),
            sentence(2, "rivers flow toward the distant sea"),
            sentence(3, "mountains rise above quiet valleys"),
        ]
    }

    #[test]
    fn test_fits_returns_all_in_order() {
        let c = candidates();
        let result = SentenceSelector::new().select(&c, &ScoreVector::new(vec![0.0; 4]), 4);
        assert_eq!(result.len(), 4);
        assert_eq!(result.sentences[3].sentence.index, 3);
        assert_eq!(result.backfilled, 0);
    }

    #[test]
    fn test_redundant_candidate_skipped() {
        let c = candidates();
        let scores = ScoreVector::new(vec![10.0, 9.0, 5.0, 1.0]);
        let result = SentenceSelector::new().select(&c, &scores, 2);

        let indices: Vec<usize> = result.sentences.iter().map(|s| s.sentence.index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(result.backfilled, 0);
    }

    #[test]
    fn test_backfill_when_strict_pass_falls_short() {
        let c = vec![
            sentence(0, "one two three four"),
            sentence(1, "one two three four five"),
            sentence(2, "one two three four six"),
        ];
        let scores = ScoreVector::new(vec![3.0, 2.0, 1.0]);
        let result = SentenceSelector::new().select(&c, &scores, 2);

        assert_eq!(result.len(), 2);
        assert_eq!(result.backfilled, 1);
        assert!(!result.sentences[0].backfilled);
        assert!(result.sentences[1].backfilled);
        assert_eq!(result.sentences[1].sentence.index, 1);
    }

    #[test]
    fn test_output_in_document_order() {
        let c = candidates();
        let scores = ScoreVector::new(vec![1.0, 2.0, 3.0, 4.0]);
        let result = SentenceSelector::new().select(&c, &scores, 3);

        let indices: Vec<usize> = result.sentences.iter().map(|s| s.sentence.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(result.texts()[0], c[1].text);
    }

    #[test]
    fn test_ties_prefer_earlier_sentence() {
        let c = candidates();
        let scores = ScoreVector::new(vec![1.0, 1.0, 1.0, 1.0]);
        let result = SentenceSelector::new().select(&c, &scores, 1);
        assert_eq!(result.sentences[0].sentence.index, 0);
    }

    #[test]
    fn test_threshold_is_strict_inequality() {
        let c = vec![
            sentence(0, "red green blue"),
            // Jaccard 2 / 4 = 0.5 exactly, not redundant
            sentence(1, "red green yellow"),
            sentence(2, "cyan magenta black"),
        ];
        let scores = ScoreVector::new(vec![3.0, 2.0, 1.0]);
        let result = SentenceSelector::new().select(&c, &scores, 2);
        let indices: Vec<usize> = result.sentences.iter().map(|s| s.sentence.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }
}
