//! Candidate sentence quality filter
//!
//! Applied before scoring: exact duplicates collapse to their first
//! occurrence, sentences outside the word bounds are dropped, and short
//! all-caps lines (headings) are excluded.

use crate::types::{Sentence, SummarizerConfig};
use rustc_hash::FxHashSet;

/// Filters tokenized sentences down to summary candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateFilter {
    pub min_words: usize,
    pub max_words: usize,
    /// All-caps sentences with fewer words than this are dropped
    pub headline_max_words: usize,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl CandidateFilter {
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            min_words: config.min_words,
            max_words: config.max_words,
            headline_max_words: config.headline_max_words,
        }
    }

    /// Keep the candidates, preserving document order
    pub fn filter(&self, sentences: Vec<Sentence>) -> Vec<Sentence> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        sentences
            .into_iter()
            .filter(|s| seen.insert(s.text.trim().to_lowercase()))
            .filter(|s| self.accepts(s))
            .collect()
    }

    fn accepts(&self, sentence: &Sentence) -> bool {
        let words = sentence.word_count();
        if words < self.min_words || words > self.max_words {
            return false;
        }
        !(words < self.headline_max_words && is_all_caps(&sentence.text))
    }
}

/// True if `text` has at least one cased character and none are lowercase
pub fn is_all_caps(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
