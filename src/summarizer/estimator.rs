//! Automatic summary length estimation
//!
//! The retention fraction shrinks as the document grows, then adjusts for
//! sentence complexity. The result is clamped to [2, 12] and never exceeds
//! the sentence count.

/// Word and sentence counts of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    pub words: usize,
    pub sentences: usize,
}

impl DocumentStats {
    pub fn new(words: usize, sentences: usize) -> Self {
        Self { words, sentences }
    }

    /// Whitespace-delimited word count of `text` with a known sentence count
    pub fn from_text(text: &str, sentences: usize) -> Self {
        Self::new(text.split_whitespace().count(), sentences)
    }

    /// Average words per sentence, 0 for an empty document
    pub fn average_sentence_length(&self) -> f64 {
        if self.sentences == 0 {
            0.0
        } else {
            self.words as f64 / self.sentences as f64
        }
    }
}

const MIN_TARGET: usize = 2;
const MAX_TARGET: usize = 12;

/// (word-count upper bound, retention fraction, minimum sentences)
const BRACKETS: [(usize, f64, usize); 4] = [
    (100, 0.7, 2),
    (300, 0.5, 2),
    (800, 0.35, 3),
    (2000, 0.25, 4),
];
const LONG_FRACTION: f64 = 0.18;
const LONG_MINIMUM: usize = 5;

/// Target sentence count for a document
pub fn estimate_target(stats: DocumentStats) -> usize {
    let s = stats.sentences as f64;
    let (fraction, minimum) = BRACKETS
        .iter()
        .find(|(bound, _, _)| stats.words < *bound)
        .map(|&(_, fraction, minimum)| (fraction, minimum))
        .unwrap_or((LONG_FRACTION, LONG_MINIMUM));

    let mut target = minimum.max((s * fraction).floor() as usize);

    let average = stats.average_sentence_length();
    if average > 25.0 {
        target = MIN_TARGET.max((target as f64 * 0.8).floor() as usize);
    } else if average < 10.0 {
        target = (target as f64 * 1.2).floor() as usize;
    }

    target.clamp(MIN_TARGET, MAX_TARGET).min(stats.sentences)
}
