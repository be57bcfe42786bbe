//! Sparse L2-normalized term vectors
//!
//! Entries are kept sorted by term, so cosine similarity is a merge of two
//! sorted lists and iteration order never depends on hashing.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitVector {
    /// `(term, weight)` sorted by term, weights scaled to unit length
    entries: Vec<(String, f64)>,
    /// Length before scaling
    norm: f64,
}

impl UnitVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize raw term weights; zero weights are dropped
    pub fn from_dimensions(weights: FxHashMap<String, f64>) -> Self {
        let mut entries: Vec<(String, f64)> =
            weights.into_iter().filter(|&(_, w)| w != 0.0).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            entries.iter_mut().for_each(|(_, w)| *w /= norm);
        }
        Self { entries, norm }
    }

    /// Raw term-frequency vector of `terms`
    pub fn from_terms(terms: &[String]) -> Self {
        let mut counts: FxHashMap<String, f64> = FxHashMap::default();
        for term in terms {
            *counts.entry(term.clone()).or_default() += 1.0;
        }
        Self::from_dimensions(counts)
    }

    /// Cosine of the angle between the vectors, clamped to [0, 1]
    ///
    /// Zero when either side is empty.
    pub fn cosine_similarity(&self, other: &UnitVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a, wa) = &self.entries[i];
            let (b, wb) = &other.entries[j];
            match a.cmp(b) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    dot += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot.clamp(0.0, 1.0)
    }

    /// Normalized weight of `term`, zero if absent
    pub fn weight(&self, term: &str) -> f64 {
        self.entries
            .binary_search_by(|(t, _)| t.as_str().cmp(term))
            .map_or(0.0, |i| self.entries[i].1)
    }

    pub fn weight_sum(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
