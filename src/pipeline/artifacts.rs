//! Typed intermediate results flowing between pipeline stages.
//!
//! Indices in these artifacts refer to positions in the filtered candidate
//! list, not to the original sentence numbering.

use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// One composite score per candidate sentence.
///
/// Always fully populated: `len()` equals the candidate count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreVector {
    scores: Vec<f64>,
}

impl ScoreVector {
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score of candidate `index`
    pub fn get(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }

    /// Candidates by score descending, ties in document order.
    pub fn ranked(&self) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = self
            .scores
            .iter()
            .enumerate()
            .map(|(index, &score)| RankedCandidate { index, score })
            .collect();
        // sort_by is stable, so equal scores keep their original order
        ranked.sort_by(RankedCandidate::cmp_rank);
        ranked
    }
}

/// A candidate position and its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate {
    pub index: usize,
    pub score: f64,
}

impl RankedCandidate {
    /// Ordering by score descending, then index ascending
    pub fn cmp_rank(a: &Self, b: &Self) -> Ordering {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.index.cmp(&b.index))
    }
}

/// Selected candidate indices in selection order.
///
/// Never holds an index twice and never grows past its target.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    order: Vec<usize>,
    members: FxHashSet<usize>,
    target: usize,
}

impl SelectionState {
    pub fn with_target(target: usize) -> Self {
        Self {
            order: Vec::with_capacity(target),
            members: FxHashSet::default(),
            target,
        }
    }

    /// Add `index`; returns false if it is already selected or the target is met.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.is_full() || !self.members.insert(index) {
            return false;
        }
        self.order.push(index);
        true
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn is_full(&self) -> bool {
        self.order.len() >= self.target
    }

    /// Indices in the order they were selected
    pub fn selection_order(&self) -> &[usize] {
        &self.order
    }

    /// Indices sorted into document order
    pub fn into_document_order(self) -> Vec<usize> {
        let mut order = self.order;
        order.sort_unstable();
        order
    }
}
