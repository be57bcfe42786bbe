//! Graph centrality for sentence ranking

pub mod standard;

pub use standard::PowerIteration;

/// Centrality scores after a fixed number of passes
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// One score per sentence node
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// L1 change made by the last pass
    pub residual: f64,
}

impl PageRankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, residual: f64) -> Self {
        Self {
            scores,
            iterations,
            residual,
        }
    }

    /// Scores scaled so the largest is 1.0
    ///
    /// Left as-is when no score is positive.
    pub fn max_normalized(&self) -> Vec<f64> {
        let max = self.scores.iter().copied().fold(0.0, f64::max);
        if max <= 0.0 {
            return self.scores.clone();
        }
        self.scores.iter().map(|s| s / max).collect()
    }

    pub fn get(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}
