//! Fixed-iteration damped power iteration
//!
//! Each pass computes `c' = d · Pᵀc + (1 - d) / N`, with `P` the row-stochastic
//! transition matrix of the sentence graph. Rows of sentences that share no
//! term with any other sentence are empty, so their mass is dropped rather
//! than redistributed. The iteration count is fixed; there is no
//! convergence test.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::types::CentralityConfig;

#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Probability of following an edge rather than teleporting
    pub damping: f64,
    pub iterations: usize,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self::from_config(&CentralityConfig::default())
    }
}

impl PowerIteration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CentralityConfig) -> Self {
        Self {
            damping: config.damping,
            iterations: config.iterations,
        }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Iterate from the uniform distribution
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.node_count();
        if n == 0 {
            return PageRankResult::new(Vec::new(), 0, 0.0);
        }

        let teleport = (1.0 - self.damping) / n as f64;
        let mut current = vec![1.0 / n as f64; n];
        let mut next = vec![teleport; n];
        let mut residual = 0.0;

        for _ in 0..self.iterations {
            next.fill(teleport);
            for (from, &mass) in current.iter().enumerate() {
                let share = self.damping * mass;
                for (to, p) in graph.transitions(from) {
                    next[to] += share * p;
                }
            }
            residual = l1_distance(&current, &next);
            std::mem::swap(&mut current, &mut next);
        }

        PageRankResult::new(current, self.iterations, residual)
    }
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}
