//! Pairwise sentence similarity matrix
//!
//! Each sentence becomes a term-frequency vector over its stopword-filtered
//! terms; similarity is the cosine of two such vectors. Large inputs build
//! rows in parallel with rayon.

use super::unit_vector::UnitVector;
use crate::types::Sentence;
use rayon::prelude::*;

/// Dense N×N similarity matrix, zero on the diagonal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Create an all-zero matrix
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            values: vec![0.0; n * n],
        }
    }

    /// Build from row-major values
    ///
    /// Returns `None` unless `values.len() == n * n`.
    pub fn from_rows(n: usize, values: Vec<f64>) -> Option<Self> {
        (values.len() == n * n).then_some(Self { n, values })
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity of sentence `i` to sentence `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    fn set(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.n + j] = value;
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// Sum of row `i`
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Largest entry, 0 for an empty matrix
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Builds a [`SimilarityMatrix`] from tokenized sentences
#[derive(Debug, Clone, Copy)]
pub struct SimilarityMatrixBuilder {
    parallel_threshold: usize,
}

impl Default for SimilarityMatrixBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityMatrixBuilder {
    pub fn new() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }

    /// Sentence count from which rows are computed in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Build the matrix over each sentence's `terms`
    ///
    /// Sentences with no terms have similarity 0 to everything.
    pub fn build(&self, sentences: &[Sentence]) -> SimilarityMatrix {
        let n = sentences.len();
        let vectors: Vec<UnitVector> = sentences
            .iter()
            .map(|s| UnitVector::from_terms(&s.terms))
            .collect();

        let upper_row = |i: usize| -> Vec<f64> {
            ((i + 1)..n)
                .map(|j| vectors[i].cosine_similarity(&vectors[j]))
                .collect()
        };

        // For small documents, sequential is faster
        let rows: Vec<Vec<f64>> = if n >= self.parallel_threshold {
            (0..n).into_par_iter().map(upper_row).collect()
        } else {
            (0..n).map(upper_row).collect()
        };

        let mut matrix = SimilarityMatrix::zeros(n);
        for (i, row) in rows.into_iter().enumerate() {
            for (offset, value) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                matrix.set(i, j, value);
                matrix.set(j, i, value);
            }
        }
        matrix
    }
}
