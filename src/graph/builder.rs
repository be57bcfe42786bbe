//! Sentence graph builder
//!
//! Nodes are sentence indices; edges carry pairwise similarity. Adjacency is
//! kept in FxHashMaps while edges accumulate and the builder is frozen into
//! a [`CsrGraph`](super::csr::CsrGraph) before ranking.

use crate::similarity::SimilarityMatrix;
use rustc_hash::FxHashMap;

/// Outgoing edges of one node: target -> accumulated weight
pub type Adjacency = FxHashMap<usize, f64>;

/// A mutable graph over a fixed set of sentence nodes
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: Vec<Adjacency>,
}

impl GraphBuilder {
    /// Create a builder with `node_count` isolated nodes
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: vec![Adjacency::default(); node_count],
        }
    }

    /// Add `weight` to the directed edge `from -> to`
    ///
    /// Self-loops, non-positive weights and unknown nodes are ignored.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) {
        if from == to || weight <= 0.0 || to >= self.adjacency.len() {
            return;
        }
        if let Some(edges) = self.adjacency.get_mut(from) {
            *edges.entry(to).or_default() += weight;
        }
    }

    /// One edge per positive entry of the similarity matrix
    pub fn from_similarity(matrix: &SimilarityMatrix) -> Self {
        let mut builder = Self::with_nodes(matrix.len());
        for from in 0..matrix.len() {
            for (to, &similarity) in matrix.row(from).iter().enumerate() {
                builder.add_edge(from, to, similarity);
            }
        }
        builder
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(FxHashMap::len).sum()
    }

    /// Outgoing edges of `node`, if it exists
    pub fn edges(&self, node: usize) -> Option<&Adjacency> {
        self.adjacency.get(node)
    }

    /// Adjacency of every node in index order
    pub fn adjacency(&self) -> &[Adjacency] {
        &self.adjacency
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
