//! Row-stochastic sentence graph in compressed sparse row layout
//!
//! Each node's outgoing edges sit in one contiguous slice, already divided
//! by the node's total outgoing weight. That is the normalized matrix the
//! centrality iteration multiplies by on every pass.

use super::builder::GraphBuilder;

#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Node `i` owns entries `offsets[i]..offsets[i + 1]`
    offsets: Vec<usize>,
    targets: Vec<usize>,
    /// Edge weight divided by the source node's outgoing total
    transition: Vec<f64>,
    /// Outgoing weight before normalization
    out_weight: Vec<f64>,
}

impl CsrGraph {
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let edge_count = builder.edge_count();
        let mut graph = Self {
            offsets: Vec::with_capacity(builder.node_count() + 1),
            targets: Vec::with_capacity(edge_count),
            transition: Vec::with_capacity(edge_count),
            out_weight: Vec::with_capacity(builder.node_count()),
        };
        graph.offsets.push(0);

        for edges in builder.adjacency() {
            let mut row: Vec<(usize, f64)> = edges.iter().map(|(&to, &w)| (to, w)).collect();
            // Fixed summation order keeps scores bit-identical across runs
            row.sort_unstable_by_key(|&(to, _)| to);

            let total: f64 = row.iter().map(|&(_, w)| w).sum();
            graph.out_weight.push(total);
            for (to, weight) in row {
                graph.targets.push(to);
                graph.transition.push(weight / total);
            }
            graph.offsets.push(graph.targets.len());
        }
        graph
    }

    /// `(target, transition probability)` pairs leaving `node`
    pub fn transitions(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let span = self.offsets[node]..self.offsets[node + 1];
        self.targets[span.clone()]
            .iter()
            .copied()
            .zip(self.transition[span].iter().copied())
    }

    pub fn out_degree(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }

    /// Total similarity leaving `node`
    pub fn out_weight(&self, node: usize) -> f64 {
        self.out_weight[node]
    }

    pub fn node_count(&self) -> usize {
        self.out_weight.len()
    }

    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out_weight.is_empty()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            targets: Vec::new(),
            transition: Vec::new(),
            out_weight: Vec::new(),
        }
    }
}
