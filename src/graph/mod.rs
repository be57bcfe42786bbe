//! Graph construction and representation
//!
//! The sentence similarity graph is assembled with [`builder::GraphBuilder`]
//! and frozen into [`csr::CsrGraph`] for ranking.

pub mod builder;
pub mod csr;

pub use builder::GraphBuilder;
pub use csr::CsrGraph;
