//! Similarity measures
//!
//! Sparse unit vectors, TF-IDF fitting, the sentence similarity matrix and
//! word-set Jaccard similarity.

pub mod jaccard;
pub mod matrix;
pub mod tfidf;
pub mod unit_vector;

pub use jaccard::jaccard_similarity;
pub use matrix::{SimilarityMatrix, SimilarityMatrixBuilder};
pub use tfidf::{TfIdfMatrix, TfIdfVectorizer};
pub use unit_vector::UnitVector;
