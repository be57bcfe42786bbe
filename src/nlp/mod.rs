//! Natural Language Processing components
//!
//! This module provides tokenization, stopword filtering and the static
//! lexicons used by surface-cue scoring.

pub mod lexicon;
pub mod stopwords;
pub mod tokenizer;
