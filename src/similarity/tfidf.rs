//! TF-IDF vectorization
//!
//! Fits a vocabulary over a small document collection and produces one
//! L2-normalized TF-IDF vector per document. Tokens are lower-cased words
//! of at least `min_token_len` characters with stopwords removed; n-grams
//! are formed from the remaining tokens.
//!
//! With `smooth_idf`, idf = ln((1 + n) / (1 + df)) + 1; otherwise
//! idf = ln(n / df) + 1.

use super::unit_vector::UnitVector;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::TfIdfConfig;
use rustc_hash::FxHashMap;

/// Fitted TF-IDF vectors, one row per document
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    /// Retained vocabulary, sorted
    pub vocabulary: Vec<String>,
    /// Normalized document vectors
    pub rows: Vec<UnitVector>,
}

impl TfIdfMatrix {
    /// Sum of TF-IDF weights in each row
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows.iter().map(UnitVector::weight_sum).collect()
    }

    /// Cosine similarity between two rows
    pub fn cosine(&self, a: usize, b: usize) -> f64 {
        self.rows[a].cosine_similarity(&self.rows[b])
    }
}

/// TF-IDF vectorizer over raw document strings
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer<'a> {
    config: TfIdfConfig,
    stopwords: &'a StopwordFilter,
}

impl<'a> TfIdfVectorizer<'a> {
    pub fn new(config: TfIdfConfig, stopwords: &'a StopwordFilter) -> Self {
        Self { config, stopwords }
    }

    /// Fit the vocabulary and transform `documents`
    ///
    /// Returns `None` when no term survives tokenization and document
    /// frequency pruning; callers decide how to degrade.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> Option<TfIdfMatrix> {
        let n_docs = documents.len();
        if n_docs == 0 {
            return None;
        }

        let counts: Vec<FxHashMap<String, usize>> = documents
            .iter()
            .map(|doc| self.count_terms(doc.as_ref()))
            .collect();

        let mut doc_freq: FxHashMap<&str, usize> = FxHashMap::default();
        let mut total_freq: FxHashMap<&str, usize> = FxHashMap::default();
        for doc in &counts {
            for (term, &count) in doc {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
                *total_freq.entry(term.as_str()).or_insert(0) += count;
            }
        }

        let max_doc_count = self.config.max_df * n_docs as f64;
        let min_doc_count = self.config.min_df;
        if max_doc_count < min_doc_count as f64 {
            return None;
        }

        let mut kept: Vec<&str> = doc_freq
            .iter()
            .filter(|(_, &df)| df >= min_doc_count && df as f64 <= max_doc_count)
            .map(|(&term, _)| term)
            .collect();

        if self.config.max_features > 0 && kept.len() > self.config.max_features {
            kept.sort_by(|a, b| total_freq[b].cmp(&total_freq[a]).then_with(|| a.cmp(b)));
            kept.truncate(self.config.max_features);
        }
        kept.sort_unstable();

        if kept.is_empty() {
            return None;
        }

        let idf: FxHashMap<&str, f64> = kept
            .iter()
            .map(|&term| (term, self.idf(doc_freq[term], n_docs)))
            .collect();

        let rows = counts
            .iter()
            .map(|doc| {
                let weights: FxHashMap<String, f64> = doc
                    .iter()
                    .filter_map(|(term, &tf)| {
                        idf.get(term.as_str())
                            .map(|&w| (term.clone(), self.tf(tf) * w))
                    })
                    .collect();
                UnitVector::from_dimensions(weights)
            })
            .collect();

        Some(TfIdfMatrix {
            vocabulary: kept.into_iter().map(str::to_string).collect(),
            rows,
        })
    }

    fn count_terms(&self, document: &str) -> FxHashMap<String, usize> {
        let tokens: Vec<String> = Tokenizer::words(document)
            .into_iter()
            .filter(|w| w.chars().count() >= self.config.min_token_len)
            .filter(|w| !self.stopwords.is_stopword(w))
            .collect();

        let (lo, hi) = self.config.ngram_range;
        let mut counts = FxHashMap::default();
        for n in lo..=hi {
            for gram in tokens.windows(n) {
                *counts.entry(gram.join(" ")).or_insert(0) += 1;
            }
        }
        counts
    }

    fn tf(&self, count: usize) -> f64 {
        if self.config.sublinear_tf {
            1.0 + (count as f64).ln()
        } else {
            count as f64
        }
    }

    fn idf(&self, df: usize, n_docs: usize) -> f64 {
        if self.config.smooth_idf {
            ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0
        } else {
            (n_docs as f64 / df as f64).ln() + 1.0
        }
    }
}
