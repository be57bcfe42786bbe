//! Individual scoring signals
//!
//! Each function produces one factor for one sentence (or one vector for the
//! whole candidate list). Combination into a composite score happens in
//! [`super::scorer`].

use crate::graph::{CsrGraph, GraphBuilder};
use crate::nlp::lexicon::{contains_any, DISCOURSE_MARKERS, EMPHASIS_WORDS};
use crate::nlp::stopwords::StopwordFilter;
use crate::pagerank::PowerIteration;
use crate::similarity::{SimilarityMatrix, TfIdfVectorizer};
use crate::types::{CentralityConfig, Sentence, TfIdfConfig};
use regex::Regex;
use std::sync::LazyLock;

static DIGIT_GROUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

static CAPITALIZED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+").unwrap());

const QUOTE_CHARS: [char; 3] = ['"', '\u{201C}', '\u{201D}'];

/// Editorial position prior over `count` candidates
///
/// First 3.0, second 2.0, early (index below `min(5, 0.1 * count)`) 1.5,
/// last 1.8, the three before the last 1.3, everything else 1.0.
pub fn position_factor(index: usize, count: usize) -> f64 {
    let early_cutoff = (count as f64 * 0.1).min(5.0);
    if index == 0 {
        3.0
    } else if index == 1 {
        2.0
    } else if (index as f64) < early_cutoff {
        1.5
    } else if index + 1 >= count {
        1.8
    } else if index + 4 >= count {
        1.3
    } else {
        1.0
    }
}

/// Word-count sweet spot: 12-25 => 2.0, 8-35 => 1.5, 5-45 => 1.0, else 0.5
pub fn length_factor(word_count: usize) -> f64 {
    match word_count {
        12..=25 => 2.0,
        8..=35 => 1.5,
        5..=45 => 1.0,
        _ => 0.5,
    }
}

/// Surface cues: numbers, capitalized words, quotes, discourse markers,
/// questions and emphasis words, on top of a base of 1.0
pub fn surface_factor(sentence: &Sentence) -> f64 {
    let text = sentence.text.as_str();
    let mut score = 1.0;

    let digit_groups = DIGIT_GROUP_RE.find_iter(text).count();
    score += (digit_groups as f64 * 0.3).min(0.9);

    let capitalized = CAPITALIZED_RE.find_iter(text).count();
    score += (capitalized as f64 * 0.15).min(0.6);

    if text.contains(QUOTE_CHARS) {
        score += 0.4;
    }
    if contains_any(&sentence.words, DISCOURSE_MARKERS) {
        score += 0.5;
    }
    if text.contains('?') {
        score += 0.3;
    }
    if contains_any(&sentence.words, EMPHASIS_WORDS) {
        score += 0.2;
    }
    score
}

/// TF-IDF row sums normalized by their maximum
///
/// Falls back to a uniform 1.0 when no vocabulary survives fitting.
pub fn relevance_factors(
    sentences: &[Sentence],
    config: &TfIdfConfig,
    stopwords: &StopwordFilter,
) -> Vec<f64> {
    let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
    let Some(matrix) = TfIdfVectorizer::new(config.clone(), stopwords).fit_transform(&texts) else {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = sentences.len(),
            "tf-idf vocabulary empty, using uniform relevance"
        );
        return vec![1.0; sentences.len()];
    };

    let sums = matrix.row_sums();
    let max = sums.iter().copied().fold(0.0, f64::max);
    if max > 0.0 {
        sums.into_iter().map(|s| s / max).collect()
    } else {
        sums
    }
}

/// Damped power-iteration centrality over the similarity graph, max-normalized
///
/// All zeros when no two sentences share a term.
pub fn centrality_factors(matrix: &SimilarityMatrix, config: &CentralityConfig) -> Vec<f64> {
    if matrix.max() <= 0.0 {
        return vec![0.0; matrix.len()];
    }
    let graph = CsrGraph::from_builder(&GraphBuilder::from_similarity(matrix));
    PowerIteration::from_config(config)
        .run(&graph)
        .max_normalized()
}

/// Segment position prior: 1 / (index + 1)
pub fn segment_position_factor(index: usize) -> f64 {
    1.0 / (index as f64 + 1.0)
}

/// Segment length prior: content words over `norm`, saturating at 1.0
pub fn segment_length_factor(content_words: usize, norm: usize) -> f64 {
    if norm == 0 {
        return 1.0;
    }
    (content_words as f64 / norm as f64).min(1.0)
}

/// Alphanumeric words that are not stopwords
pub fn content_word_count(sentence: &Sentence, stopwords: &StopwordFilter) -> usize {
    sentence
        .words
        .iter()
        .filter(|w| w.chars().all(char::is_alphanumeric))
        .filter(|w| !stopwords.is_stopword(w))
        .count()
}
