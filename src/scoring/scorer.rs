//! Composite sentence scoring
//!
//! One scorer, two profiles. The document profile combines relevance,
//! centrality, position, surface cues, length fitness and a constant
//! diversity term. The segment profile uses only position and content-word
//! length, for short transcript segments where corpus statistics are
//! unreliable.

use super::factors::{
    centrality_factors, content_word_count, length_factor, position_factor, relevance_factors,
    segment_length_factor, segment_position_factor, surface_factor,
};
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::artifacts::ScoreVector;
use crate::similarity::{SimilarityMatrix, SimilarityMatrixBuilder};
use crate::types::{
    CentralityConfig, ScoreWeights, SegmentWeights, Sentence, SummarizerConfig, TfIdfConfig,
};

/// Settings for the full multi-factor profile
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentProfile {
    pub weights: ScoreWeights,
    pub centrality: CentralityConfig,
    pub relevance: TfIdfConfig,
    pub parallel_threshold: usize,
}

impl Default for DocumentProfile {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl DocumentProfile {
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            weights: config.weights,
            centrality: config.centrality,
            relevance: config.relevance.clone(),
            parallel_threshold: config.parallel_threshold,
        }
    }
}

/// Which combination of factors to apply
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringProfile {
    Document(DocumentProfile),
    Segment(SegmentWeights),
}

/// Per-factor values for every candidate, before weighting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactorTable {
    pub relevance: Vec<f64>,
    pub centrality: Vec<f64>,
    pub position: Vec<f64>,
    pub surface: Vec<f64>,
    pub length: Vec<f64>,
}

/// Scores candidate sentences under a [`ScoringProfile`]
#[derive(Debug, Clone)]
pub struct SentenceScorer<'a> {
    profile: ScoringProfile,
    stopwords: &'a StopwordFilter,
}

impl<'a> SentenceScorer<'a> {
    pub fn new(profile: ScoringProfile, stopwords: &'a StopwordFilter) -> Self {
        Self { profile, stopwords }
    }

    /// Document profile built from a summarizer config
    pub fn document(config: &SummarizerConfig, stopwords: &'a StopwordFilter) -> Self {
        Self::new(
            ScoringProfile::Document(DocumentProfile::from_config(config)),
            stopwords,
        )
    }

    /// Segment profile
    pub fn segment(weights: SegmentWeights, stopwords: &'a StopwordFilter) -> Self {
        Self::new(ScoringProfile::Segment(weights), stopwords)
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Composite score for each sentence, in input order
    pub fn score(&self, sentences: &[Sentence]) -> ScoreVector {
        match &self.profile {
            ScoringProfile::Document(profile) => {
                let matrix = SimilarityMatrixBuilder::new()
                    .with_parallel_threshold(profile.parallel_threshold)
                    .build(sentences);
                self.combine(&self.document_factors(profile, sentences, &matrix), &profile.weights)
            }
            ScoringProfile::Segment(weights) => self.score_segment(sentences, weights),
        }
    }

    /// Unweighted factors for the document profile
    ///
    /// The segment profile has no relevance, centrality or surface factors;
    /// those vectors are left empty.
    pub fn factors(&self, sentences: &[Sentence]) -> FactorTable {
        match &self.profile {
            ScoringProfile::Document(profile) => {
                let matrix = SimilarityMatrixBuilder::new()
                    .with_parallel_threshold(profile.parallel_threshold)
                    .build(sentences);
                self.document_factors(profile, sentences, &matrix)
            }
            ScoringProfile::Segment(weights) => FactorTable {
                position: (0..sentences.len()).map(segment_position_factor).collect(),
                length: sentences
                    .iter()
                    .map(|s| {
                        segment_length_factor(
                            content_word_count(s, self.stopwords),
                            weights.length_norm,
                        )
                    })
                    .collect(),
                ..FactorTable::default()
            },
        }
    }

    fn document_factors(
        &self,
        profile: &DocumentProfile,
        sentences: &[Sentence],
        matrix: &SimilarityMatrix,
    ) -> FactorTable {
        let n = sentences.len();
        FactorTable {
            relevance: relevance_factors(sentences, &profile.relevance, self.stopwords),
            centrality: centrality_factors(matrix, &profile.centrality),
            position: (0..n).map(|i| position_factor(i, n)).collect(),
            surface: sentences.iter().map(surface_factor).collect(),
            length: sentences
                .iter()
                .map(|s| length_factor(s.word_count()))
                .collect(),
        }
    }

    fn combine(&self, factors: &FactorTable, weights: &ScoreWeights) -> ScoreVector {
        // Diversity is a constant 1.0 term; redundancy is handled at selection
        let diversity = 1.0;
        let scores = (0..factors.position.len())
            .map(|i| {
                factors.relevance[i] * weights.relevance
                    + factors.centrality[i] * weights.centrality
                    + factors.position[i] * weights.position
                    + factors.surface[i] * weights.surface
                    + factors.length[i] * weights.length
                    + diversity * weights.diversity
            })
            .collect();
        ScoreVector::new(scores)
    }

    fn score_segment(&self, sentences: &[Sentence], weights: &SegmentWeights) -> ScoreVector {
        let scores = sentences
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let content = content_word_count(s, self.stopwords);
                weights.position * segment_position_factor(i)
                    + weights.length * segment_length_factor(content, weights.length_norm)
            })
            .collect();
        ScoreVector::new(scores)
    }
}
