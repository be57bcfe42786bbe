//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! [`SummaryPipeline`] runs the document stages in order:
//! 1. Tokenize (sentences, words, terms)
//! 2. Estimate the target length (skipped when the caller gives one)
//! 3. Filter candidates
//! 4. Score (skipped when every candidate fits the target)
//! 5. Select
//!
//! [`TranscriptPipeline`] segments a transcript by topic, then summarizes
//! each segment with the lightweight segment profile.
//!
//! Both notify a [`PipelineObserver`] at each stage boundary. Pass
//! [`NoopObserver`] when no callbacks are needed.

use std::sync::Arc;

use crate::errors::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_CANDIDATES,
    STAGE_ESTIMATE, STAGE_SCORE, STAGE_SEGMENT, STAGE_SEGMENT_SUMMARY, STAGE_SELECT,
    STAGE_TOKENIZE,
};
use crate::scoring::SentenceScorer;
use crate::summarizer::candidates::CandidateFilter;
use crate::summarizer::estimator::{estimate_target, DocumentStats};
use crate::summarizer::selector::{SelectorConfig, SentenceSelector};
use crate::transcript::{format_timestamp, SegmentSummarizer, TopicSegmenter};
use crate::types::{
    RuntimeLimits, SegmentSummaryConfig, SegmenterConfig, Summary, SummarizerConfig,
    TranscriptEntry, TranscriptSummary,
};

/// Hold a `pipeline_stage` span until the end of the enclosing block.
///
/// Expands to nothing without the `tracing` feature.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// SummaryPipeline
// ============================================================================

/// Extractive document summarization
#[derive(Debug, Clone)]
pub struct SummaryPipeline {
    config: SummarizerConfig,
    limits: RuntimeLimits,
    stopwords: Arc<StopwordFilter>,
}

impl Default for SummaryPipeline {
    fn default() -> Self {
        Self {
            config: SummarizerConfig::default(),
            limits: RuntimeLimits::default(),
            stopwords: StopwordFilter::shared("en"),
        }
    }
}

impl SummaryPipeline {
    /// Build a pipeline from a validated config
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let stopwords = StopwordFilter::shared(&config.language);
        Ok(Self {
            config,
            limits: RuntimeLimits::default(),
            stopwords,
        })
    }

    /// Reject inputs beyond these bounds before processing
    pub fn with_limits(mut self, limits: RuntimeLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn limits(&self) -> &RuntimeLimits {
        &self.limits
    }

    /// Summarize `text` without observing stages
    ///
    /// `target` of `None` or `Some(0)` estimates the length automatically.
    pub fn summarize(&self, text: &str, target: Option<usize>) -> Result<Summary> {
        self.run(text, target, &mut NoopObserver)
    }

    /// Execute every stage, producing a [`Summary`]
    pub fn run(
        &self,
        text: &str,
        target: Option<usize>,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }
        RuntimeLimits::check(self.limits.max_chars, text.chars().count(), "chars")?;

        // Stage 1: Tokenize
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let sentences = Tokenizer::new()
            .with_clause_splitting(self.config.split_clauses)
            .tokenize(text, &self.stopwords);
        let report = StageReportBuilder::new(clock.elapsed())
            .items(sentences.len())
            .build();
        observer.on_stage_end(STAGE_TOKENIZE, &report);
        observer.on_sentences(&sentences);

        RuntimeLimits::check(self.limits.max_sentences, sentences.len(), "sentences")?;
        let original_count = sentences.len();

        // Stage 2: Estimate target length
        trace_stage!(STAGE_ESTIMATE);
        observer.on_stage_start(STAGE_ESTIMATE);
        let clock = StageClock::start();
        let (target, estimated) = match target {
            Some(t) if t > 0 => (t, false),
            _ => {
                let stats = DocumentStats::from_text(text, original_count);
                let t = estimate_target(stats);
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    words = stats.words,
                    sentences = stats.sentences,
                    target_sentences = t,
                    "estimated target length"
                );
                (t, true)
            }
        };
        let report = StageReportBuilder::new(clock.elapsed())
            .target(target)
            .skipped(!estimated)
            .build();
        observer.on_stage_end(STAGE_ESTIMATE, &report);

        // Stage 3: Filter candidates
        trace_stage!(STAGE_CANDIDATES);
        observer.on_stage_start(STAGE_CANDIDATES);
        let clock = StageClock::start();
        let candidates = CandidateFilter::from_config(&self.config).filter(sentences);
        let report = StageReportBuilder::new(clock.elapsed())
            .items(candidates.len())
            .build();
        observer.on_stage_end(STAGE_CANDIDATES, &report);
        observer.on_candidates(&candidates);

        if candidates.is_empty() {
            return Err(SummarizeError::NoCandidates);
        }

        // Stage 4: Score
        trace_stage!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let fits = candidates.len() <= target;
        let scores = if fits {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                candidates = candidates.len(),
                target_sentences = target,
                "candidates fit the target, skipping scoring"
            );
            None
        } else {
            Some(SentenceScorer::document(&self.config, &self.stopwords).score(&candidates))
        };
        let report = StageReportBuilder::new(clock.elapsed())
            .items(scores.as_ref().map_or(0, |s| s.len()))
            .skipped(fits)
            .build();
        observer.on_stage_end(STAGE_SCORE, &report);
        if let Some(scores) = &scores {
            observer.on_scores(scores);
        }

        // Stage 5: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selection = match &scores {
            Some(scores) => {
                SentenceSelector::with_config(SelectorConfig::from_config(&self.config))
                    .select(&candidates, scores, target)
            }
            None => SentenceSelector::take_all(&candidates),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            selected = selection.len(),
            backfilled = selection.backfilled,
            "selected sentences"
        );
        let report = StageReportBuilder::new(clock.elapsed())
            .items(selection.len())
            .target(target)
            .backfilled(selection.backfilled)
            .build();
        observer.on_stage_end(STAGE_SELECT, &report);
        observer.on_selection(&selection);

        Ok(Summary::new(selection.texts(), original_count))
    }
}

// ============================================================================
// TranscriptPipeline
// ============================================================================

/// Topic-segmented transcript summarization
#[derive(Debug, Clone)]
pub struct TranscriptPipeline {
    segmenter: SegmenterConfig,
    segment_summary: SegmentSummaryConfig,
    limits: RuntimeLimits,
    stopwords: Arc<StopwordFilter>,
}

impl Default for TranscriptPipeline {
    fn default() -> Self {
        Self {
            segmenter: SegmenterConfig::default(),
            segment_summary: SegmentSummaryConfig::default(),
            limits: RuntimeLimits::default(),
            stopwords: StopwordFilter::shared("en"),
        }
    }
}

impl TranscriptPipeline {
    /// Build a pipeline from validated configs
    pub fn new(segmenter: SegmenterConfig, segment_summary: SegmentSummaryConfig) -> Result<Self> {
        segmenter.validate()?;
        if segment_summary.max_sentences == 0 {
            return Err(SummarizeError::invalid_config(
                "max_segment_sentences must be > 0",
            ));
        }
        Ok(Self {
            segmenter,
            segment_summary,
            ..Self::default()
        })
    }

    /// Reject inputs beyond these bounds before processing
    pub fn with_limits(mut self, limits: RuntimeLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn segmenter_config(&self) -> &SegmenterConfig {
        &self.segmenter
    }

    /// Summarize `entries` without observing stages
    pub fn summarize(&self, entries: &[TranscriptEntry]) -> Result<TranscriptSummary> {
        self.run(entries, &mut NoopObserver)
    }

    /// Segment the transcript and summarize each segment
    pub fn run(
        &self,
        entries: &[TranscriptEntry],
        observer: &mut impl PipelineObserver,
    ) -> Result<TranscriptSummary> {
        let Some(last) = entries.last() else {
            return Err(SummarizeError::EmptyInput);
        };
        if entries.iter().all(|e| e.text.trim().is_empty()) {
            return Err(SummarizeError::EmptyInput);
        }
        RuntimeLimits::check(self.limits.max_entries, entries.len(), "entries")?;
        let chars: usize = entries.iter().map(|e| e.text.chars().count()).sum();
        RuntimeLimits::check(self.limits.max_chars, chars, "chars")?;

        // Stage 1: Segment
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let segments = TopicSegmenter::new(self.segmenter.clone(), &self.stopwords).segments(entries);
        let report = StageReportBuilder::new(clock.elapsed())
            .items(segments.len())
            .build();
        observer.on_stage_end(STAGE_SEGMENT, &report);
        observer.on_segments(&segments);

        // Stage 2: Summarize segments
        trace_stage!(STAGE_SEGMENT_SUMMARY);
        observer.on_stage_start(STAGE_SEGMENT_SUMMARY);
        let clock = StageClock::start();
        let summarizer = SegmentSummarizer::new(self.segment_summary.clone(), &self.stopwords);
        let summaries: Vec<_> = segments
            .iter()
            .map(|segment| summarizer.summarize_segment(segment))
            .collect();
        let report = StageReportBuilder::new(clock.elapsed())
            .items(summaries.len())
            .build();
        observer.on_stage_end(STAGE_SEGMENT_SUMMARY, &report);

        let full_summary = summaries
            .iter()
            .map(|s| s.summary.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(TranscriptSummary {
            total_segments: summaries.len(),
            total_duration: format_timestamp(last.end_seconds()),
            full_summary,
            segments: summaries,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::artifacts::ScoreVector;
    use crate::pipeline::observer::StageTimingObserver;
    use crate::summarizer::selector::SelectionResult;
    use crate::types::{Segment, Sentence};

    const TEXT: &str = "Rust compilers check ownership rules at build time. \
        Glaciers carve deep valleys over many centuries. \
        The borrow checker in Rust compilers rejects unsafe aliasing. \
        Ocean currents move warm water toward northern coasts. \
        Memory safety without garbage collection attracts systems programmers.";

    fn transcript(n: usize) -> Vec<TranscriptEntry> {
        (0..n)
            .map(|i| TranscriptEntry::new(format!("Segment line {i} talks."), i as f64 * 5.0, 5.0))
            .collect()
    }

    #[test]
    fn test_pipeline_run_with_timing_observer() {
        let pipeline = SummaryPipeline::default();
        let mut obs = StageTimingObserver::new();
        let summary = pipeline.run(TEXT, None, &mut obs).unwrap();

        let stage_names: Vec<&str> = obs.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            stage_names,
            vec![
                STAGE_TOKENIZE,
                STAGE_ESTIMATE,
                STAGE_CANDIDATES,
                STAGE_SCORE,
                STAGE_SELECT,
            ]
        );

        let tokenize = obs.report(STAGE_TOKENIZE).unwrap();
        assert_eq!(tokenize.items(), Some(5));

        // 40 words over 5 sentences: max(2, floor(3.5)) = 3, avg 8 => floor(3.6)
        let estimate = obs.report(STAGE_ESTIMATE).unwrap();
        assert_eq!(estimate.target(), Some(3));
        assert!(!estimate.skipped());

        assert_eq!(summary.selected_count, 3);
        assert_eq!(summary.original_sentence_count, 5);
    }

    #[test]
    fn test_explicit_target_skips_estimate() {
        let mut obs = StageTimingObserver::new();
        let summary = SummaryPipeline::default().run(TEXT, Some(2), &mut obs).unwrap();
        assert_eq!(summary.selected_count, 2);
        assert!(obs.report(STAGE_ESTIMATE).unwrap().skipped());
    }

    #[test]
    fn test_zero_target_means_auto() {
        let pipeline = SummaryPipeline::default();
        assert_eq!(
            pipeline.summarize(TEXT, Some(0)).unwrap(),
            pipeline.summarize(TEXT, None).unwrap()
        );
    }

    #[test]
    fn test_candidates_that_fit_are_returned_verbatim() {
        let mut obs = StageTimingObserver::new();
        let summary = SummaryPipeline::default().run(TEXT, Some(10), &mut obs).unwrap();
        assert!(obs.report(STAGE_SCORE).unwrap().skipped());
        assert_eq!(summary.selected_count, 5);
        assert_eq!(
            summary.selected_sentences[0],
            "Rust compilers check ownership rules at build time."
        );
    }

    #[test]
    fn test_selection_in_document_order() {
        let pipeline = SummaryPipeline::default();
        let tokenized = Tokenizer::new().split_sentences(TEXT);
        let summary = pipeline.summarize(TEXT, Some(3)).unwrap();

        let positions: Vec<usize> = summary
            .selected_sentences
            .iter()
            .map(|s| tokenized.iter().position(|t| t == s).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let pipeline = SummaryPipeline::default();
        assert_eq!(pipeline.summarize("", None), Err(SummarizeError::EmptyInput));
        assert_eq!(pipeline.summarize(" \n\t ", None), Err(SummarizeError::EmptyInput));
    }

    #[test]
    fn test_no_candidates_is_an_error() {
        let result = SummaryPipeline::default().summarize("Hi. Ok then. Yes.", None);
        assert_eq!(result, Err(SummarizeError::NoCandidates));
    }

    #[test]
    fn test_runtime_limits() {
        let pipeline = SummaryPipeline::default().with_limits(RuntimeLimits {
            max_chars: Some(10),
            ..RuntimeLimits::default()
        });
        assert!(matches!(
            pipeline.summarize(TEXT, None),
            Err(SummarizeError::InputTooLarge { unit: "chars", .. })
        ));

        let pipeline = SummaryPipeline::default().with_limits(RuntimeLimits {
            max_sentences: Some(4),
            ..RuntimeLimits::default()
        });
        assert_eq!(
            pipeline.summarize(TEXT, None),
            Err(SummarizeError::InputTooLarge {
                limit: 4,
                actual: 5,
                unit: "sentences"
            })
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SummarizerConfig::default().with_redundancy_threshold(2.0);
        assert!(matches!(
            SummaryPipeline::new(config),
            Err(SummarizeError::InvalidConfig { .. })
        ));
    }

    /// Custom observer that captures artifact snapshots.
    #[derive(Default)]
    struct ArtifactObserver {
        saw_sentences: bool,
        saw_candidates: bool,
        saw_scores: bool,
        saw_selection: bool,
        saw_segments: bool,
    }

    impl PipelineObserver for ArtifactObserver {
        fn on_sentences(&mut self, _sentences: &[Sentence]) {
            self.saw_sentences = true;
        }
        fn on_candidates(&mut self, _candidates: &[Sentence]) {
            self.saw_candidates = true;
        }
        fn on_scores(&mut self, _scores: &ScoreVector) {
            self.saw_scores = true;
        }
        fn on_selection(&mut self, _selection: &SelectionResult) {
            self.saw_selection = true;
        }
        fn on_segments(&mut self, _segments: &[Segment]) {
            self.saw_segments = true;
        }
    }

    #[test]
    fn test_pipeline_calls_all_artifact_observers() {
        let mut obs = ArtifactObserver::default();
        SummaryPipeline::default().run(TEXT, Some(2), &mut obs).unwrap();

        assert!(obs.saw_sentences, "on_sentences not called");
        assert!(obs.saw_candidates, "on_candidates not called");
        assert!(obs.saw_scores, "on_scores not called");
        assert!(obs.saw_selection, "on_selection not called");
        assert!(!obs.saw_segments);
    }

    #[test]
    fn test_short_transcript_is_one_segment() {
        let entries = transcript(9);
        let mut obs = StageTimingObserver::new();
        let summary = TranscriptPipeline::default().run(&entries, &mut obs).unwrap();

        assert_eq!(summary.total_segments, 1);
        assert_eq!(summary.segments[0].timestamp, "00:00");
        // 9 sentences, capped at the two best
        assert_eq!(
            summary.segments[0].summary,
            "Segment line 0 talks. Segment line 1 talks."
        );
        assert_eq!(summary.full_summary, summary.segments[0].summary);
        assert_eq!(summary.total_duration, "00:45");

        let names: Vec<&str> = obs.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_SEGMENT, STAGE_SEGMENT_SUMMARY]);
    }

    #[test]
    fn test_transcript_errors() {
        let pipeline = TranscriptPipeline::default();
        assert_eq!(pipeline.summarize(&[]), Err(SummarizeError::EmptyInput));
        assert_eq!(
            pipeline.summarize(&[TranscriptEntry::new("  ", 0.0, 1.0)]),
            Err(SummarizeError::EmptyInput)
        );

        let limited = TranscriptPipeline::default().with_limits(RuntimeLimits {
            max_entries: Some(3),
            ..RuntimeLimits::default()
        });
        assert!(matches!(
            limited.summarize(&transcript(4)),
            Err(SummarizeError::InputTooLarge { unit: "entries", .. })
        ));
    }

    #[test]
    fn test_transcript_config_validation() {
        assert!(TranscriptPipeline::new(
            SegmenterConfig::default().with_window_size(0),
            SegmentSummaryConfig::default()
        )
        .is_err());

        let no_sentences = SegmentSummaryConfig {
            max_sentences: 0,
            ..SegmentSummaryConfig::default()
        };
        assert!(TranscriptPipeline::new(SegmenterConfig::default(), no_sentences).is_err());
    }

    #[test]
    fn test_transcript_observer_sees_segments() {
        let mut obs = ArtifactObserver::default();
        TranscriptPipeline::default().run(&transcript(3), &mut obs).unwrap();
        assert!(obs.saw_segments);
        assert!(!obs.saw_scores);
    }
}
