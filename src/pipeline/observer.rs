//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::pipeline::artifacts::ScoreVector;
use crate::summarizer::selector::SelectionResult;
use crate::types::{Segment, Sentence};

// ─── Stage names ────────────────────────────────────────────────────────────

pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_ESTIMATE: &str = "estimate";
pub const STAGE_CANDIDATES: &str = "candidates";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_SEGMENT_SUMMARY: &str = "segment_summary";

// ─── Stage reports ──────────────────────────────────────────────────────────

/// Measures the wall-clock duration of one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage reported when it finished.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
    target: Option<usize>,
    backfilled: Option<usize>,
    skipped: bool,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of items the stage produced (sentences, candidates, segments)
    pub fn items(&self) -> Option<usize> {
        self.items
    }

    /// Target sentence count, for the estimate and select stages
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn backfilled(&self) -> Option<usize> {
        self.backfilled
    }

    /// True when the stage had nothing to do
    pub fn skipped(&self) -> bool {
        self.skipped
    }
}

/// Fluent construction of a [`StageReport`] with optional metrics.
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items(mut self, items: usize) -> Self {
        self.report.items = Some(items);
        self
    }

    pub fn target(mut self, target: usize) -> Self {
        self.report.target = Some(target);
        self
    }

    pub fn backfilled(mut self, backfilled: usize) -> Self {
        self.report.backfilled = Some(backfilled);
        self
    }

    pub fn skipped(mut self, skipped: bool) -> Self {
        self.report.skipped = skipped;
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

// ─── Observer trait ─────────────────────────────────────────────────────────

/// Receives callbacks as a pipeline runs.
///
/// Every method has an empty default, so implementors override only what
/// they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_candidates(&mut self, _candidates: &[Sentence]) {}

    fn on_scores(&mut self, _scores: &ScoreVector) {}

    fn on_selection(&mut self, _selection: &SelectionResult) {}

    fn on_segments(&mut self, _segments: &[Segment]) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records the report of every finished stage, in order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for `stage`, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
