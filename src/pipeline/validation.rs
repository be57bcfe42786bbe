//! Request validation
//!
//! A [`ValidationEngine`] runs every registered [`ValidationRule`] over a
//! [`SummaryRequest`] and gathers what they find in one
//! [`ValidationReport`]. Rules never short-circuit each other, so a caller
//! fixing a request sees all of its problems in a single round trip.
//!
//! ```rust
//! use rapid_summarizer::pipeline::{SummaryRequest, ValidationEngine};
//!
//! let request = SummaryRequest::from_json(r#"{ "target_sentences": 40 }"#).unwrap();
//! let report = ValidationEngine::with_defaults().validate(&request);
//! assert!(report.has_errors());
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::PipelineSpecError;
use super::spec::{SummaryRequest, TargetSentences};
use crate::errors::{Result, SummarizeError};

/// Smallest explicit summary length a request may ask for
pub const MIN_TARGET_SENTENCES: u64 = 1;
/// Largest explicit summary length a request may ask for
pub const MAX_TARGET_SENTENCES: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The request cannot be resolved
    Error,
    /// Reported back but does not block the request
    Warning,
}

/// One finding, tagged with how serious it is
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: PipelineSpecError,
}

impl ValidationDiagnostic {
    pub fn new(severity: Severity, error: PipelineSpecError) -> Self {
        Self { severity, error }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Findings of every rule, in the order the rules ran
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(&mut self, severity: Severity, error: PipelineSpecError) {
        self.diagnostics.push(ValidationDiagnostic::new(severity, error));
    }

    pub fn error(&mut self, error: PipelineSpecError) {
        self.push(Severity::Error, error);
    }

    pub fn warn(&mut self, error: PipelineSpecError) {
        self.push(Severity::Warning, error);
    }

    pub fn diagnostics(&self) -> &[ValidationDiagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &PipelineSpecError> {
        self.of(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &PipelineSpecError> {
        self.of(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(ValidationDiagnostic::is_error)
    }

    /// True when nothing blocks the request; warnings are allowed
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Warning messages, or every error message as
    /// [`SummarizeError::InvalidRequest`]
    pub fn into_result(self) -> Result<Vec<String>> {
        let messages = |severity| self.of(severity).map(ToString::to_string).collect();
        if self.has_errors() {
            Err(SummarizeError::InvalidRequest {
                diagnostics: messages(Severity::Error),
            })
        } else {
            Ok(messages(Severity::Warning))
        }
    }

    fn of(&self, severity: Severity) -> impl Iterator<Item = &PipelineSpecError> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.error)
    }
}

/// A check over a whole request
///
/// Rules hold no state and may be shared between threads.
pub trait ValidationRule: Send + Sync {
    /// Stable identifier, e.g. `"target_range"`
    fn name(&self) -> &str;

    fn check(&self, request: &SummaryRequest, report: &mut ValidationReport);
}

/// A rule backed by a plain function
struct FnRule {
    name: &'static str,
    check: fn(&SummaryRequest, &mut ValidationReport),
}

impl ValidationRule for FnRule {
    fn name(&self) -> &str {
        self.name
    }

    fn check(&self, request: &SummaryRequest, report: &mut ValidationReport) {
        (self.check)(request, report)
    }
}

pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// An engine without rules
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Target range, transcript parameters, runtime limits, unknown fields
    pub fn with_defaults() -> Self {
        let builtin: [(&'static str, fn(&SummaryRequest, &mut ValidationReport)); 4] = [
            ("target_range", check_target),
            ("transcript_params", check_transcript),
            ("runtime_limits", check_runtime),
            ("unknown_fields", check_unknown_fields),
        ];
        let mut engine = Self::new();
        for (name, check) in builtin {
            engine.add_rule(Box::new(FnRule { name, check }));
        }
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn validate(&self, request: &SummaryRequest) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            rule.check(request, &mut report);
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn check_target(request: &SummaryRequest, report: &mut ValidationReport) {
    const PATH: &str = "/target_sentences";
    match &request.target_sentences {
        TargetSentences::Auto => {}
        TargetSentences::Count(n) if (MIN_TARGET_SENTENCES..=MAX_TARGET_SENTENCES).contains(n) => {}
        TargetSentences::Count(n) => report.error(
            PipelineSpecError::new(
                ErrorCode::OutOfRange,
                PATH,
                format!(
                    "target_sentences must be between {MIN_TARGET_SENTENCES} and \
                     {MAX_TARGET_SENTENCES}, got {n}"
                ),
            )
            .with_hint("Use a smaller count, or \"auto\" to estimate the length"),
        ),
        TargetSentences::Invalid(raw) => report.error(
            PipelineSpecError::new(
                ErrorCode::InvalidValue,
                PATH,
                format!("target_sentences must be a whole number or \"auto\", got {raw}"),
            )
            .with_hint("Pass an integer such as 3, or \"auto\""),
        ),
    }
}

fn check_transcript(request: &SummaryRequest, report: &mut ValidationReport) {
    let Some(transcript) = &request.transcript else {
        return;
    };

    if transcript.window_size == Some(0) {
        report.error(
            PipelineSpecError::new(
                ErrorCode::OutOfRange,
                "/transcript/window_size",
                "window_size must be at least 1",
            )
            .with_hint("Omit window_size to use the default of 5"),
        );
    }
    if let Some(threshold) = transcript.threshold.filter(|t| !(0.0..=1.0).contains(t)) {
        report.error(
            PipelineSpecError::new(
                ErrorCode::OutOfRange,
                "/transcript/threshold",
                format!("threshold must be between 0 and 1, got {threshold}"),
            )
            .with_hint("Cosine similarity thresholds around 0.3 work well"),
        );
    }
    if transcript.max_segment_sentences == Some(0) {
        report.error(PipelineSpecError::new(
            ErrorCode::OutOfRange,
            "/transcript/max_segment_sentences",
            "max_segment_sentences must be at least 1",
        ));
    }
}

fn check_runtime(request: &SummaryRequest, report: &mut ValidationReport) {
    let runtime = &request.runtime;
    for (field, limit) in [
        ("max_chars", runtime.max_chars),
        ("max_sentences", runtime.max_sentences),
        ("max_entries", runtime.max_entries),
    ] {
        if limit == Some(0) {
            report.error(
                PipelineSpecError::new(
                    ErrorCode::LimitExceeded,
                    format!("/runtime/{field}"),
                    format!("{field} must be greater than 0"),
                )
                .with_hint(format!("Omit {field} to lift the limit")),
            );
        }
    }
}

/// Extra keys are errors in strict mode and warnings otherwise
fn check_unknown_fields(request: &SummaryRequest, report: &mut ValidationReport) {
    let severity = if request.strict {
        Severity::Error
    } else {
        Severity::Warning
    };

    let mut sections: Vec<(&str, &HashMap<String, serde_json::Value>)> =
        vec![("", &request.unknown_fields)];
    if let Some(transcript) = &request.transcript {
        sections.push(("/transcript", &transcript.unknown_fields));
    }
    sections.push(("/runtime", &request.runtime.unknown_fields));

    for (prefix, extra) in sections {
        let mut keys: Vec<&String> = extra.keys().collect();
        keys.sort();
        for key in keys {
            report.push(
                severity,
                PipelineSpecError::new(
                    ErrorCode::UnknownField,
                    format!("{prefix}/{key}"),
                    format!("unrecognized field \"{key}\""),
                )
                .with_hint("Check the spelling or drop the field"),
            );
        }
    }
}
