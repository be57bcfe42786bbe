//! Summary request specification.
//!
//! A [`SummaryRequest`] is the loosely-typed shape callers receive at their
//! boundary (usually JSON). [`SummaryRequest::resolve`] validates it once and
//! produces typed [`SummaryOptions`] for the engine.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "method": "extractive",
//!   "target_sentences": "auto",
//!   "transcript": { "window_size": 5, "threshold": 0.35, "max_segment_sentences": 2 },
//!   "runtime": { "max_chars": 200000 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::runner::{SummaryPipeline, TranscriptPipeline};
use super::validation::ValidationEngine;
use crate::errors::{Result, SummarizeError};
use crate::types::{RuntimeLimits, SegmentSummaryConfig, SegmenterConfig, SummarizerConfig};

/// Top-level summary request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Which strategy the caller wants.
    #[serde(default)]
    pub method: SummaryMethod,

    /// Requested summary length; automatic when absent.
    #[serde(default)]
    pub target_sentences: TargetSentences,

    /// Transcript segmentation parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<TranscriptSpec>,

    /// Runtime execution limits.
    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Summarization strategy requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMethod {
    /// Sentence extraction (always available).
    #[default]
    Extractive,
    /// A generative model supplied by the caller, usually chained before
    /// extraction with [`WithFallback`](crate::summarizer::WithFallback).
    Abstractive,
}

/// A `target_sentences` value as received.
///
/// `null`, `""`, `"auto"` and `0` all mean automatic. Integers and numeric
/// strings are counts. Anything else is kept as `Invalid` so validation can
/// report it alongside every other problem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TargetSentences {
    #[default]
    Auto,
    Count(u64),
    Invalid(String),
}

impl TargetSentences {
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Auto,
            serde_json::Value::Number(n) => match n.as_u64() {
                Some(0) => Self::Auto,
                Some(count) => Self::Count(count),
                None => Self::Invalid(n.to_string()),
            },
            serde_json::Value::String(s) => Self::parse(s),
            other => Self::Invalid(other.to_string()),
        }
    }

    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() || text.eq_ignore_ascii_case("auto") {
            return Self::Auto;
        }
        match text.parse::<u64>() {
            Ok(0) => Self::Auto,
            Ok(count) => Self::Count(count),
            Err(_) => Self::Invalid(text.to_string()),
        }
    }

    /// The count, or `None` for automatic and invalid values
    pub fn count(&self) -> Option<u64> {
        match self {
            Self::Count(n) => Some(*n),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for TargetSentences {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl Serialize for TargetSentences {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Count(n) => serializer.serialize_u64(*n),
            Self::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

/// Transcript segmentation parameters. Omitted fields take the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptSpec {
    #[serde(default)]
    pub window_size: Option<usize>,

    #[serde(default)]
    pub threshold: Option<f64>,

    #[serde(default)]
    pub max_segment_sentences: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Runtime execution limits (fail-fast guards).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Maximum input characters before rejecting.
    #[serde(default)]
    pub max_chars: Option<usize>,

    /// Maximum tokenized sentences before rejecting.
    #[serde(default)]
    pub max_sentences: Option<usize>,

    /// Maximum transcript entries before rejecting.
    #[serde(default)]
    pub max_entries: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Validated, typed options resolved from a [`SummaryRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOptions {
    pub method: SummaryMethod,
    /// `None` means estimate the length automatically
    pub target_sentences: Option<usize>,
    pub segmenter: SegmenterConfig,
    pub segment_summary: SegmentSummaryConfig,
    pub limits: RuntimeLimits,
    /// Non-fatal diagnostics, e.g. unknown fields outside strict mode
    pub warnings: Vec<String>,
}

impl SummaryOptions {
    /// Document pipeline with these limits and the default scoring config
    pub fn summary_pipeline(&self) -> SummaryPipeline {
        SummaryPipeline::default().with_limits(self.limits)
    }

    /// Summary pipeline built from a custom config, with these limits
    pub fn summary_pipeline_with(&self, config: SummarizerConfig) -> Result<SummaryPipeline> {
        Ok(SummaryPipeline::new(config)?.with_limits(self.limits))
    }

    /// Transcript pipeline with these segmentation parameters and limits
    pub fn transcript_pipeline(&self) -> Result<TranscriptPipeline> {
        Ok(
            TranscriptPipeline::new(self.segmenter.clone(), self.segment_summary.clone())?
                .with_limits(self.limits),
        )
    }
}

impl SummaryRequest {
    /// Parse a request from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SummarizeError::InvalidRequest {
            diagnostics: vec![e.to_string()],
        })
    }

    /// Validate with the default rules and resolve typed options
    ///
    /// Every error is reported at once in [`SummarizeError::InvalidRequest`].
    pub fn resolve(&self) -> Result<SummaryOptions> {
        self.resolve_with(&ValidationEngine::with_defaults())
    }

    /// Validate with a custom engine and resolve typed options
    pub fn resolve_with(&self, engine: &ValidationEngine) -> Result<SummaryOptions> {
        let warnings = engine.validate(self).into_result()?;

        let target_sentences = self
            .target_sentences
            .count()
            .and_then(|n| usize::try_from(n).ok());

        let mut segmenter = SegmenterConfig::default();
        let mut segment_summary = SegmentSummaryConfig::default();
        if let Some(transcript) = &self.transcript {
            if let Some(window_size) = transcript.window_size {
                segmenter.window_size = window_size;
            }
            if let Some(threshold) = transcript.threshold {
                segmenter.threshold = threshold;
            }
            if let Some(max) = transcript.max_segment_sentences {
                segment_summary.max_sentences = max;
            }
        }

        Ok(SummaryOptions {
            method: self.method,
            target_sentences,
            segmenter,
            segment_summary,
            limits: RuntimeLimits {
                max_chars: self.runtime.max_chars,
                max_sentences: self.runtime.max_sentences,
                max_entries: self.runtime.max_entries,
            },
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> SummaryRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let req = request("{}");
        assert_eq!(req.method, SummaryMethod::Extractive);
        assert_eq!(req.target_sentences, TargetSentences::Auto);
        assert!(req.transcript.is_none());
        assert!(!req.strict);
    }

    #[test]
    fn test_deserialize_full_request() {
        let req = request(
            r#"{
                "method": "abstractive",
                "target_sentences": 4,
                "transcript": { "window_size": 3, "threshold": 0.3 },
                "runtime": { "max_chars": 100000 },
                "strict": true
            }"#,
        );
        assert_eq!(req.method, SummaryMethod::Abstractive);
        assert_eq!(req.target_sentences, TargetSentences::Count(4));
        let transcript = req.transcript.unwrap();
        assert_eq!(transcript.window_size, Some(3));
        assert_eq!(transcript.max_segment_sentences, None);
        assert_eq!(req.runtime.max_chars, Some(100000));
        assert!(req.strict);
    }

    #[test]
    fn test_loose_target_values() {
        let cases = [
            (r#"null"#, TargetSentences::Auto),
            (r#""auto""#, TargetSentences::Auto),
            (r#""AUTO""#, TargetSentences::Auto),
            (r#""""#, TargetSentences::Auto),
            (r#"0"#, TargetSentences::Auto),
            (r#""0""#, TargetSentences::Auto),
            (r#"" 7 ""#, TargetSentences::Count(7)),
            (r#"12"#, TargetSentences::Count(12)),
            (r#""many""#, TargetSentences::Invalid("many".to_string())),
            (r#"-3"#, TargetSentences::Invalid("-3".to_string())),
            (r#"2.5"#, TargetSentences::Invalid("2.5".to_string())),
            (r#"true"#, TargetSentences::Invalid("true".to_string())),
        ];
        for (raw, expected) in cases {
            let req = request(&format!(r#"{{ "target_sentences": {raw} }}"#));
            assert_eq!(req.target_sentences, expected, "input {raw}");
        }
    }

    #[test]
    fn test_unknown_fields_captured() {
        let req = request(
            r#"{
                "max_sentences": 3,
                "transcript": { "window": 4 },
                "runtime": { "max_threads": 8 }
            }"#,
        );
        assert!(req.unknown_fields.contains_key("max_sentences"));
        assert!(req.transcript.unwrap().unknown_fields.contains_key("window"));
        assert!(req.runtime.unknown_fields.contains_key("max_threads"));
    }

    #[test]
    fn test_resolve_defaults() {
        let options = request("{}").resolve().unwrap();
        assert_eq!(options.target_sentences, None);
        assert_eq!(options.segmenter, SegmenterConfig::default());
        assert_eq!(options.segment_summary.max_sentences, 2);
        assert_eq!(options.limits, RuntimeLimits::default());
        assert!(options.warnings.is_empty());
    }

    #[test]
    fn test_resolve_overrides() {
        let options = request(
            r#"{
                "target_sentences": "5",
                "transcript": { "window_size": 3, "threshold": 0.2, "max_segment_sentences": 1 },
                "runtime": { "max_entries": 500 }
            }"#,
        )
        .resolve()
        .unwrap();
        assert_eq!(options.target_sentences, Some(5));
        assert_eq!(options.segmenter.window_size, 3);
        assert!((options.segmenter.threshold - 0.2).abs() < 1e-12);
        assert_eq!(options.segment_summary.max_sentences, 1);
        assert_eq!(options.limits.max_entries, Some(500));
        assert!(options.transcript_pipeline().is_ok());
    }

    #[test]
    fn test_resolve_collects_every_error() {
        let err = request(
            r#"{
                "target_sentences": 40,
                "transcript": { "window_size": 0 },
                "runtime": { "max_chars": 0 }
            }"#,
        )
        .resolve()
        .unwrap_err();
        match err {
            SummarizeError::InvalidRequest { diagnostics } => assert_eq!(diagnostics.len(), 3),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_non_strict_unknowns_become_warnings() {
        let options = request(r#"{ "bogus": 1 }"#).resolve().unwrap();
        assert_eq!(options.warnings.len(), 1);
        assert!(options.warnings[0].contains("bogus"));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        assert!(matches!(
            SummaryRequest::from_json("{ not json"),
            Err(SummarizeError::InvalidRequest { .. })
        ));
        assert!(matches!(
            SummaryRequest::from_json(r#"{ "method": "poetic" }"#),
            Err(SummarizeError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let req = request(r#"{ "method": "abstractive", "target_sentences": 3 }"#);
        let back = serde_json::to_value(&req).unwrap();
        assert_eq!(back["method"], "abstractive");
        assert_eq!(back["target_sentences"], 3);

        let back = serde_json::to_value(request("{}")).unwrap();
        assert_eq!(back["target_sentences"], "auto");
    }
}
