//! Pipeline orchestration
//!
//! Typed stage artifacts, observer hooks, the runners that thread artifacts
//! through the stages, and the JSON request shape with its validation engine.

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;

pub use error_code::ErrorCode;
pub use errors::PipelineSpecError;
pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{SummaryPipeline, TranscriptPipeline};
pub use spec::{SummaryMethod, SummaryOptions, SummaryRequest, TargetSentences};
pub use validation::{ValidationEngine, ValidationReport, ValidationRule};
