//! Pluggable summarization strategies
//!
//! Every strategy produces the same [`Summary`] shape, so callers cannot tell
//! which one ran. [`WithFallback`] chains two strategies: if the primary
//! fails for any reason, the fallback runs on the same input.

use crate::errors::Result;
use crate::pipeline::runner::SummaryPipeline;
use crate::types::Summary;

/// A summarization strategy
pub trait Summarizer: Send + Sync {
    /// Short identifier used in logs and errors
    fn name(&self) -> &str;

    /// Summarize `text` into about `target` sentences (`None` for automatic)
    fn summarize(&self, text: &str, target: Option<usize>) -> Result<Summary>;
}

impl<S: Summarizer + ?Sized> Summarizer for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn summarize(&self, text: &str, target: Option<usize>) -> Result<Summary> {
        (**self).summarize(text, target)
    }
}

/// Sentence extraction through a [`SummaryPipeline`]
#[derive(Debug, Clone, Default)]
pub struct ExtractiveSummarizer {
    pipeline: SummaryPipeline,
}

impl ExtractiveSummarizer {
    pub fn new(pipeline: SummaryPipeline) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &SummaryPipeline {
        &self.pipeline
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn name(&self) -> &str {
        "extractive"
    }

    fn summarize(&self, text: &str, target: Option<usize>) -> Result<Summary> {
        self.pipeline.summarize(text, target)
    }
}

/// Try `primary`, fall back to `fallback` on any error
#[derive(Debug, Clone)]
pub struct WithFallback<P, F> {
    primary: P,
    fallback: F,
    name: String,
}

impl<P: Summarizer, F: Summarizer> WithFallback<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        let name = format!("{}+{}", primary.name(), fallback.name());
        Self {
            primary,
            fallback,
            name,
        }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<P: Summarizer, F: Summarizer> Summarizer for WithFallback<P, F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn summarize(&self, text: &str, target: Option<usize>) -> Result<Summary> {
        match self.primary.summarize(text, target) {
            Ok(summary) => Ok(summary),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %_err,
                    "primary strategy failed, falling back"
                );
                self.fallback.summarize(text, target)
            }
        }
    }
}
