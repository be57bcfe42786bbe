//! Transcript summarization components
//!
//! Topic segmentation over timestamped entries, lightweight per-segment
//! summaries, and timestamp formatting.

pub mod segment_summary;
pub mod segmenter;
pub mod timestamp;

pub use segment_summary::SegmentSummarizer;
pub use segmenter::{build_segments, TopicSegmenter};
pub use timestamp::format_timestamp;
