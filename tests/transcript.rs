use rapid_summarizer::nlp::stopwords::StopwordFilter;
use rapid_summarizer::transcript::TopicSegmenter;
use rapid_summarizer::{
    summarize_transcript, SegmenterConfig, SummarizeError, TranscriptEntry, TranscriptPipeline,
};

const COMPILERS: &str = "Compilers parse tokens into syntax trees.";
const GLACIERS: &str = "Glaciers carve valleys across frozen mountains.";

fn two_topics() -> Vec<TranscriptEntry> {
    (0..20)
        .map(|i| {
            let text = if i < 10 { COMPILERS } else { GLACIERS };
            TranscriptEntry::new(text, i as f64 * 10.0, 9.5)
        })
        .collect()
}

#[test]
fn oversized_window_keeps_one_segment() {
    let entries = vec![TranscriptEntry::new("Only one caption line here.", 0.0, 2.0)];
    let result = summarize_transcript(&entries, usize::MAX, 0.35).unwrap();
    assert_eq!(result.total_segments, 1);

    let result = summarize_transcript(&two_topics(), usize::MAX, 0.35).unwrap();
    assert_eq!(result.total_segments, 1);
}

#[test]
fn short_transcript_is_one_segment() {
    let entries: Vec<_> = (0..9)
        .map(|i| TranscriptEntry::new(format!("Speaker explains point number {i} slowly."), 12.0 + i as f64 * 4.0, 3.0))
        .collect();

    let result = summarize_transcript(&entries, 5, 0.35).unwrap();
    assert_eq!(result.total_segments, 1);
    assert_eq!(result.segments[0].timestamp, "00:12");
    assert_eq!(result.segments[0].start_seconds, 12.0);
    assert_eq!(result.total_duration, "00:47");
}

#[test]
fn topic_shift_splits_the_transcript() {
    let result = summarize_transcript(&two_topics(), 5, 0.1).unwrap();

    assert_eq!(result.total_segments, 2);
    assert_eq!(result.segments[0].timestamp, "00:00");
    assert_eq!(result.segments[1].timestamp, "01:40");
    assert!(result.segments[0].summary.contains("Compilers"));
    assert!(result.segments[1].summary.contains("Glaciers"));
    assert_eq!(
        result.full_summary,
        format!("{} {}", result.segments[0].summary, result.segments[1].summary)
    );
    assert_eq!(result.total_duration, "03:19");
}

#[test]
fn segment_starts_strictly_increase() {
    let result = summarize_transcript(&two_topics(), 5, 0.35).unwrap();
    assert!(result.total_segments >= 2);
    for pair in result.segments.windows(2) {
        assert!(pair[0].start_seconds < pair[1].start_seconds);
    }
}

#[test]
fn segments_cover_every_entry_in_order() {
    let entries = two_topics();
    let segmenter = TopicSegmenter::new(SegmenterConfig::default(), StopwordFilter::english());
    let segments = segmenter.segments(&entries);

    assert_eq!(segments.first().unwrap().entries.start, 0);
    assert_eq!(segments.last().unwrap().entries.end, entries.len());
    for pair in segments.windows(2) {
        assert_eq!(pair[0].entries.end, pair[1].entries.start);
    }

    let joined: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
    let original: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(joined.join(" "), original.join(" "));
}

#[test]
fn hour_long_transcripts_use_hours() {
    let entries: Vec<_> = (0..6)
        .map(|i| TranscriptEntry::new("The lecture continues with more detail.", 3600.0 + i as f64 * 30.0, 30.0))
        .collect();
    let result = summarize_transcript(&entries, 5, 0.35).unwrap();
    assert_eq!(result.segments[0].timestamp, "01:00:00");
    assert_eq!(result.total_duration, "01:03:00");
}

#[test]
fn empty_transcripts_are_rejected() {
    assert_eq!(summarize_transcript(&[], 5, 0.35), Err(SummarizeError::EmptyInput));

    let blank = vec![TranscriptEntry::new("  ", 0.0, 1.0), TranscriptEntry::new("", 1.0, 1.0)];
    assert_eq!(summarize_transcript(&blank, 5, 0.35), Err(SummarizeError::EmptyInput));
}

#[test]
fn invalid_segmenter_parameters_are_rejected() {
    let entries = two_topics();
    assert!(matches!(
        summarize_transcript(&entries, 0, 0.35),
        Err(SummarizeError::InvalidConfig { .. })
    ));
    assert!(matches!(
        summarize_transcript(&entries, 5, 1.5),
        Err(SummarizeError::InvalidConfig { .. })
    ));
}

#[test]
fn default_pipeline_matches_free_function() {
    let entries = two_topics();
    let via_pipeline = TranscriptPipeline::default().summarize(&entries).unwrap();
    let via_function = summarize_transcript(&entries, 5, 0.35).unwrap();
    assert_eq!(via_pipeline, via_function);
}
