use rapid_summarizer::nlp::tokenizer::Tokenizer;
use rapid_summarizer::pipeline::observer::{StageTimingObserver, STAGE_ESTIMATE, STAGE_SCORE};
use rapid_summarizer::{
    format_timestamp, summarize, SummarizeError, SummarizerConfig, SummaryPipeline,
    SummaryRequest,
};

const SOLAR_A: &str = "Solar panels convert sunlight into electricity very efficiently.";
const SOLAR_B: &str = "Solar panels convert sunlight into electricity quite cheaply.";
const SOLAR_C: &str = "Solar panels convert sunlight into electricity more reliably.";
const BAKERS: &str = "Bakers knead fresh dough before sunrise every morning.";
const VOLCANO: &str = "Volcanoes erupt molten rock from deep underground chambers.";

fn positions(summary: &[String], text: &str) -> Vec<usize> {
    let sentences = Tokenizer::new().split_sentences(text);
    summary
        .iter()
        .map(|s| sentences.iter().position(|t| t == s).expect("selected sentence not in source"))
        .collect()
}

#[test]
fn three_sentences_without_target_select_two_in_order() {
    let text = "Rust compilers check ownership rules at build time. \
                Glaciers carve deep valleys over many centuries. \
                The borrow checker rejects unsafe aliasing in Rust code.";
    let summary = summarize(text, None).unwrap();

    assert_eq!(summary.original_sentence_count, 3);
    assert_eq!(summary.selected_count, 2);
    let pos = positions(&summary.selected_sentences, text);
    assert!(pos[0] < pos[1]);
}

#[test]
fn candidates_within_target_are_returned_verbatim() {
    let text = "Ocean currents carry warm water toward northern coasts. \
                Hi. \
                Sea ice reflects most incoming sunlight back into space.";
    let mut obs = StageTimingObserver::new();
    let summary = SummaryPipeline::default().run(text, None, &mut obs).unwrap();

    assert_eq!(summary.original_sentence_count, 3);
    assert_eq!(
        summary.selected_sentences,
        vec![
            "Ocean currents carry warm water toward northern coasts.",
            "Sea ice reflects most incoming sunlight back into space.",
        ]
    );
    assert_eq!(obs.report(STAGE_ESTIMATE).unwrap().target(), Some(2));
    assert!(obs.report(STAGE_SCORE).unwrap().skipped());
}

#[test]
fn near_duplicate_rejected_in_strict_pass() {
    let text = [SOLAR_A, SOLAR_B, BAKERS, VOLCANO].join(" ");
    let summary = summarize(&text, Some(2)).unwrap();

    assert_eq!(summary.selected_count, 2);
    let picked = &summary.selected_sentences;
    let both = picked.iter().any(|s| s == SOLAR_A) && picked.iter().any(|s| s == SOLAR_B);
    assert!(!both, "both near-duplicates selected: {picked:?}");
}

#[test]
fn near_duplicates_backfilled_when_nothing_else_remains() {
    let text = [SOLAR_A, SOLAR_B, SOLAR_C].join(" ");
    let summary = summarize(&text, Some(2)).unwrap();
    assert_eq!(summary.selected_count, 2);
}

#[test]
fn timestamps_format_like_a_video_player() {
    assert_eq!(format_timestamp(3725.0), "01:02:05");
    assert_eq!(format_timestamp(125.0), "02:05");
}

#[test]
fn lowercase_text_is_split_at_every_period() {
    let text = "the compiler parses tokens into a syntax tree. \
                the optimizer removes dead code from hot loops. \
                a code generator emits machine instructions for the target. \
                users then run the resulting program.";
    let summary = summarize(text, Some(2)).unwrap();

    assert_eq!(summary.original_sentence_count, 4);
    assert_eq!(summary.selected_count, 2);
    let pos = positions(&summary.selected_sentences, text);
    assert!(pos[0] < pos[1]);
}

#[test]
fn abbreviations_stay_inside_their_sentence() {
    let text = "Dr. Smith went to the market today. \
                He bought some fresh apples there. \
                Then he walked home slowly.";
    let summary = summarize(text, None).unwrap();

    assert_eq!(summary.original_sentence_count, 3);
    let sources = [
        "Dr. Smith went to the market today.",
        "He bought some fresh apples there.",
        "Then he walked home slowly.",
    ];
    assert!(summary
        .selected_sentences
        .iter()
        .all(|s| sources.contains(&s.as_str())));
}

#[test]
fn clause_splitting_is_opt_in() {
    let text = "fast builds matter to every team, safe memory prevents many crashes, \
                tiny binaries ship quickly everywhere.";

    let summary = summarize(text, None).unwrap();
    assert_eq!(summary.original_sentence_count, 1);

    let config = SummarizerConfig::default().with_split_clauses(true);
    let summary = SummaryPipeline::new(config).unwrap().summarize(text, None).unwrap();
    assert_eq!(summary.original_sentence_count, 3);
    assert_eq!(summary.selected_count, 2);
}

#[test]
fn repeated_calls_are_identical() {
    let text = [SOLAR_A, BAKERS, VOLCANO, SOLAR_B, SOLAR_C].join(" ");
    let first = summarize(&text, None).unwrap();
    for _ in 0..5 {
        assert_eq!(summarize(&text, None).unwrap(), first);
    }
}

#[test]
fn long_document_target_is_bounded() {
    let topics = [
        "compilers", "glaciers", "volcanoes", "orchards", "satellites", "violins", "harbors",
        "forests", "proteins", "markets",
    ];
    let text = (0..60)
        .map(|i| {
            let topic = topics[i % topics.len()];
            format!("Researchers studied {topic} during season number {i} with great care.")
        })
        .collect::<Vec<_>>()
        .join(" ");

    let summary = summarize(&text, None).unwrap();
    assert_eq!(summary.original_sentence_count, 60);
    assert!(summary.selected_count >= 2 && summary.selected_count <= 12);

    let stats = summary.stats(&text);
    assert!(stats.summary_words < stats.original_words);
    assert!(stats.compression_ratio > 0.0);
}

#[test]
fn empty_and_unusable_input_are_errors() {
    assert_eq!(summarize("", None), Err(SummarizeError::EmptyInput));
    assert_eq!(summarize("   \n", Some(3)), Err(SummarizeError::EmptyInput));
    assert_eq!(summarize("Hi. Yes. Ok.", None), Err(SummarizeError::NoCandidates));
}

#[test]
fn other_languages_use_their_stopwords() {
    let config = SummarizerConfig::default().with_language("de");
    let pipeline = SummaryPipeline::new(config).unwrap();
    let text = "Der Hund läuft schnell über die Wiese. \
                Die Katze schläft ruhig auf dem warmen Sofa. \
                Der Vogel singt laut im hohen Baum.";
    let summary = pipeline.summarize(text, Some(2)).unwrap();
    assert_eq!(summary.selected_count, 2);
}

#[test]
fn request_resolves_into_a_working_pipeline() {
    let request = SummaryRequest::from_json(
        r#"{ "method": "extractive", "target_sentences": "2", "runtime": { "max_chars": 5000 } }"#,
    )
    .unwrap();
    let options = request.resolve().unwrap();

    let text = [SOLAR_A, BAKERS, VOLCANO].join(" ");
    let summary = options
        .summary_pipeline()
        .summarize(&text, options.target_sentences)
        .unwrap();
    assert_eq!(summary.selected_count, 2);
}

#[test]
fn request_limits_are_enforced() {
    let options = SummaryRequest::from_json(r#"{ "runtime": { "max_chars": 20 } }"#)
        .unwrap()
        .resolve()
        .unwrap();
    let result = options.summary_pipeline().summarize(SOLAR_A, None);
    assert!(matches!(result, Err(SummarizeError::InputTooLarge { unit: "chars", .. })));
}

#[test]
fn invalid_request_lists_every_problem() {
    let err = SummaryRequest::from_json(
        r#"{ "target_sentences": 50, "strict": true, "bogus": 1 }"#,
    )
    .unwrap()
    .resolve()
    .unwrap_err();
    match err {
        SummarizeError::InvalidRequest { diagnostics } => {
            assert_eq!(diagnostics.len(), 2);
            assert!(diagnostics.iter().any(|d| d.contains("target_sentences")));
            assert!(diagnostics.iter().any(|d| d.contains("bogus")));
        }
        other => panic!("unexpected error {other:?}"),
    }
}
