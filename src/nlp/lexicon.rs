//! Static lexical resources for sentence splitting and surface-cue scoring

/// Markers that signal argument structure; multi-word entries are matched
/// as consecutive words
pub const DISCOURSE_MARKERS: &[&str] = &[
    "however",
    "therefore",
    "thus",
    "consequently",
    "moreover",
    "furthermore",
    "importantly",
    "significantly",
    "notably",
    "essentially",
    "primarily",
    "specifically",
    "particularly",
    "especially",
    "indeed",
    "in fact",
    "for example",
    "for instance",
    "in conclusion",
    "to summarize",
    "overall",
];

/// Superlatives and emphasis words
pub const EMPHASIS_WORDS: &[&str] = &[
    "most",
    "best",
    "worst",
    "largest",
    "smallest",
    "critical",
    "essential",
    "key",
    "main",
    "major",
    "significant",
    "important",
];

/// Lowercased abbreviations that do not end a sentence
pub const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "st.", "jr.", "sr.", "vs.", "e.g.", "i.e.", "etc.",
];

/// True if the last word of `text` is one of [`ABBREVIATIONS`]
pub fn ends_with_abbreviation(text: &str) -> bool {
    let Some(last) = text.split_whitespace().next_back() else {
        return false;
    };
    let last = last
        .trim_start_matches(['(', '[', '"', '\'', '“'])
        .to_lowercase();
    ABBREVIATIONS.contains(&last.as_str())
}

/// True if any entry of `lexicon` occurs in `words` on word boundaries
pub fn contains_any(words: &[String], lexicon: &[&str]) -> bool {
    lexicon.iter().any(|entry| contains_phrase(words, entry))
}

fn contains_phrase(words: &[String], phrase: &str) -> bool {
    let parts: Vec<&str> = phrase.split(' ').collect();
    if parts.len() > words.len() {
        return false;
    }
    words
        .windows(parts.len())
        .any(|window| window.iter().zip(&parts).all(|(w, p)| w == p))
}
