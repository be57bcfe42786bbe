//! Sentence and word tokenization
//!
//! Sentence boundaries and words follow the Unicode text segmentation rules
//! (UAX #29) via the `unicode-segmentation` crate. Those rules keep
//! `". "` before a lowercase word inside one sentence, so each piece is cut
//! again at terminal punctuation followed by a space. Pieces that end in a
//! known abbreviation are glued back onto the following piece. Words are
//! lower-cased and punctuation is dropped.

use super::lexicon::ends_with_abbreviation;
use super::stopwords::StopwordFilter;
use crate::types::Sentence;
use unicode_segmentation::UnicodeSegmentation;

/// Stateless tokenizer producing [`Sentence`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    split_clauses: bool,
}

impl Tokenizer {
    /// Create a tokenizer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat ", " as a sentence boundary (for comma-chained input)
    pub fn with_clause_splitting(mut self, split: bool) -> Self {
        self.split_clauses = split;
        self
    }

    /// Split text into sentences, collapsing internal whitespace
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        let pieces = text
            .unicode_sentences()
            .flat_map(|raw| split_at_terminals(&collapse_whitespace(raw)));
        let sentences = merge_abbreviations(pieces);
        if !self.split_clauses {
            return sentences;
        }

        let mut clauses = Vec::with_capacity(sentences.len());
        for sentence in &sentences {
            push_clauses(sentence, &mut clauses);
        }
        clauses
    }

    /// Lower-cased words of `text`, punctuation removed
    pub fn words(text: &str) -> Vec<String> {
        text.unicode_words().map(|w| w.to_lowercase()).collect()
    }

    /// Tokenize text into sentences with word and term lists
    pub fn tokenize(&self, text: &str, stopwords: &StopwordFilter) -> Vec<Sentence> {
        self.split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, sentence_text)| {
                let words = Self::words(&sentence_text);
                let terms = stopwords.filter_terms(&words);
                Sentence::new(sentence_text, index, words, terms)
            })
            .collect()
    }
}

/// Collapse every whitespace run to a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut after `.`, `!` or `?` (plus closing quotes or brackets) when a space
/// follows, whatever the case of the next word
///
/// `text` must already have its whitespace collapsed.
fn split_at_terminals(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !matches!(next, '.' | '!' | '?' | '"' | '\'' | ')' | ']' | '”' | '’') {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }
        if matches!(chars.peek(), Some(&(_, ' '))) {
            pieces.push(text[start..end].to_string());
            start = end + 1;
        }
    }
    if start < text.len() {
        pieces.push(text[start..].to_string());
    }
    pieces
}

/// Join each piece ending in an abbreviation with the piece after it
fn merge_abbreviations(pieces: impl Iterator<Item = String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    let mut glue = false;
    for piece in pieces {
        match merged.last_mut() {
            Some(open) if glue => {
                open.push(' ');
                open.push_str(&piece);
            }
            _ => merged.push(piece),
        }
        glue = merged.last().is_some_and(|s| ends_with_abbreviation(s));
    }
    merged
}

fn push_clauses(sentence: &str, out: &mut Vec<String>) {
    let clauses: Vec<&str> = sentence.split(", ").collect();
    let last = clauses.len() - 1;
    for (i, clause) in clauses.into_iter().enumerate() {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }
        if i < last && !clause.ends_with(['.', '!', '?']) {
            out.push(format!("{clause}."));
        } else {
            out.push(clause.to_string());
        }
    }
}
