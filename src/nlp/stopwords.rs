//! Stopword filtering
//!
//! Lists come from the `stop-words` crate. The English list is built on
//! first use and shared read-only by every pipeline in the process.

use rustc_hash::FxHashSet;
use std::sync::{Arc, LazyLock};
use stop_words::LANGUAGE;

static ENGLISH: LazyLock<Arc<StopwordFilter>> =
    LazyLock::new(|| Arc::new(StopwordFilter::load(LANGUAGE::English)));

/// Case-insensitive stopword set
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Lowercased entries
    words: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Built-in list for an ISO 639-1 code or English language name
    ///
    /// Codes without a bundled list get the English one.
    pub fn new(language: &str) -> Self {
        Self::load(resolve_language(language))
    }

    pub fn english() -> &'static StopwordFilter {
        &ENGLISH
    }

    /// Like [`new`](Self::new), but English hands out the process-wide list
    pub fn shared(language: &str) -> Arc<StopwordFilter> {
        match resolve_language(language) {
            LANGUAGE::English => Arc::clone(&ENGLISH),
            other => Arc::new(Self::load(other)),
        }
    }

    /// Filter that keeps every word
    pub fn empty() -> Self {
        Self::from_words(std::iter::empty::<&str>())
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self::from_words(words.iter().copied())
    }

    /// Built-in list for `language` plus caller-supplied words
    pub fn with_additional(language: &str, extra: &[String]) -> Self {
        let mut filter = Self::new(language);
        filter.words.extend(extra.iter().map(|w| w.to_lowercase()));
        filter
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        // Lowercase only when the fast path could have missed
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    /// Content words of `words`, in their original order
    pub fn filter_terms(&self, words: &[String]) -> Vec<String> {
        words
            .iter()
            .filter(|w| !self.is_stopword(w))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn load(language: LANGUAGE) -> Self {
        Self::from_words(stop_words::get(language))
    }

    fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }
}

fn resolve_language(code: &str) -> LANGUAGE {
    let code = code.trim().to_ascii_lowercase();
    match code.as_str() {
        "da" | "danish" => LANGUAGE::Danish,
        "de" | "german" => LANGUAGE::German,
        "es" | "spanish" => LANGUAGE::Spanish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "fr" | "french" => LANGUAGE::French,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        "it" | "italian" => LANGUAGE::Italian,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "pl" | "polish" => LANGUAGE::Polish,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "tr" | "turkish" => LANGUAGE::Turkish,
        _ => LANGUAGE::English,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list_is_case_insensitive() {
        let filter = StopwordFilter::new("en");
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("WHICH"));
        assert!(!filter.is_stopword("compiler"));
        assert!(!filter.is_stopword("Glacier"));
    }

    #[test]
    fn test_english_is_built_once() {
        let first = StopwordFilter::english();
        assert!(std::ptr::eq(first, StopwordFilter::english()));
        assert!(std::ptr::eq(StopwordFilter::shared("EN").as_ref(), first));
        assert!(std::ptr::eq(StopwordFilter::shared("english").as_ref(), first));
    }

    #[test]
    fn test_other_languages() {
        assert!(StopwordFilter::shared("de").is_stopword("und"));
        assert!(StopwordFilter::new("french").is_stopword("les"));
        assert!(StopwordFilter::new("xx").is_stopword("the"));
    }

    #[test]
    fn test_custom_lists() {
        let filter = StopwordFilter::from_list(&["Um", "uh"]);
        assert!(filter.is_stopword("um"));
        assert!(filter.is_stopword("UH"));
        assert!(!filter.is_stopword("the"));
        assert_eq!(filter.len(), 2);

        let filter = StopwordFilter::with_additional("en", &["Basically".to_string()]);
        assert!(filter.is_stopword("basically"));
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_filter_terms_keeps_order_and_repeats() {
        let filter = StopwordFilter::from_list(&["the", "over"]);
        let words: Vec<String> = "the glacier moved over the glacier bed"
            .split(' ')
            .map(String::from)
            .collect();
        assert_eq!(
            filter.filter_terms(&words),
            vec!["glacier", "moved", "glacier", "bed"]
        );
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }
}
