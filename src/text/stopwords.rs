//! Language-specific stopword sets and filtering.
//!
//! A [`StopwordSet`] is the union of a base dictionary list (from the
//! `stop-words` crate) and a custom extension list from configuration. It is
//! immutable once constructed. An unsupported language tag falls back to
//! English with a warning; the resolved language stays visible to callers.

use std::collections::HashSet;
use stop_words::{LANGUAGE, get};
use tracing::warn;

/// An immutable set of lowercase noise words for one language.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
    language: &'static str,
    fell_back: bool,
}

impl StopwordSet {
    /// Build the set for a language tag, extended with `extra` words.
    ///
    /// Supported tags: `"english"`/`"en"`, `"portuguese"`/`"pt"`. Anything
    /// else resolves to English and logs a warning; [`Self::fell_back`]
    /// reports that the fallback was taken.
    pub fn for_language(tag: &str, extra: &[String]) -> Self {
        let (resolved, fell_back) = Self::lookup(tag);
        if fell_back {
            warn!(
                requested = %tag,
                fallback = resolved,
                "No stopword list for requested language; using english"
            );
        }

        let base = match resolved {
            "portuguese" => get(LANGUAGE::Portuguese),
            _ => get(LANGUAGE::English),
        };

        let mut words: HashSet<String> = base.into_iter().map(|w| w.to_lowercase()).collect();
        words.extend(extra.iter().map(|w| w.to_lowercase()));

        Self {
            words,
            language: resolved,
            fell_back,
        }
    }

    /// Build a set from an explicit word list. The resolved language is
    /// reported as `"custom"`.
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
            language: "custom",
            fell_back: false,
        }
    }

    /// Map a language tag to its canonical supported name, without
    /// constructing anything. Unknown tags map to `"english"`.
    pub fn resolve_language(tag: &str) -> &'static str {
        Self::lookup(tag).0
    }

    fn lookup(tag: &str) -> (&'static str, bool) {
        match tag.to_ascii_lowercase().as_str() {
            "english" | "en" => ("english", false),
            "portuguese" | "pt" => ("portuguese", false),
            _ => ("english", true),
        }
    }

    /// The language this set was actually built for.
    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Whether the English fallback was applied for an unknown tag.
    pub fn fell_back(&self) -> bool {
        self.fell_back
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Remove every stopword from a whitespace-separated text.
    ///
    /// Pure function: splits on whitespace, keeps words whose lowercase form
    /// is not in the set, rejoins with single spaces. Returns the empty
    /// string when every word was filtered out; callers must treat that as
    /// "no content", not as a valid document.
    pub fn filter(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_base_list_is_loaded() {
        let set = StopwordSet::for_language("english", &[]);
        assert_eq!(set.language(), "english");
        assert!(!set.fell_back());
        assert!(set.contains("the"));
        assert!(set.contains("to"));
        assert!(!set.is_empty());
    }

    #[test]
    fn test_portuguese_base_list_is_loaded() {
        let set = StopwordSet::for_language("portuguese", &[]);
        assert_eq!(set.language(), "portuguese");
        assert!(set.contains("de"));
        assert!(set.contains("para"));
    }

    #[test]
    fn test_short_tags_resolve() {
        assert_eq!(StopwordSet::for_language("en", &[]).language(), "english");
        let pt = StopwordSet::for_language("pt", &[]);
        assert_eq!(pt.language(), "portuguese");
        assert!(!pt.fell_back());
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let set = StopwordSet::for_language("klingon", &[]);
        assert_eq!(set.language(), "english");
        assert!(set.fell_back());
        assert!(set.contains("the"));
    }

    #[test]
    fn test_custom_extension_words() {
        let extra = vec!["breaking".to_string(), "LIVE".to_string()];
        let set = StopwordSet::for_language("english", &extra);
        assert!(set.contains("breaking"));
        assert!(set.contains("live"));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let set = StopwordSet::from_words(&["to", "the"]);
        assert_eq!(set.filter("Markets react TO The crash"), "Markets react crash");
    }

    #[test]
    fn test_filter_all_stopwords_yields_empty() {
        let set = StopwordSet::from_words(&["the", "a", "of"]);
        assert_eq!(set.filter("The a of"), "");
    }

    #[test]
    fn test_filter_rejoins_with_single_spaces() {
        let set = StopwordSet::from_words(&["of"]);
        assert_eq!(set.filter("cost  of   living"), "cost living");
    }

    #[test]
    fn test_stopword_exclusion_property() {
        let set = StopwordSet::for_language("english", &[]);
        let filtered = set.filter("the quick brown fox jumps over the lazy dog");
        for word in filtered.split_whitespace() {
            assert!(!set.contains(word), "{word} survived filtering");
        }
    }
}
