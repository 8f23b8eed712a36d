//! The text-processing core: normalization, stopword filtering,
//! tokenization, and frequency analysis.
//!
//! Everything in this module is a deterministic, single-pass, in-memory
//! transform: no I/O, no shared mutable state. The [`TextProcessor`] facade
//! owns an immutable [`StopwordSet`] and a [`Tokenizer`] and exposes the
//! three operations the pipeline needs:
//!
//! - [`TextProcessor::process_titles`]: normalize + filter each title,
//!   dropping titles that end up empty
//! - [`TextProcessor::word_frequency`]: ranked frequency table
//! - [`TextProcessor::statistics`]: corpus-level metrics
//!
//! The frequency table and the statistics use the same tokenizer, so their
//! token totals always agree for the same corpus.

pub mod frequency;
pub mod normalize;
pub mod stopwords;
pub mod tokenize;

pub use frequency::FrequencyTable;
pub use tokenize::SegmentMode;

use tracing::info;

use crate::config::AppConfig;
use crate::models::CorpusStatistics;
use stopwords::StopwordSet;
use tokenize::Tokenizer;

/// Facade over the normalization → filter → tokenize → count pipeline.
#[derive(Debug, Clone)]
pub struct TextProcessor {
    stopwords: StopwordSet,
    tokenizer: Tokenizer,
}

impl TextProcessor {
    /// Build a processor for a language tag, with the custom stopwords and
    /// tokenizer settings from `config`. An unknown tag resolves to English
    /// (with a warning from the stopword layer).
    pub fn new(language: &str, config: &AppConfig, mode: SegmentMode) -> Self {
        let resolved = StopwordSet::resolve_language(language);
        let extra = config
            .custom_stopwords
            .get(resolved)
            .map(|words| words.as_slice())
            .unwrap_or(&[]);
        let stopwords = StopwordSet::for_language(language, extra);
        let tokenizer = Tokenizer::with_mode(config.text.min_word_length, mode);

        info!(
            language = stopwords.language(),
            stopword_count = stopwords.len(),
            ?mode,
            "Text processor initialized"
        );
        Self {
            stopwords,
            tokenizer,
        }
    }

    /// Processor over an explicit stopword list, mainly for tests and
    /// embedding callers that manage their own word lists.
    pub fn with_stopwords(stopwords: StopwordSet, tokenizer: Tokenizer) -> Self {
        Self {
            stopwords,
            tokenizer,
        }
    }

    /// The language the stopword set was actually built for.
    pub fn language(&self) -> &'static str {
        self.stopwords.language()
    }

    /// Normalize and stopword-filter a single title. Returns `None` when
    /// nothing survives, so callers keep raw/processed alignment explicit.
    pub fn process_title(&self, title: &str) -> Option<String> {
        let cleaned = normalize::normalize(title);
        let filtered = self.stopwords.filter(&cleaned);
        (!filtered.is_empty()).then_some(filtered)
    }

    /// Process a batch of titles in input order, dropping empties. The
    /// output length may be shorter than the input; callers needing
    /// index alignment should use [`Self::process_title`] per item.
    pub fn process_titles(&self, titles: &[String]) -> Vec<String> {
        titles
            .iter()
            .filter_map(|title| self.process_title(title))
            .collect()
    }

    /// Ranked frequency table over already-processed titles.
    pub fn word_frequency(&self, texts: &[String], top_n: usize) -> FrequencyTable {
        frequency::word_frequency(&self.tokenizer, texts, top_n)
    }

    /// Corpus statistics over already-processed titles.
    pub fn statistics(&self, texts: &[String]) -> CorpusStatistics {
        frequency::statistics(&self.tokenizer, texts)
    }
}
