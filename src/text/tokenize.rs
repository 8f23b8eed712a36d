//! Word tokenization with a length floor.
//!
//! The primary path splits on Unicode word boundaries
//! (`unicode-segmentation`); the fallback path splits on plain whitespace.
//! The two paths can legitimately disagree on texts with contractions or
//! punctuation-glued words — both are accepted behaviors, and the fallback
//! is a documented degradation, not an error.

use tracing::warn;
use unicode_segmentation::UnicodeSegmentation;

/// How input text is split into candidate tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentMode {
    /// Unicode word-boundary segmentation (UAX #29).
    #[default]
    UnicodeWords,
    /// Plain whitespace splitting; coarser, kept as a degraded mode.
    Whitespace,
}

/// Splits text into lowercase word tokens, discarding short ones.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    min_word_length: usize,
    mode: SegmentMode,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Tokenizer {
    /// Tokenizer on the Unicode-words path keeping tokens of at least
    /// `min_word_length` characters.
    pub fn new(min_word_length: usize) -> Self {
        Self::with_mode(min_word_length, SegmentMode::UnicodeWords)
    }

    pub fn with_mode(min_word_length: usize, mode: SegmentMode) -> Self {
        if mode == SegmentMode::Whitespace {
            warn!("Whitespace tokenization enabled; word boundaries will be coarser");
        }
        Self {
            min_word_length,
            mode,
        }
    }

    /// Lowercase and split `text`, keeping tokens whose character count is
    /// at least the configured minimum. Deterministic for a given mode.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        match self.mode {
            SegmentMode::UnicodeWords => lowered
                .unicode_words()
                .filter(|w| w.chars().count() >= self.min_word_length)
                .map(str::to_string)
                .collect(),
            SegmentMode::Whitespace => lowered
                .split_whitespace()
                .filter(|w| w.chars().count() >= self.min_word_length)
                .map(str::to_string)
                .collect(),
        }
    }
}
