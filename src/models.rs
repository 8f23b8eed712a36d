//! Data models for collected headlines and their analysis results.
//!
//! This module defines the core data structures used throughout the application:
//! - [`NewsItem`]: A raw headline record as collected from a news source
//! - [`ExportRecord`]: The storage-facing join of a raw headline and its processed form
//! - [`CorpusStatistics`]: Derived corpus-level metrics computed per analysis run
//! - [`AnalysisReport`]: The full JSON document written by the JSON backend
//!
//! All exported shapes derive `Serialize` so the storage backends can write
//! them without intermediate conversion.

use serde::{Deserialize, Serialize};

/// A raw headline record as collected from a news source.
///
/// Collectors produce these in page order. The `collected_at` timestamp is
/// stamped once per scrape run, in RFC 3339 local time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsItem {
    /// The headline text, untouched.
    pub title: String,
    /// Absolute URL of the story.
    pub link: String,
    /// Human-readable source name (e.g. "Hacker News").
    pub source: String,
    /// RFC 3339 timestamp of when the record was collected.
    pub collected_at: String,
}

/// A headline joined with its processed (normalized, stopword-free) form.
///
/// `processed_title` is the empty string when the pipeline dropped the
/// title entirely (e.g. it consisted only of stopwords). Empty processed
/// titles are persisted as-is so the raw record is never lost, but they
/// never participate in frequency analysis.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportRecord {
    pub title: String,
    pub processed_title: String,
    pub link: String,
    pub source: String,
    pub collected_at: String,
}

/// A single (word, frequency) row as written by the CSV and JSON backends.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrequencyRow {
    pub word: String,
    pub frequency: usize,
}

/// Corpus-level statistics computed once per analysis run.
///
/// These are read-only snapshots; both ratio fields are guarded to `0.0`
/// when their denominator is zero.
///
/// # Invariants
///
/// - `0.0 <= vocabulary_richness <= 1.0`
/// - `vocabulary_richness == 0.0` iff `total_words == 0`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CorpusStatistics {
    /// Number of input texts, including texts that tokenized to nothing.
    pub total_texts: usize,
    /// Total token count across all texts.
    pub total_words: usize,
    /// Number of distinct tokens across all texts.
    pub unique_words: usize,
    /// `total_words / total_texts`, or `0.0` for an empty corpus.
    pub avg_words_per_text: f64,
    /// `unique_words / total_words`, or `0.0` when there are no words.
    pub vocabulary_richness: f64,
}

/// Metadata block of an [`AnalysisReport`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportMetadata {
    /// Human-readable source name.
    pub source: String,
    /// RFC 3339 timestamp of when the report was produced.
    pub collected_at: String,
    /// Number of headline records in the report.
    pub total_news: usize,
    pub statistics: CorpusStatistics,
}

/// The full analysis document written by the JSON storage backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub news: Vec<ExportRecord>,
    pub word_frequency: Vec<FrequencyRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_item_creation() {
        let item = NewsItem {
            title: "Markets rally on jobs report".to_string(),
            link: "https://example.com/story".to_string(),
            source: "Hacker News".to_string(),
            collected_at: "2026-08-07T09:00:00-03:00".to_string(),
        };
        assert_eq!(item.source, "Hacker News");
        assert_eq!(item.link, "https://example.com/story");
    }

    #[test]
    fn test_export_record_serialization() {
        let record = ExportRecord {
            title: "Breaking News: Markets Crash Today!".to_string(),
            processed_title: "breaking news markets crash today".to_string(),
            link: "https://example.com/a".to_string(),
            source: "BBC News".to_string(),
            collected_at: "2026-08-07T09:00:00-03:00".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("processed_title"));
        assert!(json.contains("breaking news markets crash today"));
    }

    #[test]
    fn test_analysis_report_round_trip() {
        let report = AnalysisReport {
            metadata: ReportMetadata {
                source: "G1".to_string(),
                collected_at: "2026-08-07T09:00:00-03:00".to_string(),
                total_news: 1,
                statistics: CorpusStatistics {
                    total_texts: 1,
                    total_words: 3,
                    unique_words: 3,
                    avg_words_per_text: 3.0,
                    vocabulary_richness: 1.0,
                },
            },
            news: vec![],
            word_frequency: vec![FrequencyRow {
                word: "markets".to_string(),
                frequency: 2,
            }],
        };

        let json = serde_json::to_string_pretty(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.metadata.total_news, 1);
        assert_eq!(parsed.word_frequency[0].word, "markets");
        assert_eq!(parsed.metadata.statistics.unique_words, 3);
    }
}
