//! Persistence backends for analysis results.
//!
//! Three backends consume the same [`AnalysisOutput`]:
//!
//! - [`sqlite`]: relational tables (`raw_news`, `processed_news`,
//!   `word_frequency`) in a database file under the data directory
//! - [`csv`]: a news export plus a separate word-frequency file
//! - [`json`]: one [`AnalysisReport`] document with metadata, records,
//!   and the frequency table
//!
//! A failing backend is logged and skipped; the others still run. File
//! names carry the source slug and a `%Y%m%d_%H%M%S` timestamp.

pub mod csv;
pub mod json;
pub mod sqlite;

use chrono::Local;
use clap::ValueEnum;
use std::path::Path;
use tracing::{error, info};

use crate::models::{AnalysisReport, CorpusStatistics, ExportRecord, FrequencyRow, ReportMetadata};

/// Storage format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageKind {
    Sqlite,
    Csv,
    Json,
    /// Every backend.
    All,
}

impl StorageKind {
    fn wants(&self, kind: StorageKind) -> bool {
        *self == StorageKind::All || *self == kind
    }
}

/// Everything a backend needs to persist one analysis run.
#[derive(Debug)]
pub struct AnalysisOutput<'a> {
    /// Human-readable source name (goes into report metadata).
    pub source_label: &'a str,
    /// Short source name (goes into filenames).
    pub source_slug: &'a str,
    pub records: &'a [ExportRecord],
    pub frequency: &'a [(String, usize)],
    pub statistics: &'a CorpusStatistics,
}

impl AnalysisOutput<'_> {
    /// The frequency table as serializable rows.
    pub fn frequency_rows(&self) -> Vec<FrequencyRow> {
        self.frequency
            .iter()
            .map(|(word, frequency)| FrequencyRow {
                word: word.clone(),
                frequency: *frequency,
            })
            .collect()
    }

    /// Assemble the full JSON analysis document.
    pub fn to_report(&self) -> AnalysisReport {
        AnalysisReport {
            metadata: ReportMetadata {
                source: self.source_label.to_string(),
                collected_at: Local::now().to_rfc3339(),
                total_news: self.records.len(),
                statistics: self.statistics.clone(),
            },
            news: self.records.to_vec(),
            word_frequency: self.frequency_rows(),
        }
    }
}

/// Persist one analysis run to the selected backend(s).
///
/// Returns the number of files written. Backend failures are logged and do
/// not abort the remaining backends.
pub async fn persist(
    kind: StorageKind,
    data_dir: &str,
    db_name: &str,
    output: &AnalysisOutput<'_>,
) -> usize {
    let data_dir = Path::new(data_dir);
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let mut files_written = 0usize;

    if kind.wants(StorageKind::Sqlite) {
        match persist_sqlite(&data_dir.join(db_name), output) {
            Ok(()) => files_written += 1,
            Err(e) => error!(error = %e, "SQLite persistence failed"),
        }
    }

    if kind.wants(StorageKind::Csv) {
        let news_path = data_dir.join(format!("news_{}_{}.csv", output.source_slug, timestamp));
        match csv::save_news(output.records, &news_path) {
            Ok(true) => files_written += 1,
            Ok(false) => {}
            Err(e) => error!(error = %e, "CSV news export failed"),
        }

        let freq_path = data_dir.join(format!("word_frequency_{timestamp}.csv"));
        match csv::save_frequency(&output.frequency_rows(), &freq_path) {
            Ok(true) => files_written += 1,
            Ok(false) => {}
            Err(e) => error!(error = %e, "CSV frequency export failed"),
        }
    }

    if kind.wants(StorageKind::Json) {
        let json_path = data_dir.join(format!("news_analysis_{timestamp}.json"));
        match json::write_report(&output.to_report(), &json_path).await {
            Ok(()) => files_written += 1,
            Err(e) => error!(error = %e, "JSON report failed"),
        }
    }

    info!(files_written, "Persistence complete");
    files_written
}

fn persist_sqlite(
    db_path: &Path,
    output: &AnalysisOutput<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = sqlite::SqliteStore::open(db_path)?;
    let inserted = store.save_raw_news(output.records)?;
    store.save_processed_news(output.records)?;
    store.save_word_frequency(output.frequency)?;
    info!(
        inserted,
        words = output.frequency.len(),
        db = %db_path.display(),
        "Saved analysis to SQLite"
    );
    Ok(())
}
