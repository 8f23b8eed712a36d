//! CSV persistence.
//!
//! Two files per run: the news export (raw + processed titles) and a
//! separate word-frequency table. Empty inputs are skipped without
//! creating a file.

use csv::Writer;
use std::error::Error;
use std::path::Path;
use tracing::{info, warn};

use crate::models::{ExportRecord, FrequencyRow};

/// Write the news export. Returns whether a file was created.
pub fn save_news(records: &[ExportRecord], path: &Path) -> Result<bool, Box<dyn Error>> {
    if records.is_empty() {
        warn!("No news records to save; skipping CSV export");
        return Ok(false);
    }

    let mut writer = Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!(rows = records.len(), path = %path.display(), "Wrote news CSV");
    Ok(true)
}

/// Write the word-frequency table. Returns whether a file was created.
pub fn save_frequency(rows: &[FrequencyRow], path: &Path) -> Result<bool, Box<dyn Error>> {
    if rows.is_empty() {
        warn!("No frequency rows to save; skipping CSV export");
        return Ok(false);
    }

    let mut writer = Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!(rows = rows.len(), path = %path.display(), "Wrote word frequency CSV");
    Ok(true)
}
