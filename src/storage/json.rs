//! JSON persistence.
//!
//! Writes the full [`AnalysisReport`] (metadata, records, frequency table)
//! as pretty-printed JSON, the shape API consumers read back.

use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

use crate::models::AnalysisReport;

/// Serialize `report` and write it to `path`.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_report(report: &AnalysisReport, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).await?;
    info!(
        news = report.news.len(),
        words = report.word_frequency.len(),
        "Wrote JSON analysis report"
    );
    Ok(())
}
