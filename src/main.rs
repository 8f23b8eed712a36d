//! # Headline Miner
//!
//! A news collection and analysis pipeline that scrapes headlines from
//! several news sites, normalizes and tokenizes the text, computes
//! word-frequency statistics, and persists the results in several formats.
//!
//! ## Features
//!
//! - Collects headlines from Hacker News, BBC News, G1, and Folha de S.Paulo
//! - Normalizes titles (URLs, mentions, hashtags, digits, punctuation out)
//! - Filters language-specific stopwords (English and Portuguese)
//! - Ranks word frequency with reproducible first-occurrence tie-breaking
//! - Writes SQLite, CSV, and JSON outputs
//!
//! ## Usage
//!
//! ```sh
//! headline_miner --source hackernews --storage all
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Collection**: Fetch the source homepage and extract headline records
//! 2. **Processing**: Normalize each title and remove stopwords
//! 3. **Analysis**: Compute the ranked frequency table and corpus statistics
//! 4. **Persistence**: Write the selected storage backends and print a report

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod fetch;
mod models;
mod report;
mod scrapers;
mod storage;
mod text;
mod utils;

use cli::Cli;
use models::ExportRecord;
use storage::AnalysisOutput;
use text::{SegmentMode, TextProcessor};
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("headline_miner starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.source, ?args.storage, ?args.data_dir, "Parsed CLI arguments");

    // ---- Load configuration ----
    let mut app_config = config::load(args.config.as_deref())?;
    if let Some(limit) = args.limit {
        app_config.scraping.max_items = limit;
    }
    let top_n = args.top_n.unwrap_or(app_config.text.top_words);

    // Early check: ensure the data dir is writable
    if let Err(e) = ensure_writable_dir(&args.data_dir).await {
        error!(
            path = %args.data_dir,
            error = %e,
            "Data directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Query mode: show stored headlines and exit ----
    if let Some(limit) = args.recent {
        let db_path = std::path::Path::new(&args.data_dir).join(&app_config.storage.db_name);
        let store = storage::sqlite::SqliteStore::open(&db_path)?;
        report::print_recent(&store.recent_news(limit)?, &store.summary()?);
        return Ok(());
    }

    // ---- Collect headlines ----
    info!(source = args.source.label(), "Starting headline collection");
    let items = scrapers::collect(args.source, &app_config.scraping).await?;
    if items.is_empty() {
        warn!(
            source = args.source.label(),
            "No headlines collected; nothing to analyze"
        );
        return Ok(());
    }

    // ---- Process titles ----
    let language = args
        .language
        .clone()
        .unwrap_or_else(|| args.source.language().to_string());
    let mode = if args.whitespace_tokenizer {
        SegmentMode::Whitespace
    } else {
        SegmentMode::UnicodeWords
    };
    let processor = TextProcessor::new(&language, &app_config, mode);

    let records: Vec<ExportRecord> = items
        .iter()
        .map(|item| ExportRecord {
            title: item.title.clone(),
            processed_title: processor.process_title(&item.title).unwrap_or_default(),
            link: item.link.clone(),
            source: item.source.clone(),
            collected_at: item.collected_at.clone(),
        })
        .collect();

    let processed: Vec<String> = records
        .iter()
        .filter(|record| !record.processed_title.is_empty())
        .map(|record| record.processed_title.clone())
        .collect();
    info!(
        processed = processed.len(),
        dropped = items.len() - processed.len(),
        "Processed titles"
    );

    // ---- Analyze ----
    let statistics = processor.statistics(&processed);
    let frequency = processor.word_frequency(&processed, top_n);
    info!(
        total_words = statistics.total_words,
        unique_words = statistics.unique_words,
        top_n,
        "Frequency analysis complete"
    );

    // ---- Persist ----
    let output = AnalysisOutput {
        source_label: args.source.label(),
        source_slug: args.source.slug(),
        records: &records,
        frequency: &frequency,
        statistics: &statistics,
    };
    let files_saved = storage::persist(
        args.storage,
        &args.data_dir,
        &app_config.storage.db_name,
        &output,
    )
    .await;

    // ---- Report ----
    report::print_report(
        args.source.label(),
        items.len(),
        &statistics,
        &frequency,
        files_saved,
        start_time.elapsed(),
    );

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
