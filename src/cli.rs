//! Command-line interface definitions for Headline Miner.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

use crate::scrapers::Source;
use crate::storage::StorageKind;

/// Command-line arguments for the Headline Miner application.
///
/// # Examples
///
/// ```sh
/// # Default run: Hacker News, every storage backend
/// headline_miner
///
/// # Scrape G1 and save only to SQLite
/// headline_miner --source g1 --storage sqlite
///
/// # Smaller run with a custom config file
/// headline_miner --source bbc --limit 10 -c config.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News source to scrape
    #[arg(short, long, value_enum, default_value = "hackernews")]
    pub source: Source,

    /// Storage format for the results
    #[arg(long, value_enum, default_value = "all")]
    pub storage: StorageKind,

    /// Directory where data files and the database are written
    #[arg(short, long, default_value = "data")]
    pub data_dir: String,

    /// Optional path to a YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the stopword language inferred from the source
    #[arg(short, long)]
    pub language: Option<String>,

    /// Number of words in the frequency table (default from config)
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Cap on collected headlines for this run
    #[arg(long)]
    pub limit: Option<usize>,

    /// Show the N most recently stored headlines and exit (no scraping)
    #[arg(long, value_name = "N")]
    pub recent: Option<usize>,

    /// Use plain whitespace tokenization instead of Unicode word boundaries
    #[arg(long)]
    pub whitespace_tokenizer: bool,
}
