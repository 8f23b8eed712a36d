//! Headline collectors for the supported news sources.
//!
//! Each source module exposes a single `extract(html)` function that pulls
//! `(title, link)` pairs out of a homepage document. The shared [`collect`]
//! entry point fetches the page through the retrying HTTP client, runs the
//! source's extractor, deduplicates by link, caps the result, and stamps
//! every record with the collection timestamp.
//!
//! # Supported Sources
//!
//! | Source | Module | Language | Notes |
//! |--------|--------|----------|-------|
//! | Hacker News | [`hackernews`] | english | `tr.athing` story rows |
//! | BBC News | [`bbcnews`] | english | headline pass + article fallback |
//! | G1 | [`g1`] | portuguese | selector chain + generic fallback |
//! | Folha de S.Paulo | [`folha`] | portuguese | headline selector chain |
//!
//! Extraction failures on individual elements are skipped; only a failed
//! homepage fetch aborts a source.

pub mod bbcnews;
pub mod folha;
pub mod g1;
pub mod hackernews;

use chrono::Local;
use clap::ValueEnum;
use itertools::Itertools;
use std::error::Error;
use tracing::{debug, info, instrument};

use crate::config::ScrapingConfig;
use crate::fetch::fetch_with_backoff;
use crate::models::NewsItem;
use crate::utils::truncate_for_log;

/// The news sources the pipeline can collect from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Source {
    Hackernews,
    Bbc,
    G1,
    Folha,
}

impl Source {
    /// Human-readable name, used in records and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Source::Hackernews => "Hacker News",
            Source::Bbc => "BBC News",
            Source::G1 => "G1",
            Source::Folha => "Folha de S.Paulo",
        }
    }

    /// Short name used in output filenames.
    pub fn slug(&self) -> &'static str {
        match self {
            Source::Hackernews => "hackernews",
            Source::Bbc => "bbc",
            Source::G1 => "g1",
            Source::Folha => "folha",
        }
    }

    /// Homepage URL the collector scrapes.
    pub fn homepage(&self) -> &'static str {
        match self {
            Source::Hackernews => "https://news.ycombinator.com",
            Source::Bbc => "https://www.bbc.com/news",
            Source::G1 => "https://g1.globo.com",
            Source::Folha => "https://www.folha.uol.com.br",
        }
    }

    /// Default stopword language for headlines from this source.
    pub fn language(&self) -> &'static str {
        match self {
            Source::Hackernews | Source::Bbc => "english",
            Source::G1 | Source::Folha => "portuguese",
        }
    }
}

/// Collect headline records from a source.
///
/// Fetches the homepage through the retrying client, extracts headlines
/// with the source-specific extractor, deduplicates by link preserving
/// first-seen order, keeps at most `config.max_items` records, and stamps
/// each with the current local time.
#[instrument(level = "info", skip_all, fields(source = source.label()))]
pub async fn collect(
    source: Source,
    config: &ScrapingConfig,
) -> Result<Vec<NewsItem>, Box<dyn Error>> {
    let html = fetch_with_backoff(config, source.homepage()).await?;

    let headlines = match source {
        Source::Hackernews => hackernews::extract(&html),
        Source::Bbc => bbcnews::extract(&html),
        Source::G1 => g1::extract(&html),
        Source::Folha => folha::extract(&html),
    };
    debug!(raw_count = headlines.len(), "Extracted headline candidates");

    let collected_at = Local::now().to_rfc3339();
    let items: Vec<NewsItem> = headlines
        .into_iter()
        .unique_by(|(_, link)| link.clone())
        .take(config.max_items)
        .map(|(title, link)| NewsItem {
            title,
            link,
            source: source.label().to_string(),
            collected_at: collected_at.clone(),
        })
        .collect();

    for item in &items {
        debug!(title = %truncate_for_log(&item.title, 80), link = %item.link, "Headline");
    }
    info!(count = items.len(), "Collected headlines");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_metadata() {
        assert_eq!(Source::Hackernews.language(), "english");
        assert_eq!(Source::G1.language(), "portuguese");
        assert_eq!(Source::Folha.label(), "Folha de S.Paulo");
        assert_eq!(Source::Bbc.slug(), "bbc");
        assert!(Source::G1.homepage().starts_with("https://"));
    }
}
