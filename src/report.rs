//! Final console report.
//!
//! Printed once at the end of a run: processing statistics and the top
//! words with proportional bars. This is presentation only; everything it
//! shows is already persisted by the storage backends.

use std::time::Duration;

use crate::models::{CorpusStatistics, NewsItem};
use crate::storage::sqlite::StoreSummary;

const BAR_WIDTH: usize = 20;
const TOP_WORDS_SHOWN: usize = 10;

/// Print the end-of-run summary to stdout.
pub fn print_report(
    source_label: &str,
    news_count: usize,
    statistics: &CorpusStatistics,
    frequency: &[(String, usize)],
    files_saved: usize,
    elapsed: Duration,
) {
    println!();
    println!("Processing statistics — {source_label}");
    println!("  news collected      {news_count}");
    println!("  total words         {}", statistics.total_words);
    println!("  unique words        {}", statistics.unique_words);
    println!("  avg words/title     {:.2}", statistics.avg_words_per_text);
    println!("  vocabulary richness {:.3}", statistics.vocabulary_richness);
    println!();

    if !frequency.is_empty() {
        println!("Top {} words", frequency.len().min(TOP_WORDS_SHOWN));
        let max_count = frequency[0].1.max(1);
        for (rank, (word, count)) in frequency.iter().take(TOP_WORDS_SHOWN).enumerate() {
            println!(
                "  {:>2}. {:<20} {:>5}  {}",
                rank + 1,
                word,
                count,
                frequency_bar(*count, max_count)
            );
        }
        println!();
    }

    println!("Saved {} file(s) in {:.2}s", files_saved, elapsed.as_secs_f64());
}

/// Print stored headlines for the `--recent` query mode.
pub fn print_recent(items: &[NewsItem], summary: &StoreSummary) {
    println!();
    if items.is_empty() {
        println!("No stored headlines yet.");
    } else {
        println!("Most recent stored headlines");
        for item in items {
            println!("  [{}] {} — {}", item.source, item.title, item.link);
        }
    }
    println!();
    println!(
        "Database totals: {} headline(s), {} distinct analyzed word(s)",
        summary.total_news, summary.distinct_words
    );
    for (source, count) in &summary.news_by_source {
        println!("  {source}: {count}");
    }
}

/// A fixed-width bar proportional to `count / max_count`.
fn frequency_bar(count: usize, max_count: usize) -> String {
    let filled = (count * BAR_WIDTH) / max_count;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_is_full_at_max() {
        assert_eq!(frequency_bar(10, 10), "█".repeat(20));
    }

    #[test]
    fn test_bar_is_proportional() {
        let bar = frequency_bar(5, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(bar.chars().count(), 20);
    }

    #[test]
    fn test_bar_handles_zero_count() {
        assert_eq!(frequency_bar(0, 10), "░".repeat(20));
    }
}
