//! Word-frequency aggregation and corpus statistics.
//!
//! Counting is insertion-order aware: the first occurrence position of every
//! distinct token is tracked explicitly, so that tokens with equal counts
//! rank in first-encountered order. A plain hash map alone would not give a
//! reproducible ranking, and "top-N" reports must be reproducible.

use std::collections::{HashMap, HashSet, hash_map::Entry};

use crate::models::CorpusStatistics;

use super::tokenize::Tokenizer;

/// Ranked (word, count) pairs, count-descending, ties by first occurrence.
pub type FrequencyTable = Vec<(String, usize)>;

/// Rank the `top_n` most frequent tokens across `texts`.
///
/// Texts are tokenized in input order into one flat token sequence. Among
/// tokens with equal counts, the one whose first occurrence came earlier in
/// that sequence ranks higher. `top_n == 0` yields an empty table; a `top_n`
/// beyond the number of distinct tokens yields the full ranked list.
pub fn word_frequency(tokenizer: &Tokenizer, texts: &[String], top_n: usize) -> FrequencyTable {
    let mut counts: HashMap<String, usize> = HashMap::new();
    // distinct tokens in first-occurrence order
    let mut order: Vec<String> = Vec::new();

    for text in texts {
        for token in tokenizer.tokenize(text) {
            match counts.entry(token) {
                Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                Entry::Vacant(entry) => {
                    order.push(entry.key().clone());
                    entry.insert(1);
                }
            }
        }
    }

    let mut ranked: FrequencyTable = order
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            (word, count)
        })
        .collect();
    // stable sort over first-occurrence order settles ties deterministically
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);
    ranked
}

/// Compute corpus statistics over `texts` with the same tokenizer behavior
/// as [`word_frequency`], so total counts agree between the two.
///
/// A text that tokenizes to nothing still counts toward `total_texts`. The
/// ratio fields are `0.0` when their denominator is zero.
pub fn statistics(tokenizer: &Tokenizer, texts: &[String]) -> CorpusStatistics {
    let mut total_words = 0usize;
    let mut unique: HashSet<String> = HashSet::new();

    for text in texts {
        let tokens = tokenizer.tokenize(text);
        total_words += tokens.len();
        unique.extend(tokens);
    }

    let total_texts = texts.len();
    CorpusStatistics {
        total_texts,
        total_words,
        unique_words: unique.len(),
        avg_words_per_text: if total_texts == 0 {
            0.0
        } else {
            total_words as f64 / total_texts as f64
        },
        vocabulary_richness: if total_words == 0 {
            0.0
        } else {
            unique.len() as f64 / total_words as f64
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ranks_by_count_descending() {
        let tokenizer = Tokenizer::default();
        let corpus = texts(&["apples apples pears", "apples pears plums"]);
        let table = word_frequency(&tokenizer, &corpus, 10);
        assert_eq!(
            table,
            vec![
                ("apples".to_string(), 3),
                ("pears".to_string(), 2),
                ("plums".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_ties_break_by_first_occurrence() {
        let tokenizer = Tokenizer::default();
        let corpus = texts(&["breaking news markets crash today", "markets react crash"]);
        let table = word_frequency(&tokenizer, &corpus, 3);
        // markets and crash both count 2; markets appeared first
        assert_eq!(
            table,
            vec![
                ("markets".to_string(), 2),
                ("crash".to_string(), 2),
                ("breaking".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_n_zero_is_empty() {
        let tokenizer = Tokenizer::default();
        let corpus = texts(&["some words here"]);
        assert!(word_frequency(&tokenizer, &corpus, 0).is_empty());
    }

    #[test]
    fn test_top_n_beyond_distinct_returns_all() {
        let tokenizer = Tokenizer::default();
        let corpus = texts(&["alpha beta gamma"]);
        let table = word_frequency(&tokenizer, &corpus, 100);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::default();
        assert!(word_frequency(&tokenizer, &[], 5).is_empty());
        let stats = statistics(&tokenizer, &[]);
        assert_eq!(stats.total_texts, 0);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.unique_words, 0);
        assert_eq!(stats.avg_words_per_text, 0.0);
        assert_eq!(stats.vocabulary_richness, 0.0);
    }

    #[test]
    fn test_statistics_worked_example() {
        let tokenizer = Tokenizer::default();
        let corpus = texts(&["breaking news markets crash today", "markets react crash"]);
        let stats = statistics(&tokenizer, &corpus);
        assert_eq!(stats.total_texts, 2);
        assert_eq!(stats.total_words, 8);
        assert_eq!(stats.unique_words, 6);
        assert_eq!(stats.avg_words_per_text, 4.0);
        assert_eq!(stats.vocabulary_richness, 0.75);
    }

    #[test]
    fn test_zero_token_text_counts_toward_totals_only() {
        let tokenizer = Tokenizer::default();
        let corpus = texts(&["at it do", "alpha beta"]);
        let stats = statistics(&tokenizer, &corpus);
        assert_eq!(stats.total_texts, 2);
        assert_eq!(stats.total_words, 2);
        assert_eq!(stats.unique_words, 2);
        assert_eq!(stats.avg_words_per_text, 1.0);
    }

    #[test]
    fn test_frequency_conservation() {
        let tokenizer = Tokenizer::default();
        let corpus = texts(&[
            "storm warning issued for coast",
            "coast guard responds to storm",
            "warning lifted after storm passes",
        ]);
        let table = word_frequency(&tokenizer, &corpus, usize::MAX);
        let summed: usize = table.iter().map(|(_, n)| n).sum();
        assert_eq!(summed, statistics(&tokenizer, &corpus).total_words);
    }

    #[test]
    fn test_ranking_order_property() {
        let tokenizer = Tokenizer::default();
        let corpus = texts(&["one two two three three three", "four four four four"]);
        let table = word_frequency(&tokenizer, &corpus, usize::MAX);
        for pair in table.windows(2) {
            assert!(pair[0].1 >= pair[1].1, "counts must be non-increasing");
        }
    }
}
