//! SQLite persistence.
//!
//! Schema:
//! - `raw_news`: one row per collected headline, `link` UNIQUE so reruns
//!   do not duplicate stories (`INSERT OR IGNORE`)
//! - `processed_news`: cleaned titles keyed to their raw row
//! - `word_frequency`: one row per (word, count) per analysis run, stamped
//!   with the analysis date

use chrono::Local;
use rusqlite::{Connection, params};
use std::error::Error;
use std::path::Path;
use tracing::{debug, info};

use crate::models::{ExportRecord, NewsItem};

/// Per-source row counts and totals for the summary query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSummary {
    pub total_news: usize,
    pub news_by_source: Vec<(String, usize)>,
    pub distinct_words: usize,
}

/// A handle to the news database, with the schema ensured.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let conn = Connection::open(path.as_ref())?;
        Self::create_tables(&conn)?;
        debug!(db = %path.as_ref().display(), "Opened news database");
        Ok(Self { conn })
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self, Box<dyn Error>> {
        let conn = Connection::open_in_memory()?;
        Self::create_tables(&conn)?;
        Ok(Self { conn })
    }

    fn create_tables(conn: &Connection) -> Result<(), rusqlite::Error> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS raw_news (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                link TEXT NOT NULL,
                source TEXT,
                collected_at TIMESTAMP,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                UNIQUE(link)
            );
            CREATE TABLE IF NOT EXISTS processed_news (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                raw_news_id INTEGER,
                cleaned_title TEXT,
                processed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (raw_news_id) REFERENCES raw_news(id)
            );
            CREATE TABLE IF NOT EXISTS word_frequency (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                word TEXT NOT NULL,
                frequency INTEGER,
                analysis_date DATE,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );",
        )
    }

    /// Insert headline rows, ignoring links already present.
    ///
    /// Returns the number of rows actually inserted.
    pub fn save_raw_news(&self, records: &[ExportRecord]) -> Result<usize, Box<dyn Error>> {
        let mut inserted = 0usize;
        for record in records {
            let changed = self.conn.execute(
                "INSERT OR IGNORE INTO raw_news (title, link, source, collected_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![record.title, record.link, record.source, record.collected_at],
            )?;
            inserted += changed;
        }
        info!(inserted, total = records.len(), "Saved raw news rows");
        Ok(inserted)
    }

    /// Insert cleaned titles, linked to their raw row by link lookup.
    /// Records whose processed title is empty are skipped.
    pub fn save_processed_news(&self, records: &[ExportRecord]) -> Result<usize, Box<dyn Error>> {
        let mut inserted = 0usize;
        for record in records {
            if record.processed_title.is_empty() {
                continue;
            }
            inserted += self.conn.execute(
                "INSERT INTO processed_news (raw_news_id, cleaned_title)
                 SELECT id, ?2 FROM raw_news WHERE link = ?1",
                params![record.link, record.processed_title],
            )?;
        }
        Ok(inserted)
    }

    /// Insert one frequency row per word, stamped with today's date.
    pub fn save_word_frequency(&self, rows: &[(String, usize)]) -> Result<usize, Box<dyn Error>> {
        let analysis_date = Local::now().date_naive().to_string();
        for (word, frequency) in rows {
            self.conn.execute(
                "INSERT INTO word_frequency (word, frequency, analysis_date)
                 VALUES (?1, ?2, ?3)",
                params![word, *frequency as i64, analysis_date],
            )?;
        }
        info!(words = rows.len(), "Saved word frequency rows");
        Ok(rows.len())
    }

    /// Most recently stored headlines, newest first.
    pub fn recent_news(&self, limit: usize) -> Result<Vec<NewsItem>, Box<dyn Error>> {
        let mut stmt = self.conn.prepare(
            "SELECT title, link, source, collected_at
             FROM raw_news
             ORDER BY created_at DESC, id DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(NewsItem {
                title: row.get(0)?,
                link: row.get(1)?,
                source: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                collected_at: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Database-wide totals: stored rows, per-source counts, distinct
    /// analyzed words.
    pub fn summary(&self) -> Result<StoreSummary, Box<dyn Error>> {
        let total_news: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM raw_news", [], |row| row.get(0))?;

        let mut stmt = self.conn.prepare(
            "SELECT source, COUNT(*) FROM raw_news GROUP BY source ORDER BY COUNT(*) DESC",
        )?;
        let news_by_source = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                    row.get::<_, i64>(1)? as usize,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let distinct_words: i64 = self.conn.query_row(
            "SELECT COUNT(DISTINCT word) FROM word_frequency",
            [],
            |row| row.get(0),
        )?;

        Ok(StoreSummary {
            total_news: total_news as usize,
            news_by_source,
            distinct_words: distinct_words as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, processed: &str, link: &str) -> ExportRecord {
        ExportRecord {
            title: title.to_string(),
            processed_title: processed.to_string(),
            link: link.to_string(),
            source: "Hacker News".to_string(),
            collected_at: "2026-08-07T09:00:00-03:00".to_string(),
        }
    }

    #[test]
    fn test_duplicate_links_are_ignored() {
        let store = SqliteStore::open_in_memory().unwrap();
        let records = vec![
            record("First story", "first story", "https://example.com/a"),
            record("Second story", "second story", "https://example.com/b"),
            record("First story again", "first story again", "https://example.com/a"),
        ];
        let inserted = store.save_raw_news(&records).unwrap();
        assert_eq!(inserted, 2);
        assert_eq!(store.summary().unwrap().total_news, 2);
    }

    #[test]
    fn test_processed_news_links_to_raw_rows() {
        let store = SqliteStore::open_in_memory().unwrap();
        let records = vec![
            record("Markets crash today", "markets crash today", "https://example.com/a"),
            record("The a of", "", "https://example.com/b"),
        ];
        store.save_raw_news(&records).unwrap();
        let inserted = store.save_processed_news(&records).unwrap();
        // empty processed titles are skipped
        assert_eq!(inserted, 1);
    }

    #[test]
    fn test_word_frequency_and_summary() {
        let store = SqliteStore::open_in_memory().unwrap();
        let rows = vec![("markets".to_string(), 2), ("crash".to_string(), 2)];
        assert_eq!(store.save_word_frequency(&rows).unwrap(), 2);
        // repeated analysis runs accumulate rows but not distinct words
        store.save_word_frequency(&rows).unwrap();
        assert_eq!(store.summary().unwrap().distinct_words, 2);
    }

    #[test]
    fn test_recent_news_ordering_and_limit() {
        let store = SqliteStore::open_in_memory().unwrap();
        let records = vec![
            record("Oldest", "oldest", "https://example.com/1"),
            record("Middle", "middle", "https://example.com/2"),
            record("Newest", "newest", "https://example.com/3"),
        ];
        store.save_raw_news(&records).unwrap();
        let recent = store.recent_news(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].title, "Newest");
        assert_eq!(recent[1].title, "Middle");
    }
}
