//! Hacker News headline extractor.
//!
//! Stories on the front page are `tr.athing` rows; the headline anchor sits
//! inside `span.titleline`. Discussion-page links (`item?id=...`) are
//! relative and get resolved against the site base URL.

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

const BASE_URL: &str = "https://news.ycombinator.com";

/// Extract `(title, link)` pairs from the Hacker News front page.
pub fn extract(html: &str) -> Vec<(String, String)> {
    let document = Html::parse_document(html);
    let story_selector = Selector::parse("tr.athing span.titleline > a").unwrap();
    let base_url = Url::parse(BASE_URL).unwrap();

    let mut headlines = Vec::new();
    for anchor in document.select(&story_selector) {
        let title = anchor.text().collect::<String>().trim().to_string();
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = base_url.join(href) else {
            debug!(%href, "Skipping unresolvable Hacker News link");
            continue;
        };
        if !title.is_empty() {
            headlines.push((title, resolved.to_string()));
        }
    }
    headlines
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <table>
          <tr class="athing" id="1">
            <td><span class="titleline">
              <a href="https://example.com/rust-release">Rust 2.0 released</a>
            </span></td>
          </tr>
          <tr class="athing" id="2">
            <td><span class="titleline">
              <a href="item?id=42">Ask HN: How do you test scrapers?</a>
            </span></td>
          </tr>
          <tr><td>not a story row</td></tr>
        </table>
    "#;

    #[test]
    fn test_extracts_titles_and_links() {
        let headlines = extract(SAMPLE);
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].0, "Rust 2.0 released");
        assert_eq!(headlines[0].1, "https://example.com/rust-release");
    }

    #[test]
    fn test_resolves_relative_item_links() {
        let headlines = extract(SAMPLE);
        assert_eq!(headlines[1].1, "https://news.ycombinator.com/item?id=42");
    }

    #[test]
    fn test_empty_document() {
        assert!(extract("<html></html>").is_empty());
    }
}
