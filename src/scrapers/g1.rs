//! G1 (Portal Globo) headline extractor.
//!
//! G1 marks feed content with several different classes depending on the
//! page section, so extraction runs a selector chain and validates that each
//! link actually points at a globo.com property. A generic all-anchors pass
//! covers layouts where none of the known selectors match.

use scraper::{Html, Selector};
use url::Url;

const BASE_URL: &str = "https://g1.globo.com";

/// Minimum character count for a credible headline.
const MIN_TITLE_LEN: usize = 10;

const FEED_SELECTORS: &[&str] = &[
    "a.feed-post-link",
    "div.bastian-page a",
    "div.feed-post-body a",
    "h2 a",
];

pub fn extract(html: &str) -> Vec<(String, String)> {
    let document = Html::parse_document(html);
    let base_url = Url::parse(BASE_URL).unwrap();

    let mut headlines = Vec::new();
    for selector_source in FEED_SELECTORS {
        let selector = Selector::parse(selector_source).unwrap();
        for anchor in document.select(&selector) {
            let title = anchor.text().collect::<String>().trim().to_string();
            if title.chars().count() <= MIN_TITLE_LEN {
                continue;
            }
            let Some(link) = resolve_link(&base_url, anchor.value().attr("href")) else {
                continue;
            };
            if is_globo_link(&link) {
                headlines.push((title, link));
            }
        }
    }

    if headlines.is_empty() {
        headlines = fallback_pass(&document, &base_url);
    }
    headlines
}

/// Last-resort pass: any anchor with a long enough title whose link looks
/// like a news story.
fn fallback_pass(document: &Html, base_url: &Url) -> Vec<(String, String)> {
    let anchor_selector = Selector::parse("a[href]").unwrap();

    let mut out = Vec::new();
    for anchor in document.select(&anchor_selector) {
        let title = anchor.text().collect::<String>().trim().to_string();
        if title.chars().count() <= 20 {
            continue;
        }
        let Some(link) = resolve_link(base_url, anchor.value().attr("href")) else {
            continue;
        };
        if is_globo_link(&link) && link.to_lowercase().contains("noticia") {
            out.push((title, link));
        }
    }
    out
}

fn resolve_link(base_url: &Url, href: Option<&str>) -> Option<String> {
    let href = href?;
    let resolved = base_url.join(href).ok()?;
    Some(resolved.to_string())
}

fn is_globo_link(link: &str) -> bool {
    Url::parse(link)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.contains("globo.com") || h.contains("g1.com")))
        .unwrap_or(false)
}
