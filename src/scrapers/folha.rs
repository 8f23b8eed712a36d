//! Folha de S.Paulo headline extractor.

use scraper::{Html, Selector};
use url::Url;

const BASE_URL: &str = "https://www.folha.uol.com.br";

// TODO: the dated-path selectors need a yearly bump; derive them from the
// current date instead.
const HEADLINE_SELECTORS: &[&str] = &[
    "h2.c-headline__title a",
    "h3.c-headline__title a",
    "div.c-headline a",
    "article a.c-headline__url",
    r#"a[href*="/2025/"]"#,
    r#"a[href*="/2026/"]"#,
];

/// Extract `(title, link)` pairs from the Folha homepage.
pub fn extract(html: &str) -> Vec<(String, String)> {
    let document = Html::parse_document(html);
    let base_url = Url::parse(BASE_URL).unwrap();

    let mut headlines = Vec::new();
    for selector_source in HEADLINE_SELECTORS {
        let selector = Selector::parse(selector_source).unwrap();
        for anchor in document.select(&selector) {
            let title = anchor.text().collect::<String>().trim().to_string();
            if title.chars().count() <= 10 {
                continue;
            }
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            let Ok(resolved) = base_url.join(href) else {
                continue;
            };
            headlines.push((title, resolved.to_string()));
        }
    }
    headlines
}
