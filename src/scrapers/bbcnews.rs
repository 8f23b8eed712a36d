//! BBC News headline extractor.
//!
//! The primary pass reads promo headlines (`h2[data-testid]`) and walks up
//! to the enclosing anchor. When a layout change leaves that pass empty, a
//! fallback pass scans `article` cards for an `h3` title and the nearest
//! anchor. Relative hrefs are resolved against `https://www.bbc.com`.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

const BASE_URL: &str = "https://www.bbc.com";

/// Extract `(title, link)` pairs from the BBC News homepage.
pub fn extract(html: &str) -> Vec<(String, String)> {
    let document = Html::parse_document(html);
    let base_url = Url::parse(BASE_URL).unwrap();

    let mut headlines = headline_pass(&document, &base_url);
    if headlines.is_empty() {
        debug!("Headline pass found nothing; trying article fallback");
        headlines = article_pass(&document, &base_url);
    }
    headlines
}

fn headline_pass(document: &Html, base_url: &Url) -> Vec<(String, String)> {
    let headline_selector = Selector::parse("h2[data-testid]").unwrap();

    let mut out = Vec::new();
    for headline in document.select(&headline_selector) {
        let Some(anchor) = enclosing_anchor(headline) else {
            continue;
        };
        push_headline(&mut out, headline, anchor, base_url);
    }
    out
}

fn article_pass(document: &Html, base_url: &Url) -> Vec<(String, String)> {
    let article_selector = Selector::parse("article").unwrap();
    let h3_selector = Selector::parse("h3").unwrap();
    let anchor_selector = Selector::parse("a[href]").unwrap();

    let mut out = Vec::new();
    for article in document.select(&article_selector) {
        let Some(title_el) = article.select(&h3_selector).next() else {
            continue;
        };
        let anchor = enclosing_anchor(title_el).or_else(|| article.select(&anchor_selector).next());
        let Some(anchor) = anchor else {
            continue;
        };
        push_headline(&mut out, title_el, anchor, base_url);
    }
    out
}

/// Nearest `<a>` ancestor of an element, if any.
fn enclosing_anchor(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")
}

fn push_headline(
    out: &mut Vec<(String, String)>,
    title_el: ElementRef<'_>,
    anchor: ElementRef<'_>,
    base_url: &Url,
) {
    let title = title_el.text().collect::<String>().trim().to_string();
    let Some(href) = anchor.value().attr("href") else {
        return;
    };
    let Ok(resolved) = base_url.join(href) else {
        return;
    };
    if !title.is_empty() {
        out.push((title, resolved.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_pass() {
        let html = r#"
            <div>
              <a href="/news/world-123"><h2 data-testid="card-headline">Summit ends without deal</h2></a>
              <a href="https://www.bbc.com/news/uk-456"><h2 data-testid="card-headline">Rail strike continues</h2></a>
              <h2 data-testid="orphan">No anchor around this one</h2>
            </div>
        "#;
        let headlines = extract(html);
        assert_eq!(headlines.len(), 2);
        assert_eq!(
            headlines[0],
            (
                "Summit ends without deal".to_string(),
                "https://www.bbc.com/news/world-123".to_string()
            )
        );
    }

    #[test]
    fn test_article_fallback_when_headlines_missing() {
        let html = r#"
            <article>
              <a href="/news/business-789"><h3>Markets slide on rate fears</h3></a>
            </article>
            <article>
              <h3>Floods hit the coast</h3>
              <a href="/news/world-101">Read more</a>
            </article>
        "#;
        let headlines = extract(html);
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].0, "Markets slide on rate fears");
        assert_eq!(headlines[1].1, "https://www.bbc.com/news/world-101");
    }

    #[test]
    fn test_empty_document() {
        assert!(extract("<html><body></body></html>").is_empty());
    }
}
