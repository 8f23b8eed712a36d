//! Text normalization.
//!
//! [`normalize`] turns a raw headline into a canonical lowercase string
//! containing only ASCII letters and single spaces. The stripping steps run
//! in a fixed order: URL, mention, and hashtag patterns are removed before
//! the generic non-letter strip so their residual symbols cannot be absorbed
//! differently.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());
static NON_LETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Clean a raw title into a canonical form.
///
/// Steps, in order:
/// 1. Strip `http(s)://...` URLs
/// 2. Strip `@mention` patterns
/// 3. Strip `#hashtag` patterns
/// 4. Strip standalone digit runs
/// 5. Strip every character that is not an ASCII letter or whitespace
/// 6. Collapse whitespace runs to a single space
/// 7. Lowercase and trim
///
/// The result matches `^[a-z]*( [a-z]+)*$` or is empty. Empty input yields
/// empty output.
pub fn normalize(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = MENTION_RE.replace_all(&text, "");
    let text = HASHTAG_RE.replace_all(&text, "");
    let text = NUMBER_RE.replace_all(&text, "");
    let text = NON_LETTER_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("Breaking News: Markets Crash Today!"),
            "breaking news markets crash today"
        );
    }

    #[test]
    fn test_strips_urls() {
        assert_eq!(
            normalize("Read more at https://example.com/story?id=42 now"),
            "read more at now"
        );
    }

    #[test]
    fn test_strips_mentions_and_hashtags() {
        assert_eq!(normalize("@reporter says #breaking story"), "says story");
    }

    #[test]
    fn test_strips_standalone_numbers() {
        assert_eq!(normalize("Fed raises rates 75 points in 2026"), "fed raises rates points in");
    }

    #[test]
    fn test_embedded_digits_are_dropped_not_split() {
        // "g1" is not a standalone digit run; the non-letter strip removes the digit
        assert_eq!(normalize("g1 covers b2b deals"), "g covers bb deals");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  spaced\t\tout \n words  "), "spaced out words");
    }

    #[test]
    fn test_non_ascii_letters_are_stripped() {
        assert_eq!(normalize("eleição não é amanhã"), "eleio no amanh");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
        assert_eq!(normalize("123 456 !!!"), "");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "Breaking News: Markets Crash Today!",
            "@user check https://a.b/c #tag 99",
            "já está 100% pronto",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_character_invariant() {
        let shape = Regex::new(r"^[a-z]*( [a-z]+)*$").unwrap();
        let samples = [
            "Mixed CASE with 123 and $ymbol$",
            "https://x.y @m #h",
            "plain words",
            "trailing space ",
        ];
        for s in samples {
            let out = normalize(s);
            assert!(shape.is_match(&out), "bad shape for {s:?}: {out:?}");
        }
    }
}
