//! Text processing utilities for title normalization and keyword extraction

use std::collections::HashSet;

/// Minimum length for a word to count as a keyword
const MIN_KEYWORD_LEN: usize = 4;

/// Canonicalize a title into a comparison key.
///
/// Lowercases, strips everything that is not an ASCII letter, digit, or
/// whitespace, collapses whitespace runs, and trims. Idempotent.
pub fn normalize_title(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the set of significant words from a text span.
///
/// Keywords are maximal runs of 4+ consecutive ASCII letters, lowercased.
/// No stemming and no stop-word removal; duplicates collapse.
pub fn keywords(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|s| s.len() >= MIN_KEYWORD_LEN)
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        assert_eq!(normalize_title("Rate Limiting: The Basics!"), "rate limiting the basics");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_title("  a \t b\n  c  "), "a b c");
    }

    #[test]
    fn test_normalize_keeps_digits() {
        assert_eq!(normalize_title("HTTP/2 in 5 minutes"), "http2 in 5 minutes");
    }

    #[test]
    fn test_normalize_non_ascii_dropped() {
        assert_eq!(normalize_title("café menu"), "caf menu");
    }

    #[test]
    fn test_normalize_empty_and_symbol_only() {
        assert_eq!(normalize_title(""), "");
        assert_eq!(normalize_title("!!! ???"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for title in ["Mixed CASE  &  symbols", "", "already clean", "  x  "] {
            let once = normalize_title(title);
            assert_eq!(normalize_title(&once), once);
        }
    }

    #[test]
    fn test_keywords_min_length() {
        let kw = keywords("the api is a fine tool for work");
        // "the", "api", "is", "a", "for" are all under 4 letters
        assert!(kw.contains("fine"));
        assert!(kw.contains("tool"));
        assert!(kw.contains("work"));
        assert!(!kw.contains("api"));
        assert!(!kw.contains("the"));
    }

    #[test]
    fn test_keywords_split_on_non_letters() {
        let kw = keywords("token-bucket rate4limit");
        assert!(kw.contains("token"));
        assert!(kw.contains("bucket"));
        // digit breaks the run, leaving "rate" and "limit"
        assert!(kw.contains("rate"));
        assert!(kw.contains("limit"));
    }

    #[test]
    fn test_keywords_collapse_duplicates() {
        let kw = keywords("Queue queue QUEUE");
        assert_eq!(kw.len(), 1);
        assert!(kw.contains("queue"));
    }

    #[test]
    fn test_keywords_empty_input() {
        assert!(keywords("").is_empty());
        assert!(keywords("a b c 123 !!").is_empty());
    }
}
