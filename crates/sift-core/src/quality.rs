//! Heuristic quality scoring of note content
//!
//! The score is an additive, unbounded ranking signal built from structural
//! and lexical cues. It is relative, never an absolute quality percentage.

use regex::Regex;
use std::sync::OnceLock;

static NUMBERED_LIST: OnceLock<Regex> = OnceLock::new();
static BULLET: OnceLock<Regex> = OnceLock::new();
static EXAMPLE: OnceLock<Regex> = OnceLock::new();
static PRACTICAL: OnceLock<Regex> = OnceLock::new();
static ACTIONABLE: OnceLock<Regex> = OnceLock::new();

fn numbered_list() -> &'static Regex {
    NUMBERED_LIST.get_or_init(|| Regex::new(r"\d+[.):]").expect("valid literal regex"))
}

fn bullet() -> &'static Regex {
    BULLET.get_or_init(|| Regex::new(r"(?m)^\s*[-*]\s").expect("valid literal regex"))
}

fn example() -> &'static Regex {
    EXAMPLE.get_or_init(|| Regex::new(r"(?i)\bexample\b|e\.g\.").expect("valid literal regex"))
}

fn practical() -> &'static Regex {
    PRACTICAL.get_or_init(|| {
        Regex::new(r"(?i)\b(code|api|function|script|command)\b").expect("valid literal regex")
    })
}

fn actionable() -> &'static Regex {
    ACTIONABLE
        .get_or_init(|| Regex::new(r"(?i)workflow|process|step|implement").expect("valid literal regex"))
}

/// Score a note's content.
///
/// Criteria are independent and additive, no early exit:
/// - length tier: >1000 chars +3, >500 +2, >200 +1
/// - numbered list +2, leading bullet +1, example marker +2
/// - practical vocabulary +2, actionable vocabulary +1
pub fn quality_score(content: &str) -> u32 {
    let mut score = 0;

    let len = content.chars().count();
    if len > 1000 {
        score += 3;
    } else if len > 500 {
        score += 2;
    } else if len > 200 {
        score += 1;
    }

    if numbered_list().is_match(content) {
        score += 2;
    }
    if bullet().is_match(content) {
        score += 1;
    }
    if example().is_match(content) {
        score += 2;
    }
    if practical().is_match(content) {
        score += 2;
    }
    if actionable().is_match(content) {
        score += 1;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_scores_zero() {
        assert_eq!(quality_score(""), 0);
    }

    #[test]
    fn test_length_tiers() {
        assert_eq!(quality_score(&"x".repeat(200)), 0);
        assert_eq!(quality_score(&"x".repeat(201)), 1);
        assert_eq!(quality_score(&"x".repeat(501)), 2);
        assert_eq!(quality_score(&"x".repeat(1001)), 3);
    }

    #[test]
    fn test_numbered_list_variants() {
        assert_eq!(quality_score("1. first"), 2);
        assert_eq!(quality_score("2) second"), 2);
        assert_eq!(quality_score("3: third"), 2);
        assert_eq!(quality_score("no list here"), 0);
    }

    #[test]
    fn test_bullet_at_line_start_only() {
        assert_eq!(quality_score("- item"), 1);
        assert_eq!(quality_score("intro\n* item"), 1);
        assert_eq!(quality_score("a - b"), 0);
    }

    #[test]
    fn test_example_markers() {
        assert_eq!(quality_score("An Example here"), 2);
        assert_eq!(quality_score("see e.g. this"), 2);
        // "examples" is not the bare word and "eg" lacks the dots
        assert_eq!(quality_score("counterexamples eg"), 0);
    }

    #[test]
    fn test_practical_words_need_boundaries() {
        assert_eq!(quality_score("call the API"), 2);
        assert_eq!(quality_score("rapid decoder"), 0);
    }

    #[test]
    fn test_actionable_words_are_substrings() {
        assert_eq!(quality_score("multistep"), 1);
        assert_eq!(quality_score("reprocessing"), 1);
    }

    #[test]
    fn test_additive_example() {
        // 1200 chars (+3), numbered list (+2), example (+2), function (+2)
        let content = format!("1. An example function\n{}", "x".repeat(1200));
        assert_eq!(quality_score(&content), 9);
    }

    #[test]
    fn test_everything_at_once() {
        let content = format!(
            "1. step one\n- use the code example\n{}",
            "x".repeat(1100)
        );
        // 3 length + 2 numbered + 1 bullet + 2 example + 2 code + 1 step
        assert_eq!(quality_score(&content), 11);
    }
}
