//! Pairwise similarity scoring between notes
//!
//! Title-based shortcuts are cheap, high-precision signals and win first;
//! keyword overlap over the title plus a bounded content window is the
//! fallback topical signal that keeps the O(n²) clustering pass tractable.

use std::collections::HashSet;

use crate::note::Note;
use crate::text::{keywords, normalize_title};

/// Score for a normalized-title exact match
pub const EXACT_TITLE_SCORE: f64 = 1.0;

/// Score when one normalized title contains the other
pub const CONTAINED_TITLE_SCORE: f64 = 0.8;

/// Only this many leading characters of content feed the keyword overlap
pub const KEYWORD_CONTENT_WINDOW: usize = 500;

/// Precomputed comparison view of a note.
///
/// Built once per note before the O(n²) clustering pass so the pass only
/// does string and set comparisons.
#[derive(Debug, Clone)]
pub struct NoteProfile {
    /// Normalized title comparison key
    pub norm_title: String,
    /// Keywords from `title + " " + content[..window]`
    pub keywords: HashSet<String>,
}

impl NoteProfile {
    /// Build the comparison view for a note
    pub fn build(note: &Note) -> Self {
        let window: String = note.content.chars().take(KEYWORD_CONTENT_WINDOW).collect();
        let text = format!("{} {}", note.title, window);
        NoteProfile {
            norm_title: normalize_title(&note.title),
            keywords: keywords(&text),
        }
    }
}

/// Score two note profiles on a 0.0 to 1.0 scale.
///
/// Decision list, first match wins:
/// 1. equal normalized titles -> 1.0
/// 2. one normalized title contains the other -> 0.8
/// 3. Jaccard overlap of the keyword sets, with 0/0 defined as 0.0
pub fn score(a: &NoteProfile, b: &NoteProfile) -> f64 {
    if a.norm_title == b.norm_title {
        return EXACT_TITLE_SCORE;
    }

    if a.norm_title.contains(&b.norm_title) || b.norm_title.contains(&a.norm_title) {
        return CONTAINED_TITLE_SCORE;
    }

    jaccard(&a.keywords, &b.keywords)
}

/// Score two notes directly, building profiles on the fly
pub fn similarity(a: &Note, b: &Note) -> f64 {
    score(&NoteProfile::build(a), &NoteProfile::build(b))
}

/// Intersection size over union size; empty-over-empty is 0.0
fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}
