//! Utilities for records output format

use crate::curate::ScoredRepresentative;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format a curated note header line in records format.
///
/// Returns an N-line with rank, ranking signals, title, and source lesson.
pub fn format_note_record(rank: usize, rep: &ScoredRepresentative) -> String {
    format!(
        "N {} score={} group={} \"{}\" lesson=\"{}\"",
        rank,
        rep.score,
        rep.group_size,
        escape_quotes(&rep.note.title),
        escape_quotes(&rep.note.lesson_title)
    )
}

/// Format body lines in records format.
///
/// Returns B-lines with the note content and a B-END marker.
pub fn format_body_lines(rank: usize, body: &str) -> Vec<String> {
    let mut lines = vec![format!("B {}", rank)];
    lines.push(body.to_string());
    lines.push("B-END".to_string());
    lines
}
