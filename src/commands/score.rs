//! `sift score` command - per-note quality scores
//!
//! Scores every input note independently, preserving input order. Useful
//! for tuning content before it reaches the curation pass.

use std::path::Path;
use std::time::Instant;

use sift_core::error::Result;
use sift_core::quality::quality_score;
use sift_core::records::escape_quotes;
use sift_core::trace_time;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::load_notes;

/// Execute the score command
pub fn execute(cli: &Cli, input: Option<&Path>, start: Instant) -> Result<()> {
    let notes = load_notes(input)?;

    let scores: Vec<u32> = notes.iter().map(|n| quality_score(&n.content)).collect();
    trace_time!(start, "score", count = notes.len());

    match cli.format {
        OutputFormat::Human => {
            for (note, score) in notes.iter().zip(&scores) {
                println!("[{}] {} - {}", score, note.title, note.lesson_title);
            }
        }
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "noteCount": notes.len(),
                "notes": notes
                    .iter()
                    .zip(&scores)
                    .map(|(note, score)| {
                        serde_json::json!({
                            "title": note.title,
                            "lessonTitle": note.lesson_title,
                            "lessonId": note.lesson_id,
                            "score": score,
                        })
                    })
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Records => {
            for (i, (note, score)) in notes.iter().zip(&scores).enumerate() {
                println!(
                    "Q {} score={} \"{}\" lesson=\"{}\"",
                    i + 1,
                    score,
                    escape_quotes(&note.title),
                    escape_quotes(&note.lesson_title)
                );
            }
        }
    }

    Ok(())
}
