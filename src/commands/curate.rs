//! `sift curate` command - run the full curation pipeline
//!
//! Reads a JSON array of notes, collapses near-duplicates, and prints the
//! top-ranked representatives.

use std::path::Path;
use std::time::Instant;

use chrono::Utc;

use sift_core::curate::Curator;
use sift_core::error::Result;
use sift_core::records;
use sift_core::trace_time;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{load_notes, resolve_config};

/// Execute the curate command
pub fn execute(
    cli: &Cli,
    input: Option<&Path>,
    threshold: Option<f64>,
    limit: Option<usize>,
    start: Instant,
) -> Result<()> {
    let config = resolve_config(cli, threshold, limit)?;
    let notes = load_notes(input)?;
    trace_time!(start, "load_notes", count = notes.len());

    let mut curator = Curator::new(config);
    let curated = curator.curate(&notes);
    trace_time!(start, "curate", curated = curated.len());

    match cli.format {
        OutputFormat::Human => {
            for (i, rep) in curated.iter().enumerate() {
                println!(
                    "{}. [{}] {} (group of {}) - {}",
                    i + 1,
                    rep.score,
                    rep.note.title,
                    rep.group_size,
                    rep.note.lesson_title
                );
            }
            if !cli.quiet {
                println!();
                println!("curated {} of {} notes", curated.len(), notes.len());
            }
        }
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "generated": Utc::now().to_rfc3339(),
                "inputCount": notes.len(),
                "curatedCount": curated.len(),
                "notes": curated,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Records => {
            for (i, rep) in curated.iter().enumerate() {
                println!("{}", records::format_note_record(i + 1, rep));
                for line in records::format_body_lines(i + 1, &rep.note.content) {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}
