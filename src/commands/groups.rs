//! `sift groups` command - inspect duplicate groups before ranking
//!
//! Shows the raw clusters the greedy pass produced, in discovery order.

use std::path::Path;
use std::time::Instant;

use sift_core::cluster::cluster;
use sift_core::error::Result;
use sift_core::records::escape_quotes;
use sift_core::trace_time;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{load_notes, resolve_config};

/// Execute the groups command
pub fn execute(
    cli: &Cli,
    input: Option<&Path>,
    threshold: Option<f64>,
    start: Instant,
) -> Result<()> {
    let config = resolve_config(cli, threshold, None)?;
    let notes = load_notes(input)?;

    let groups = cluster(&notes, config.threshold);
    trace_time!(start, "cluster", groups = groups.len());

    match cli.format {
        OutputFormat::Human => {
            for (i, group) in groups.iter().enumerate() {
                println!("group {} ({} notes) key=\"{}\"", i + 1, group.len(), group.key);
                for note in &group.notes {
                    println!("  - {} [{}]", note.title, note.lesson_title);
                }
            }
            if !cli.quiet {
                println!();
                println!("{} notes in {} groups", notes.len(), groups.len());
            }
        }
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "noteCount": notes.len(),
                "groupCount": groups.len(),
                "groups": groups
                    .iter()
                    .map(|group| {
                        serde_json::json!({
                            "key": group.key,
                            "size": group.len(),
                            "notes": group.notes,
                        })
                    })
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Records => {
            for (i, group) in groups.iter().enumerate() {
                println!(
                    "G {} size={} \"{}\"",
                    i + 1,
                    group.len(),
                    escape_quotes(&group.key)
                );
                for note in &group.notes {
                    println!(
                        "M {} \"{}\" lesson=\"{}\"",
                        i + 1,
                        escape_quotes(&note.title),
                        escape_quotes(&note.lesson_title)
                    );
                }
            }
        }
    }

    Ok(())
}
