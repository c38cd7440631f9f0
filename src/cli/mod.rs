//! CLI argument parsing for sift
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Sift - deduplicate and rank extracted lesson notes
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a sift.toml configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deduplicate, rank, and keep the best notes
    Curate {
        /// Notes JSON file ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Similarity threshold for grouping (0.0 to 1.0)
        #[arg(long, short = 't')]
        threshold: Option<f64>,

        /// Maximum number of curated notes to emit
        #[arg(long, short = 'k')]
        limit: Option<usize>,
    },

    /// Show duplicate groups without ranking
    Groups {
        /// Notes JSON file ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Similarity threshold for grouping (0.0 to 1.0)
        #[arg(long, short = 't')]
        threshold: Option<f64>,
    },

    /// Score each note's content quality, in input order
    Score {
        /// Notes JSON file ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },
}
