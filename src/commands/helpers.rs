//! Shared helpers for command implementations

use std::fs;
use std::io::Read;
use std::path::Path;

use sift_core::config::CurateConfig;
use sift_core::error::{Result, SiftError};
use sift_core::note::{parse_notes, Note};

use crate::cli::Cli;

/// Load notes from a JSON file, or stdin when the path is absent or "-"
pub fn load_notes(input: Option<&Path>) -> Result<Vec<Note>> {
    let json = match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SiftError::InputNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                SiftError::Io(e)
            }
        })?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    parse_notes(&json)
}

/// Resolve the run configuration: config file first, then flag overrides
pub fn resolve_config(
    cli: &Cli,
    threshold: Option<f64>,
    limit: Option<usize>,
) -> Result<CurateConfig> {
    let mut config = match &cli.config {
        Some(path) => CurateConfig::load(path)?,
        None => CurateConfig::default(),
    };

    if let Some(t) = threshold {
        config.threshold = t;
    }
    if let Some(k) = limit {
        config.limit = k;
    }

    config.validate()?;
    Ok(config)
}
