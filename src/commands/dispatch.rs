//! Command dispatch logic for sift

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use sift_core::error::{Result, SiftError};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(SiftError::UsageError(
            "no command given (see --help)".to_string(),
        )),

        Some(Commands::Curate {
            input,
            threshold,
            limit,
        }) => commands::curate::execute(cli, input.as_deref(), *threshold, *limit, start),

        Some(Commands::Groups { input, threshold }) => {
            commands::groups::execute(cli, input.as_deref(), *threshold, start)
        }

        Some(Commands::Score { input }) => commands::score::execute(cli, input.as_deref(), start),
    }
}
