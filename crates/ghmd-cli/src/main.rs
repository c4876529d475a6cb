// SPDX-License-Identifier: Apache-2.0

//! gh-md - GitHub markdown link tools.
//!
//! Converts GitHub issue, pull request and discussion URLs or references into
//! markdown links, references, titles and URLs. Installed as `gh-md`, it also
//! runs as the `gh md` GitHub CLI extension.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;
mod transport;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use ghmd_core::config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let output_ctx = OutputContext::from_cli(cli.output, cli.verbose);

    let config = config::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    commands::run(cli.command, output_ctx, &config, !cli.no_cache).await
}
