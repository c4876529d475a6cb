// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the gh-md CLI.
//!
//! An operation that fails is reported on stderr and its input is echoed on
//! stdout unchanged.

pub mod completion;
pub mod link;
pub mod reference;
pub mod title;
pub mod types;
pub mod url;

use std::time::Duration;

use anyhow::Result;
use console::style;
use ghmd_core::{AppConfig, GhmdError};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::cli::{Commands, CompletionCommand, OutputContext};
use crate::errors::format_ghmd_error;
use crate::output;
use crate::transport::LazyTransport;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Prints an operation failure on stderr.
fn report_failure(error: &GhmdError) {
    debug!(error = ?error, "Operation failed, echoing input");
    eprintln!(
        "{} {}",
        style("!").yellow().bold().for_stderr(),
        format_ghmd_error(error)
    );
}

/// Dispatch to the appropriate command handler.
pub async fn run(
    command: Commands,
    ctx: OutputContext,
    config: &AppConfig,
    use_cache: bool,
) -> Result<()> {
    let transport = LazyTransport::new(config, use_cache);

    match command {
        Commands::Link { input, simple } => {
            let result = link::run(&input, simple, &transport, &ctx).await;
            output::render(&result, &ctx)
        }
        Commands::Ref { input } => output::render(&reference::run(&input), &ctx),
        Commands::Title { input, sanitize } => {
            let result = title::run(&input, sanitize, &transport, &ctx).await;
            output::render(&result, &ctx)
        }
        Commands::Url { input } => output::render(&url::run(&input), &ctx),
        Commands::Completion(CompletionCommand::Generate { shell }) => {
            completion::run_generate(shell)
        }
    }
}
