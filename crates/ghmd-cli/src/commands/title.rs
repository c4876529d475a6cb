// SPDX-License-Identifier: Apache-2.0

//! `title` command: print the item title.

use ghmd_core::{GraphqlTransport, TitleOutcome};

use super::types::OperationResult;
use super::{maybe_spinner, report_failure};
use crate::cli::OutputContext;

/// Resolves the title of the input.
///
/// Unmatched input is echoed with a `didn't match` note on stderr.
pub async fn run(
    input: &str,
    sanitize: bool,
    transport: &dyn GraphqlTransport,
    ctx: &OutputContext,
) -> OperationResult {
    let spinner = maybe_spinner(ctx, "Fetching title...");
    let outcome = ghmd_core::format::title(input, sanitize, transport).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    match outcome {
        Ok(TitleOutcome::Title(formatted)) => OperationResult::new("title", input, formatted),
        Ok(TitleOutcome::Unmatched(input)) => {
            eprintln!("didn't match {input}");
            OperationResult::passthrough("title", &input)
        }
        Err(e) => {
            report_failure(&e);
            OperationResult::passthrough("title", input)
        }
    }
}
