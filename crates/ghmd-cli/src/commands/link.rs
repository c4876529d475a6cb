// SPDX-License-Identifier: Apache-2.0

//! `link` command: render a markdown link, with the title unless `--simple`.

use ghmd_core::GraphqlTransport;

use super::types::OperationResult;
use super::{maybe_spinner, report_failure};
use crate::cli::OutputContext;

/// Converts the input into a markdown link.
pub async fn run(
    input: &str,
    simple: bool,
    transport: &dyn GraphqlTransport,
    ctx: &OutputContext,
) -> OperationResult {
    let spinner = if simple {
        None
    } else {
        maybe_spinner(ctx, "Fetching title...")
    };
    let outcome = ghmd_core::format::link(input, simple, transport).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    match outcome {
        Ok(formatted) => OperationResult::new("link", input, formatted),
        Err(e) => {
            report_failure(&e);
            OperationResult::passthrough("link", input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{CannedTransport, quiet_ctx};
    use serde_json::json;

    #[tokio::test]
    async fn test_link_with_title() {
        let transport = CannedTransport(Some(json!({
            "data": { "repository": {
                "issueOrPullRequest": { "__typename": "PullRequest", "title": "Tweak flags language" }
            }}
        })));

        let result = run("https://github.com/cli/cli/pull/123", false, &transport, &quiet_ctx()).await;

        assert_eq!(
            result.output,
            "[cli/cli#123: Tweak flags language](https://github.com/cli/cli/pull/123)"
        );
        assert_eq!(result.title.as_deref(), Some("Tweak flags language"));
    }

    #[tokio::test]
    async fn test_link_failure_echoes_input() {
        let result = run("cli/cli#123", false, &CannedTransport(None), &quiet_ctx()).await;

        assert_eq!(result.output, "cli/cli#123");
        assert!(result.title.is_none());
    }

    #[tokio::test]
    async fn test_simple_link_skips_transport() {
        let result = run("cli/cli#123", true, &CannedTransport(None), &quiet_ctx()).await;

        assert_eq!(
            result.output,
            "[cli/cli#123](https://github.com/cli/cli/issues/123)"
        );
    }
}
