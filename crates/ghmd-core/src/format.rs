// SPDX-License-Identifier: Apache-2.0

//! User-facing operations: link, reference, title and URL.
//!
//! Every operation takes one input string. Input without a reference is
//! returned verbatim; only `title` reports it separately so the caller can
//! print a diagnostic.

use serde::Serialize;
use tracing::instrument;

use crate::error::GhmdError;
use crate::github::transport::GraphqlTransport;
use crate::matcher::{find_reference, match_reference};
use crate::reference::Reference;
use crate::resolver::resolve;
use crate::sanitize::{sanitize_path_component, sanitize_title};

/// Output of an operation plus what it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Formatted {
    /// Rendered output string.
    pub output: String,
    /// Matched reference, refined to its actual kind when resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
    /// Raw title, when one was resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Formatted {
    fn passthrough(input: &str) -> Self {
        Self {
            output: input.to_string(),
            reference: None,
            title: None,
        }
    }
}

/// Result of the title operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleOutcome {
    /// No reference in the input; carries the input unchanged.
    Unmatched(String),
    /// The title was resolved.
    Title(Formatted),
}

impl TitleOutcome {
    /// The string to print: the title, or the input when unmatched.
    #[must_use]
    pub fn output(&self) -> &str {
        match self {
            Self::Unmatched(input) => input,
            Self::Title(formatted) => &formatted.output,
        }
    }
}

/// Renders `[<reference>](<url>)`, or `[<reference>: <title>](<url>)` with a
/// title. The title is sanitized for link text.
#[must_use]
pub fn markdown_link(reference: &Reference, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("[{reference}: {}]({})", sanitize_title(title), reference.url()),
        None => format!("[{reference}]({})", reference.url()),
    }
}

/// Shorthand form of the reference in `input`.
///
/// The digits are rendered as written, so a number too large to resolve
/// still renders; `reference` is then `None`.
#[must_use]
pub fn reference(input: &str) -> Formatted {
    match find_reference(input) {
        Some(raw) => Formatted {
            output: raw.shorthand(),
            reference: raw.parse().ok(),
            title: None,
        },
        None => Formatted::passthrough(input),
    }
}

/// Canonical URL of the reference in `input`.
///
/// Like [`reference`], never fails on the number.
#[must_use]
pub fn url(input: &str) -> Formatted {
    match find_reference(input) {
        Some(raw) => Formatted {
            output: raw.url(),
            reference: raw.parse().ok(),
            title: None,
        },
        None => Formatted::passthrough(input),
    }
}

/// Markdown link for the reference in `input`.
///
/// With `simple` the transport is never touched. Otherwise the title is
/// resolved and the link points at the URL of the kind GitHub reported.
///
/// # Errors
///
/// Returns `GhmdError::InvalidNumber`, or the resolver's `NotFound` and
/// `Transport` errors when not `simple`.
#[instrument(skip(transport))]
pub async fn link(
    input: &str,
    simple: bool,
    transport: &dyn GraphqlTransport,
) -> Result<Formatted, GhmdError> {
    let Some(reference) = match_reference(input)? else {
        return Ok(Formatted::passthrough(input));
    };

    if simple {
        return Ok(Formatted {
            output: markdown_link(&reference, None),
            reference: Some(reference),
            title: None,
        });
    }

    let resolved = resolve(&reference, transport).await?;
    Ok(Formatted {
        output: markdown_link(&resolved.reference, Some(&resolved.title)),
        reference: Some(resolved.reference),
        title: Some(resolved.title),
    })
}

/// Title of the reference in `input`, sanitized for file names when
/// `sanitize` is set.
///
/// # Errors
///
/// Returns `GhmdError::InvalidNumber`, `GhmdError::NotFound` or
/// `GhmdError::Transport`.
#[instrument(skip(transport))]
pub async fn title(
    input: &str,
    sanitize: bool,
    transport: &dyn GraphqlTransport,
) -> Result<TitleOutcome, GhmdError> {
    let Some(reference) = match_reference(input)? else {
        return Ok(TitleOutcome::Unmatched(input.to_string()));
    };

    let resolved = resolve(&reference, transport).await?;
    let output = if sanitize {
        sanitize_path_component(&resolved.title)
    } else {
        resolved.title.clone()
    };

    Ok(TitleOutcome::Title(Formatted {
        output,
        reference: Some(resolved.reference),
        title: Some(resolved.title),
    }))
}

/// Renders `owner/repo#number`, or returns `input` unchanged.
#[must_use]
pub fn to_reference(input: &str) -> String {
    reference(input).output
}

/// Renders the canonical item URL, or returns `input` unchanged.
#[must_use]
pub fn to_url(input: &str) -> String {
    url(input).output
}

/// Renders a markdown link, or returns `input` unchanged.
///
/// # Errors
///
/// See [`link`].
pub async fn to_link(
    input: &str,
    simple: bool,
    transport: &dyn GraphqlTransport,
) -> Result<String, GhmdError> {
    link(input, simple, transport).await.map(|f| f.output)
}

/// Resolves the title of the reference in `input`.
///
/// # Errors
///
/// See [`title`].
pub async fn to_title(
    input: &str,
    sanitize: bool,
    transport: &dyn GraphqlTransport,
) -> Result<TitleOutcome, GhmdError> {
    title(input, sanitize, transport).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::github::transport::{GraphqlRequest, GraphqlResponse};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    /// Fails the test if any request is made.
    struct NoNetwork;

    #[async_trait]
    impl GraphqlTransport for NoNetwork {
        async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, TransportError> {
            panic!("unexpected GraphQL request {}", request.operation_name)
        }
    }

    struct Fixture(Value);

    #[async_trait]
    impl GraphqlTransport for Fixture {
        async fn execute(&self, _: &GraphqlRequest) -> Result<GraphqlResponse, TransportError> {
            Ok(serde_json::from_value(self.0.clone()).unwrap())
        }
    }

    fn pull_request_fixture(title: &str) -> Fixture {
        Fixture(json!({
            "data": { "repository": {
                "issueOrPullRequest": { "__typename": "PullRequest", "title": title },
                "discussion": null
            }},
            "errors": [{ "type": "NOT_FOUND", "message": "Could not resolve to a Discussion." }]
        }))
    }

    #[test]
    fn reference_from_shorthand() {
        assert_eq!(to_reference("cli/cli#123"), "cli/cli#123");
    }

    #[test]
    fn reference_from_url() {
        assert_eq!(
            to_reference("https://github.com/cli/cli/pull/123#issuecomment-1"),
            "cli/cli#123"
        );
    }

    #[test]
    fn url_from_shorthand_uses_issues_segment() {
        assert_eq!(
            to_url("cli/cli#123"),
            "https://github.com/cli/cli/issues/123"
        );
    }

    #[test]
    fn url_from_markdown_link_prefers_embedded_url() {
        assert_eq!(
            to_url("[owner/repo#123: t](https://github.com/another/repo/pull/456)"),
            "https://github.com/another/repo/pull/456"
        );
    }

    #[test]
    fn unmatched_input_passes_through() {
        for input in ["", "hello world", "no refs here: #12", "a/b", "https://example.com/x"] {
            assert_eq!(to_reference(input), input);
            assert_eq!(to_url(input), input);
            assert_eq!(reference(input).reference, None);
        }
    }

    #[test]
    fn overflowing_number_renders_digits() {
        let input = "cli/cli#99999999999999999999999";
        assert_eq!(to_reference(input), input);
        assert_eq!(
            to_url(input),
            "https://github.com/cli/cli/issues/99999999999999999999999"
        );
        assert_eq!(reference(input).reference, None);
    }

    #[tokio::test]
    async fn overflowing_number_fails_to_resolve() {
        let err = to_title("cli/cli#99999999999999999999999", false, &NoNetwork)
            .await
            .unwrap_err();
        assert!(matches!(err, GhmdError::InvalidNumber { .. }));
    }

    #[tokio::test]
    async fn simple_link_from_url() {
        assert_eq!(
            to_link("https://github.com/cli/cli/pull/123", true, &NoNetwork)
                .await
                .unwrap(),
            "[cli/cli#123](https://github.com/cli/cli/pull/123)"
        );
    }

    #[tokio::test]
    async fn unmatched_link_passes_through_without_network() {
        assert_eq!(
            to_link("just text", false, &NoNetwork).await.unwrap(),
            "just text"
        );
    }

    #[tokio::test]
    async fn link_with_title_uses_refined_url() {
        let formatted = link("github/scientist#175", false, &pull_request_fixture("Add Ruby 3.1 to CI"))
            .await
            .unwrap();

        assert_eq!(
            formatted.output,
            "[github/scientist#175: Add Ruby 3.1 to CI](https://github.com/github/scientist/pull/175)"
        );
        assert_eq!(formatted.title.as_deref(), Some("Add Ruby 3.1 to CI"));
    }

    #[tokio::test]
    async fn link_sanitizes_title() {
        let output = to_link(
            "https://github.com/o/r/pull/1",
            false,
            &pull_request_fixture("[WIP]  a::b::c"),
        )
        .await
        .unwrap();

        assert_eq!(output, "[o/r#1: (WIP) a|b|c](https://github.com/o/r/pull/1)");
    }

    #[tokio::test]
    async fn title_raw_and_sanitized() {
        let fixture = pull_request_fixture("Fix: handle a/b paths?");

        let raw = to_title("o/r#1", false, &fixture).await.unwrap();
        assert_eq!(raw.output(), "Fix: handle a/b paths?");

        let sanitized = to_title("o/r#1", true, &fixture).await.unwrap();
        assert_eq!(sanitized.output(), "Fix - handle a - b paths");
    }

    #[tokio::test]
    async fn title_of_unmatched_input() {
        let outcome = to_title("nothing to see", true, &NoNetwork).await.unwrap();
        assert_eq!(outcome, TitleOutcome::Unmatched("nothing to see".to_string()));
        assert_eq!(outcome.output(), "nothing to see");
    }

    #[tokio::test]
    async fn title_not_found_propagates() {
        let fixture = Fixture(json!({
            "data": { "repository": null },
            "errors": [{ "type": "NOT_FOUND", "message": "Could not resolve to a Repository." }]
        }));

        let err = to_title("o/r#1", false, &fixture).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn markdown_link_forms() {
        let reference = Reference::discussion("cli", "cli", 2673);
        assert_eq!(
            markdown_link(&reference, None),
            "[cli/cli#2673](https://github.com/cli/cli/discussions/2673)"
        );
        assert_eq!(
            markdown_link(&reference, Some("Upgrade\ncommand")),
            "[cli/cli#2673: Upgrade command](https://github.com/cli/cli/discussions/2673)"
        );
    }
}
