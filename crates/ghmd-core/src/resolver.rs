// SPDX-License-Identifier: Apache-2.0

//! Title resolution for matched references.
//!
//! Each reference costs one GraphQL round trip. The response is decoded into
//! one optional title per branch (issue, pull request, discussion) and the
//! populated branch decides both the title and the item's actual kind.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{GhmdError, TransportError};
use crate::github::graphql::{IssueOrPullRequest, RepositoryTitles, TitleQueryData, title_request};
use crate::github::transport::{GraphqlResponse, GraphqlTransport};
use crate::reference::{Reference, ReferenceKind};

/// A reference together with its resolved title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    /// The reference, re-tagged with the kind the server reported.
    pub reference: Reference,
    /// Item title as returned by GitHub.
    pub title: String,
}

/// One optional title per union branch. Empty titles count as absent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TitleBranches {
    /// Title from the `... on Issue` branch.
    pub issue: Option<String>,
    /// Title from the `... on PullRequest` branch.
    pub pull_request: Option<String>,
    /// Title from the `discussion` field.
    pub discussion: Option<String>,
}

impl TitleBranches {
    /// Decodes the branches out of a raw response.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::MalformedResponse` if the data document does
    /// not have the title query shape.
    pub fn from_response(response: &GraphqlResponse) -> Result<Self, TransportError> {
        let repository = response
            .data_as::<TitleQueryData>()?
            .and_then(|data| data.repository)
            .unwrap_or_default();
        Ok(Self::from(repository))
    }

    /// Number of populated branches.
    #[must_use]
    pub fn populated(&self) -> usize {
        [&self.issue, &self.pull_request, &self.discussion]
            .into_iter()
            .filter(|branch| branch.is_some())
            .count()
    }

    /// Picks the populated branch.
    ///
    /// At most one branch is expected. If an issue or pull request and a
    /// discussion both answer for the same number, the issue or pull request
    /// wins.
    #[must_use]
    pub fn into_title(self) -> Option<(ReferenceKind, String)> {
        if self.populated() > 1 {
            debug!(branches = ?self, "More than one title branch populated");
        }

        self.issue
            .map(|title| (ReferenceKind::Issue, title))
            .or_else(|| {
                self.pull_request
                    .map(|title| (ReferenceKind::PullRequest, title))
            })
            .or_else(|| self.discussion.map(|title| (ReferenceKind::Discussion, title)))
    }
}

impl From<RepositoryTitles> for TitleBranches {
    fn from(repository: RepositoryTitles) -> Self {
        let (issue, pull_request) = match repository.issue_or_pull_request {
            Some(IssueOrPullRequest::Issue(node)) => (Some(node.title), None),
            Some(IssueOrPullRequest::PullRequest(node)) => (None, Some(node.title)),
            None => (None, None),
        };

        Self {
            issue: non_empty(issue),
            pull_request: non_empty(pull_request),
            discussion: non_empty(repository.discussion.map(|node| node.title)),
        }
    }
}

fn non_empty(title: Option<String>) -> Option<String> {
    title.filter(|t| !t.is_empty())
}

/// Resolves a reference to its title and actual kind.
///
/// An issue-typed reference may come back as a pull request or a
/// discussion; the returned reference carries the kind that answered.
///
/// # Errors
///
/// - `GhmdError::NotFound` if the query ran but no branch holds a title.
///   `NOT_FOUND` GraphQL errors for the unmatched branches are expected and
///   do not count as failures.
/// - `GhmdError::Transport` for transport failures, and for GraphQL errors
///   other than `NOT_FOUND` when no title came back.
#[instrument(skip_all, fields(reference = %reference, kind = reference.kind.display_name()))]
pub async fn resolve(
    reference: &Reference,
    transport: &dyn GraphqlTransport,
) -> Result<Resolved, GhmdError> {
    let request = title_request(reference);
    let response = transport.execute(&request).await?;
    let branches = TitleBranches::from_response(&response)?;

    if let Some((kind, title)) = branches.into_title() {
        debug!(resolved_kind = kind.display_name(), "Resolved title");
        return Ok(Resolved {
            reference: reference.with_kind(kind),
            title,
        });
    }

    if response.only_not_found_errors() {
        debug!("No title branch populated");
        return Err(GhmdError::NotFound {
            reference: reference.shorthand(),
        });
    }

    Err(TransportError::Api {
        message: response.error_summary(),
    }
    .into())
}

/// Resolves a reference to its title.
///
/// # Errors
///
/// Same as [`resolve`].
pub async fn resolve_title(
    reference: &Reference,
    transport: &dyn GraphqlTransport,
) -> Result<String, GhmdError> {
    resolve(reference, transport).await.map(|resolved| resolved.title)
}
