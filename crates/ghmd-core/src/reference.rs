// SPDX-License-Identifier: Apache-2.0

//! Typed references to GitHub issues, pull requests and discussions.

use std::fmt;

use serde::Serialize;

/// Base URL that item URLs are rendered against.
pub const GITHUB_BASE_URL: &str = "https://github.com";

/// Discriminator for GitHub reference type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// Issue reference. Shorthand references start out as issues.
    Issue,
    /// Pull request reference.
    PullRequest,
    /// Discussion reference.
    Discussion,
}

impl ReferenceKind {
    /// Returns the display name for this reference kind.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            ReferenceKind::Issue => "issue",
            ReferenceKind::PullRequest => "pull request",
            ReferenceKind::Discussion => "discussion",
        }
    }

    /// Returns the URL path segment for this reference kind.
    #[must_use]
    pub fn url_segment(&self) -> &'static str {
        match self {
            ReferenceKind::Issue => "issues",
            ReferenceKind::PullRequest => "pull",
            ReferenceKind::Discussion => "discussions",
        }
    }

    /// Maps a URL path segment back to its kind.
    #[must_use]
    pub fn from_url_segment(segment: &str) -> Option<Self> {
        match segment {
            "issues" => Some(ReferenceKind::Issue),
            "pull" => Some(ReferenceKind::PullRequest),
            "discussions" => Some(ReferenceKind::Discussion),
            _ => None,
        }
    }
}

/// A pointer to one item on github.com.
///
/// Two references with equal fields are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reference {
    /// Item kind.
    pub kind: ReferenceKind,
    /// Namespace or organization segment.
    pub owner: String,
    /// Repository segment.
    pub repo: String,
    /// Sequence number within the kind's numbering space.
    pub number: u64,
}

impl Reference {
    /// Creates a reference of the given kind.
    pub fn new(
        kind: ReferenceKind,
        owner: impl Into<String>,
        repo: impl Into<String>,
        number: u64,
    ) -> Self {
        Self {
            kind,
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }

    /// Shorthand for [`Reference::new`] with [`ReferenceKind::Issue`].
    pub fn issue(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self::new(ReferenceKind::Issue, owner, repo, number)
    }

    /// Shorthand for [`Reference::new`] with [`ReferenceKind::PullRequest`].
    pub fn pull_request(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self::new(ReferenceKind::PullRequest, owner, repo, number)
    }

    /// Shorthand for [`Reference::new`] with [`ReferenceKind::Discussion`].
    pub fn discussion(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self::new(ReferenceKind::Discussion, owner, repo, number)
    }

    /// Returns the same item re-tagged with another kind.
    #[must_use]
    pub fn with_kind(&self, kind: ReferenceKind) -> Self {
        Self {
            kind,
            ..self.clone()
        }
    }

    /// Renders `owner/repo#number`.
    #[must_use]
    pub fn shorthand(&self) -> String {
        format!("{}/{}#{}", self.owner, self.repo, self.number)
    }

    /// Renders the canonical github.com URL of the item.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "{GITHUB_BASE_URL}/{}/{}/{}/{}",
            self.owner,
            self.repo,
            self.kind.url_segment(),
            self.number
        )
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}
