// SPDX-License-Identifier: Apache-2.0

//! GraphQL documents for title lookups.
//!
//! Issues and pull requests share one numbering space, so an issue-typed
//! reference asks for `issueOrPullRequest` (a union) and lets the server say
//! which one it is. Discussions are numbered independently and come from
//! their own `discussion` field.

use serde::Deserialize;

use crate::reference::{Reference, ReferenceKind};

use super::transport::GraphqlRequest;

/// Union lookup for issue-typed references, plus the discussion branch.
pub const ISSUE_TITLE_QUERY: &str = r"query IssueTitle($owner: String!, $name: String!, $number: Int!) {
  repository(owner: $owner, name: $name) {
    issueOrPullRequest(number: $number) {
      __typename
      ... on Issue { title }
      ... on PullRequest { title }
    }
    discussion(number: $number) { title }
  }
}";

/// Union lookup for pull-request-typed references.
pub const PULL_REQUEST_TITLE_QUERY: &str = r"query PullRequestTitle($owner: String!, $name: String!, $number: Int!) {
  repository(owner: $owner, name: $name) {
    issueOrPullRequest(number: $number) {
      __typename
      ... on Issue { title }
      ... on PullRequest { title }
    }
  }
}";

/// Discussion lookup.
pub const DISCUSSION_TITLE_QUERY: &str = r"query DiscussionTitle($owner: String!, $name: String!, $number: Int!) {
  repository(owner: $owner, name: $name) {
    discussion(number: $number) { title }
  }
}";

/// Builds the title request for a reference.
#[must_use]
pub fn title_request(reference: &Reference) -> GraphqlRequest {
    let (operation, query) = match reference.kind {
        ReferenceKind::Issue => ("IssueTitle", ISSUE_TITLE_QUERY),
        ReferenceKind::PullRequest => ("PullRequestTitle", PULL_REQUEST_TITLE_QUERY),
        ReferenceKind::Discussion => ("DiscussionTitle", DISCUSSION_TITLE_QUERY),
    };

    GraphqlRequest::new(operation, query)
        .variable("owner", reference.owner.as_str())
        .variable("name", reference.repo.as_str())
        .variable("number", reference.number)
}

/// Top-level `data` document of every title query.
#[derive(Debug, Deserialize)]
pub struct TitleQueryData {
    /// `null` when the repository does not exist or is not visible.
    pub repository: Option<RepositoryTitles>,
}

/// The repository node; each field is absent when not selected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryTitles {
    /// The issue-or-pull-request union.
    #[serde(default)]
    pub issue_or_pull_request: Option<IssueOrPullRequest>,
    /// The discussion with the same number.
    #[serde(default)]
    pub discussion: Option<TitleNode>,
}

/// Concrete member of the `IssueOrPullRequest` union.
#[derive(Debug, Deserialize)]
#[serde(tag = "__typename")]
pub enum IssueOrPullRequest {
    /// The number belongs to an issue.
    Issue(TitleNode),
    /// The number belongs to a pull request.
    PullRequest(TitleNode),
}

/// Any node with a title.
#[derive(Debug, Deserialize)]
pub struct TitleNode {
    /// Item title.
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn issue_request_selects_union_and_discussion() {
        let request = title_request(&Reference::issue("github", "scientist", 174));

        assert_eq!(request.operation_name, "IssueTitle");
        assert!(request.query.contains("issueOrPullRequest(number: $number)"));
        assert!(request.query.contains("discussion(number: $number)"));
        assert_eq!(request.variables["owner"], "github");
        assert_eq!(request.variables["name"], "scientist");
        assert_eq!(request.variables["number"], 174);
    }

    #[test]
    fn pull_request_request_skips_discussion() {
        let request = title_request(&Reference::pull_request("github", "scientist", 175));

        assert_eq!(request.operation_name, "PullRequestTitle");
        assert!(request.query.contains("issueOrPullRequest"));
        assert!(!request.query.contains("discussion"));
    }

    #[test]
    fn discussion_request_skips_union() {
        let request = title_request(&Reference::discussion("cli", "cli", 2673));

        assert_eq!(request.operation_name, "DiscussionTitle");
        assert!(!request.query.contains("issueOrPullRequest"));
        assert!(request.query.contains("discussion(number: $number)"));
    }

    #[test]
    fn union_decodes_by_typename() {
        let data: TitleQueryData = serde_json::from_value(json!({
            "repository": {
                "issueOrPullRequest": { "__typename": "PullRequest", "title": "Add Ruby 3.1 to CI" },
                "discussion": null
            }
        }))
        .unwrap();

        let repository = data.repository.unwrap();
        assert!(matches!(
            repository.issue_or_pull_request,
            Some(IssueOrPullRequest::PullRequest(TitleNode { ref title })) if title == "Add Ruby 3.1 to CI"
        ));
        assert!(repository.discussion.is_none());
    }

    #[test]
    fn missing_fields_decode_as_none() {
        let data: TitleQueryData = serde_json::from_value(json!({
            "repository": { "discussion": { "title": "Upgrade command" } }
        }))
        .unwrap();

        let repository = data.repository.unwrap();
        assert!(repository.issue_or_pull_request.is_none());
        assert_eq!(repository.discussion.unwrap().title, "Upgrade command");
    }
}
