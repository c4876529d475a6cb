// SPDX-License-Identifier: Apache-2.0

//! Reference extraction from free-form text.
//!
//! Two patterns are tried in a fixed order:
//! - Item URL: `https://github.com/owner/repo/{issues,pull,discussions}/123`
//! - Shorthand: `owner/repo#123`
//!
//! A URL anywhere in the input always wins over a shorthand, because only
//! the URL path tells issues, pull requests and discussions apart. Inputs
//! such as `[owner/repo#123: title](https://github.com/owner/repo/pull/123)`
//! therefore classify as a pull request.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, instrument};

use crate::error::GhmdError;
use crate::reference::{GITHUB_BASE_URL, Reference, ReferenceKind};

/// Item URL pattern. The trailing group (query string, anchor, markdown
/// tail) is captured and discarded.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https://github\.com/([^/#?\s]+)/([^/#?\s]+)/(issues|pull|discussions)/([0-9]+)(.*)",
    )
    .expect("URL reference pattern is valid")
});

/// Shorthand pattern, bounded by word boundaries.
static SHORTHAND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([^/#\s]+)/([^/#\s]+)#([0-9]+)\b")
        .expect("shorthand reference pattern is valid")
});

/// A reference as it appears in the input, number still in digit form.
///
/// Rendering the shorthand or the URL never needs the number as an
/// integer, so a digit run too long for `u64` still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawReference<'h> {
    /// Item kind. Shorthands are issues.
    pub kind: ReferenceKind,
    /// Owner segment.
    pub owner: &'h str,
    /// Repository segment.
    pub repo: &'h str,
    /// Digit run of the item number, as written.
    pub digits: &'h str,
}

impl RawReference<'_> {
    /// Renders `owner/repo#digits`.
    #[must_use]
    pub fn shorthand(&self) -> String {
        format!("{}/{}#{}", self.owner, self.repo, self.digits)
    }

    /// Renders the github.com URL of the item.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "{GITHUB_BASE_URL}/{}/{}/{}/{}",
            self.owner,
            self.repo,
            self.kind.url_segment(),
            self.digits
        )
    }

    /// Converts to a typed [`Reference`].
    ///
    /// # Errors
    ///
    /// Returns `GhmdError::InvalidNumber` if the digit run does not fit in a
    /// `u64`.
    pub fn parse(&self) -> Result<Reference, GhmdError> {
        let number = self.digits.parse().map_err(|_| GhmdError::InvalidNumber {
            value: self.digits.to_string(),
        })?;
        Ok(Reference::new(self.kind, self.owner, self.repo, number))
    }
}

/// Finds the first reference in `input`.
///
/// Returns `Ok(None)` when the input holds neither an item URL nor a
/// shorthand; callers pass such input through unchanged.
///
/// # Errors
///
/// Returns `GhmdError::InvalidNumber` if the captured digit run does not fit
/// in a `u64`.
#[instrument(level = "debug", skip_all)]
pub fn match_reference(input: &str) -> Result<Option<Reference>, GhmdError> {
    find_reference(input).map(|raw| raw.parse()).transpose()
}

/// Finds the first reference in `input` without interpreting its number.
#[must_use]
pub fn find_reference(input: &str) -> Option<RawReference<'_>> {
    find_url(input).or_else(|| find_shorthand(input))
}

/// Matches an item URL anywhere in `input`.
///
/// # Errors
///
/// Returns `GhmdError::InvalidNumber` on numeric overflow.
pub fn match_url(input: &str) -> Result<Option<Reference>, GhmdError> {
    find_url(input).map(|raw| raw.parse()).transpose()
}

/// Matches an `owner/repo#number` shorthand anywhere in `input`.
///
/// The result is always an issue: a shorthand cannot tell an issue from a
/// pull request, the resolver sorts that out.
///
/// # Errors
///
/// Returns `GhmdError::InvalidNumber` on numeric overflow.
pub fn match_shorthand(input: &str) -> Result<Option<Reference>, GhmdError> {
    find_shorthand(input).map(|raw| raw.parse()).transpose()
}

fn find_url(input: &str) -> Option<RawReference<'_>> {
    let caps = URL_PATTERN.captures(input)?;
    let kind = ReferenceKind::from_url_segment(group(&caps, 3))?;

    let raw = RawReference {
        kind,
        owner: group(&caps, 1),
        repo: group(&caps, 2),
        digits: group(&caps, 4),
    };
    debug!(
        reference = %raw.shorthand(),
        kind = kind.display_name(),
        "Matched item URL"
    );
    Some(raw)
}

fn find_shorthand(input: &str) -> Option<RawReference<'_>> {
    let caps = SHORTHAND_PATTERN.captures(input)?;

    let raw = RawReference {
        kind: ReferenceKind::Issue,
        owner: group(&caps, 1),
        repo: group(&caps, 2),
        digits: group(&caps, 3),
    };
    debug!(reference = %raw.shorthand(), "Matched shorthand reference");
    Some(raw)
}

fn group<'h>(caps: &Captures<'h>, index: usize) -> &'h str {
    caps.get(index).map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(input: &str) -> Option<Reference> {
        match_reference(input).unwrap()
    }

    #[test]
    fn simple_shorthand() {
        assert_eq!(
            matched("owner/repo#123"),
            Some(Reference::issue("owner", "repo", 123))
        );
    }

    #[test]
    fn shorthand_inside_sentence() {
        assert_eq!(
            matched("see cli/cli#4567 for details"),
            Some(Reference::issue("cli", "cli", 4567))
        );
    }

    #[test]
    fn shorthand_inside_markdown_link_text() {
        assert_eq!(
            matched("[owner/repo#123: title]"),
            Some(Reference::issue("owner", "repo", 123))
        );
    }

    #[test]
    fn no_reference() {
        assert_eq!(matched("whatever / other thing # 123"), None);
        assert_eq!(matched(""), None);
        assert_eq!(matched("https://github.com/owner/repo"), None);
    }

    #[test]
    fn issue_url() {
        assert_eq!(
            matched("https://github.com/owner/repo/issues/123"),
            Some(Reference::issue("owner", "repo", 123))
        );
    }

    #[test]
    fn pull_url() {
        assert_eq!(
            matched("https://github.com/owner/repo/pull/123"),
            Some(Reference::pull_request("owner", "repo", 123))
        );
    }

    #[test]
    fn discussion_url() {
        assert_eq!(
            matched("https://github.com/owner/repo/discussions/123"),
            Some(Reference::discussion("owner", "repo", 123))
        );
    }

    #[test]
    fn url_trailing_segments_are_discarded() {
        assert_eq!(
            matched("https://github.com/owner/repo/pull/123/files?w=1#diff-abc"),
            Some(Reference::pull_request("owner", "repo", 123))
        );
        assert_eq!(
            matched("https://github.com/owner/repo/issues/123#issuecomment-456"),
            Some(Reference::issue("owner", "repo", 123))
        );
    }

    #[test]
    fn issue_url_inside_markdown() {
        assert_eq!(
            matched("[owner/repo#123: title](https://github.com/owner/repo/issues/123)"),
            Some(Reference::issue("owner", "repo", 123))
        );
    }

    #[test]
    fn pull_url_inside_markdown() {
        assert_eq!(
            matched("[owner/repo#123: title](https://github.com/owner/repo/pull/123)"),
            Some(Reference::pull_request("owner", "repo", 123))
        );
    }

    #[test]
    fn url_takes_precedence_over_shorthand() {
        assert_eq!(
            matched("[owner/repo#123: t](https://github.com/another/repo/pull/456)"),
            Some(Reference::pull_request("another", "repo", 456))
        );
        assert_eq!(
            matched("[owner/repo#123: title](https://github.com/another/repo/issues/456)"),
            Some(Reference::issue("another", "repo", 456))
        );
    }

    #[test]
    fn number_is_the_longest_digit_run() {
        assert_eq!(
            matched("https://github.com/o/r/issues/12345"),
            Some(Reference::issue("o", "r", 12345))
        );
        assert_eq!(matched("o/r#987654"), Some(Reference::issue("o", "r", 987_654)));
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(
            matched("a/b#1 and c/d#2"),
            Some(Reference::issue("a", "b", 1))
        );
    }

    #[test]
    fn shorthand_without_number_does_not_match() {
        assert_eq!(matched("owner/repo#abc"), None);
        assert_eq!(matched("owner/repo#"), None);
    }

    #[test]
    fn unsupported_url_kind_falls_back_to_shorthand_search() {
        assert_eq!(matched("https://github.com/owner/repo/commit/abc123"), None);
    }

    #[test]
    fn overflowing_number_is_invalid() {
        let result = match_reference("owner/repo#99999999999999999999999");
        assert!(matches!(result, Err(GhmdError::InvalidNumber { .. })));
    }

    #[test]
    fn overflowing_number_still_renders() {
        let raw = find_reference("owner/repo#99999999999999999999999").unwrap();
        assert_eq!(raw.shorthand(), "owner/repo#99999999999999999999999");
        assert_eq!(
            raw.url(),
            "https://github.com/owner/repo/issues/99999999999999999999999"
        );
        assert!(raw.parse().is_err());
    }

    #[test]
    fn hash_before_owner_is_not_part_of_it() {
        assert_eq!(matched("x#y/z#1"), Some(Reference::issue("y", "z", 1)));
        assert_eq!(matched("see a#b/c#2"), Some(Reference::issue("b", "c", 2)));
    }

    #[test]
    fn url_segments_stop_at_hash_and_query() {
        assert_eq!(matched("https://github.com/o/r#x/issues/3"), None);
        assert_eq!(matched("https://github.com/o/r?q/pull/4"), None);
    }

    #[test]
    fn owner_and_repo_never_contain_separators() {
        for input in [
            "x/y#1",
            "[a/b#2](https://github.com/c/d/pull/3)",
            "https://github.com/e/f/discussions/4?x=/y",
            "see g/h#5.",
            "x#y/z#1",
            "see a#b/c#2",
            "https://github.com/o/r#x/issues/3",
            "https://github.com/o/r?q/pull/4",
            "https://github.com/o#p/r/issues/5 and s/t#6",
        ] {
            let Some(raw) = find_reference(input) else {
                continue;
            };
            for segment in [raw.owner, raw.repo] {
                assert!(!segment.is_empty(), "{input}");
                assert!(!segment.contains(['/', '#', '?']), "{input}: {segment}");
                assert!(!segment.contains(char::is_whitespace), "{input}: {segment}");
            }
        }
    }
}
