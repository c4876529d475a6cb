// SPDX-License-Identifier: Apache-2.0

//! Title clean-up for embedding in markdown link text and file names.

use std::sync::LazyLock;

use regex::Regex;

/// Replacement for `::` when a title holds more than one of them.
pub const PATH_SEPARATOR_REPLACEMENT: &str = "|";

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static COLON_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":+").expect("colon run pattern is valid"));

/// Sanitizes a title for use as markdown link text.
///
/// - Collapses every whitespace run to a single space.
/// - Replaces `[` and `]` with `(` and `)` so the enclosing link survives.
/// - When `::` appears more than once, replaces each with
///   [`PATH_SEPARATOR_REPLACEMENT`].
///
/// Applying it twice gives the same result as applying it once.
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    let title = WHITESPACE.replace_all(title, " ");
    let title = title.replace('[', "(").replace(']', ")");
    if title.matches("::").count() > 1 {
        title.replace("::", PATH_SEPARATOR_REPLACEMENT)
    } else {
        title
    }
}

/// Sanitizes a title for use as a single file path component.
///
/// Runs of `:` and every `/` become `" - "` and `?` is dropped, then the
/// markdown rules of [`sanitize_title`] apply.
#[must_use]
pub fn sanitize_path_component(title: &str) -> String {
    let title = COLON_RUN.replace_all(title, " - ");
    let title = title.replace('/', " - ").replace('?', "");
    sanitize_title(&title)
}
