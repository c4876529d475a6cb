// SPDX-License-Identifier: Apache-2.0

//! GitHub token lookup.
//!
//! `GH_TOKEN` wins over `GITHUB_TOKEN`, and both win over the token stored by
//! the GitHub CLI. That is the order `gh` itself uses, so `gh md` sees the
//! same identity as the `gh` that launched it.

use std::process::{Command, Output};

use secrecy::SecretString;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::auth::TokenProvider;

/// Environment variables checked for a token, highest priority first.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Host passed to `gh auth token`.
const GH_HOSTNAME: &str = "github.com";

/// Where the token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    /// One of [`TOKEN_ENV_VARS`].
    Environment,
    /// `gh auth token`.
    GhCli,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TokenSource::Environment => "environment variable",
            TokenSource::GhCli => "GitHub CLI",
        })
    }
}

/// First non-empty token among [`TOKEN_ENV_VARS`].
fn token_from_env() -> Option<SecretString> {
    TOKEN_ENV_VARS.iter().find_map(|var| {
        std::env::var(var)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .map(|token| {
                debug!(var, "Found token in environment");
                SecretString::from(token.trim().to_string())
            })
    })
}

/// Extracts the token from `gh auth token` output.
fn parse_gh_output(output: &Output) -> Option<SecretString> {
    if !output.status.success() {
        debug!(
            status = ?output.status,
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "gh auth token exited unsuccessfully"
        );
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let token = stdout.lines().next().map(str::trim).unwrap_or_default();
    if token.is_empty() {
        debug!("gh auth token printed nothing");
        None
    } else {
        Some(SecretString::from(token.to_string()))
    }
}

/// Asks the GitHub CLI for its stored token.
///
/// `None` when `gh` is missing, logged out, or fails.
#[instrument]
fn token_from_gh_cli() -> Option<SecretString> {
    match Command::new("gh")
        .args(["auth", "token", "--hostname", GH_HOSTNAME])
        .output()
    {
        Ok(output) => parse_gh_output(&output),
        Err(e) => {
            debug!(error = %e, "Could not run gh");
            None
        }
    }
}

/// Resolves a GitHub token and reports where it came from.
#[instrument]
pub fn resolve_token() -> Option<(SecretString, TokenSource)> {
    let resolved = token_from_env()
        .map(|token| (token, TokenSource::Environment))
        .or_else(|| token_from_gh_cli().map(|token| (token, TokenSource::GhCli)));

    match &resolved {
        Some((_, source)) => debug!(%source, "Resolved GitHub token"),
        None => debug!("No GitHub token available"),
    }
    resolved
}

/// [`TokenProvider`] backed by [`resolve_token`].
pub struct EnvTokenProvider;

impl TokenProvider for EnvTokenProvider {
    fn github_token(&self) -> Option<SecretString> {
        resolve_token().map(|(token, _source)| token)
    }
}
