// SPDX-License-Identifier: Apache-2.0

//! Token provider abstraction for credential resolution.
//!
//! This module defines the `TokenProvider` trait, which abstracts where the
//! GitHub token comes from. The CLI resolves it from the environment and the
//! GitHub CLI; tests and embedders can supply their own.

use secrecy::SecretString;

/// Provides GitHub credentials for API calls.
///
/// Implementations should handle credential lookup and return `None` if
/// credentials are not available.
pub trait TokenProvider: Send + Sync {
    /// Retrieves the GitHub API token.
    ///
    /// Returns `None` if no token is available from any source.
    fn github_token(&self) -> Option<SecretString>;
}

/// A provider that always returns the same token.
pub struct StaticTokenProvider(SecretString);

impl StaticTokenProvider {
    /// Wraps a fixed token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }
}

impl TokenProvider for StaticTokenProvider {
    fn github_token(&self) -> Option<SecretString> {
        Some(self.0.clone())
    }
}
