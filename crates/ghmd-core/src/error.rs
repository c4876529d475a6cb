// SPDX-License-Identifier: Apache-2.0

//! Error types for gh-md.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.
//!
//! "No match" is deliberately absent: an input without a reference is not an
//! error and is passed through unchanged by every operation.

use thiserror::Error;

/// Errors that can occur while matching or resolving a reference.
#[derive(Error, Debug)]
pub enum GhmdError {
    /// A captured number segment could not be parsed as an integer.
    #[error("Invalid item number '{value}'")]
    InvalidNumber {
        /// The captured digit run.
        value: String,
    },

    /// The title query ran cleanly but no branch held a title.
    #[error("Could not resolve a title for {reference}")]
    NotFound {
        /// Shorthand form of the reference that was looked up.
        reference: String,
    },

    /// The GraphQL transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

/// Failures raised by the GraphQL transport collaborator.
#[derive(Error, Debug)]
pub enum TransportError {
    /// No GitHub token was found in any source.
    #[error(
        "Authentication required - run `gh auth login` first, or set the GH_TOKEN environment variable"
    )]
    NotAuthenticated,

    /// GitHub rejected the token (HTTP 401/403).
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// Message returned by GitHub.
        message: String,
    },

    /// GitHub returned an API or GraphQL error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Message returned by GitHub.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("Network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The request did not complete within the configured deadline.
    #[error("GitHub request timed out after {seconds}s")]
    Timeout {
        /// Configured deadline in seconds.
        seconds: u64,
    },

    /// The response document did not have the expected shape.
    #[error("Malformed GraphQL response")]
    MalformedResponse(#[source] serde_json::Error),
}

impl From<octocrab::Error> for TransportError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. } => {
                if matches!(source.status_code.as_u16(), 401 | 403) {
                    TransportError::Authentication {
                        message: source.message.clone(),
                    }
                } else {
                    TransportError::Api {
                        message: source.message.clone(),
                    }
                }
            }
            octocrab::Error::Json { .. } | octocrab::Error::Serde { .. } => TransportError::Api {
                message: err.to_string(),
            },
            _ => TransportError::Network {
                message: err.to_string(),
            },
        }
    }
}

impl From<config::ConfigError> for GhmdError {
    fn from(err: config::ConfigError) -> Self {
        GhmdError::Config {
            message: err.to_string(),
        }
    }
}

impl GhmdError {
    /// Returns true when the error means the item simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, GhmdError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_reference() {
        let err = GhmdError::NotFound {
            reference: "cli/cli#123".to_string(),
        };
        assert_eq!(err.to_string(), "Could not resolve a title for cli/cli#123");
        assert!(err.is_not_found());
    }

    #[test]
    fn transport_error_is_transparent() {
        let err = GhmdError::from(TransportError::Timeout { seconds: 10 });
        assert_eq!(err.to_string(), "GitHub request timed out after 10s");
        assert!(!err.is_not_found());
    }

    #[test]
    fn config_error_converts() {
        let err = GhmdError::from(config::ConfigError::Message("bad key".to_string()));
        assert!(matches!(err, GhmdError::Config { .. }));
        assert!(err.to_string().contains("bad key"));
    }
}
