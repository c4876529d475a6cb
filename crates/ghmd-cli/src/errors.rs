// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `GhmdError` (or a bare `TransportError`) and
//! appends a hint for the failures a user can act on.

use anyhow::Error;
use ghmd_core::config::config_file_path;
use ghmd_core::error::{GhmdError, TransportError};

/// Formats an error for CLI display with helpful hints.
///
/// If the error is neither a `GhmdError` nor a `TransportError`, returns the
/// original error message.
pub fn format_error(error: &Error) -> String {
    if let Some(ghmd_err) = error.downcast_ref::<GhmdError>() {
        format_ghmd_error(ghmd_err)
    } else if let Some(transport_err) = error.downcast_ref::<TransportError>() {
        format_transport_error(transport_err)
    } else {
        error.to_string()
    }
}

/// Formats a library error with a hint where one helps.
pub fn format_ghmd_error(error: &GhmdError) -> String {
    match error {
        GhmdError::InvalidNumber { .. } => error.to_string(),
        GhmdError::NotFound { .. } => format!(
            "{error}\n\nTip: Check the owner, repository and number. Private repositories need a token that can read them."
        ),
        GhmdError::Transport(transport_err) => format_transport_error(transport_err),
        GhmdError::Config { .. } => format!(
            "{error}\n\nTip: Check your config file at {}",
            config_file_path().display()
        ),
    }
}

fn format_transport_error(error: &TransportError) -> String {
    match error {
        TransportError::NotAuthenticated => error.to_string(),
        TransportError::Authentication { .. } => {
            format!("{error}\n\nTip: Check your GitHub token with `gh auth status`.")
        }
        TransportError::Api { .. } => format!(
            "{error}\n\nTip: Check that the repository exists and your token can read it."
        ),
        TransportError::Network { .. } => {
            format!("{error}\n\nTip: Check your internet connection and try again.")
        }
        TransportError::Timeout { .. } => format!(
            "{error}\n\nTip: Raise github.api_timeout_seconds in {} or set GHMD_GITHUB__API_TIMEOUT_SECONDS.",
            config_file_path().display()
        ),
        TransportError::MalformedResponse(_) => {
            format!("{error}\n\nTip: Try again with --no-cache.")
        }
    }
}
