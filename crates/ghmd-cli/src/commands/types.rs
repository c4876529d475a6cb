// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! Handlers return data instead of printing directly; `output` renders it.

use ghmd_core::{Formatted, Reference};
use serde::Serialize;

/// Result of the link, ref, title and url commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OperationResult {
    /// Command that produced the result.
    pub command: &'static str,
    /// Input as given on the command line.
    pub input: String,
    /// Rendered output; the input itself when nothing matched or resolution failed.
    pub output: String,
    /// Matched reference, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
    /// Resolved title, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl OperationResult {
    /// Wraps a formatted operation output.
    pub fn new(command: &'static str, input: &str, formatted: Formatted) -> Self {
        Self {
            command,
            input: input.to_string(),
            output: formatted.output,
            reference: formatted.reference,
            title: formatted.title,
        }
    }

    /// Echoes the input unchanged.
    pub fn passthrough(command: &'static str, input: &str) -> Self {
        Self {
            command,
            input: input.to_string(),
            output: input.to_string(),
            reference: None,
            title: None,
        }
    }
}
