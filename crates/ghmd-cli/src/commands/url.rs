// SPDX-License-Identifier: Apache-2.0

//! `url` command: render the canonical GitHub URL.

use super::types::OperationResult;

/// Converts the input into a URL.
pub fn run(input: &str) -> OperationResult {
    OperationResult::new("url", input, ghmd_core::format::url(input))
}
