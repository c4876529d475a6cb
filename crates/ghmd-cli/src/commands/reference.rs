// SPDX-License-Identifier: Apache-2.0

//! `ref` command: render the `owner/repo#number` shorthand.

use super::types::OperationResult;

/// Converts the input into a reference.
pub fn run(input: &str) -> OperationResult {
    OperationResult::new("ref", input, ghmd_core::format::reference(input))
}
