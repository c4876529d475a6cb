// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the gh-md CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging to
//! stderr, so stdout carries nothing but the command's output.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! gh-md link cli/cli#123
//!
//! # Debug output for troubleshooting
//! gh-md -v link cli/cli#123
//!
//! # Full control
//! RUST_LOG=ghmd_core=trace,octocrab=debug gh-md link cli/cli#123
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directives.
const DEFAULT_FILTER: &str = "ghmd_core=warn,gh_md=warn,octocrab=error";

/// Filter directives with `-v`.
const VERBOSE_FILTER: &str = "ghmd_core=debug,gh_md=debug,octocrab=info";

/// Picks the filter directives for the given verbosity.
fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` takes precedence over the `-v` flag when set.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
