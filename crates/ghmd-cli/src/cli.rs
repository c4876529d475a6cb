// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for gh-md.
//!
//! Uses clap's derive API. Every operation takes exactly one input string.

use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Extended help text for the generate subcommand with shell-specific examples.
const COMPLETION_GENERATE_HELP: &str = r#"EXAMPLES

  bash
    Add to ~/.bashrc or ~/.bash_profile:
      eval "$(gh-md completion generate bash)"

  zsh
    Generate completion file:
      mkdir -p ~/.zsh/completions
      gh-md completion generate zsh > ~/.zsh/completions/_gh-md

    Add to ~/.zshrc (before compinit):
      fpath=(~/.zsh/completions $fpath)
      autoload -U compinit && compinit -i

  fish
    Generate completion file:
      gh-md completion generate fish > ~/.config/fish/completions/gh-md.fish
"#;

/// Shared description of accepted inputs, spliced into each command's help.
macro_rules! input_forms_help {
    () => {
        "The input can be one of:

   * a GitHub issue URL
   * a GitHub pull request URL
   * a GitHub discussion URL
   * an issue reference (e.g. \"cli/cli#123\")
   * a markdown link containing one of the above

If the input is unrecognized it is returned as-is."
    };
}

const LINK_HELP: &str = concat!(
    input_forms_help!(),
    "

The link text is the reference followed by the title fetched from the
GitHub API. Include --simple to skip the title lookup.

EXAMPLES

   $ gh md link https://github.com/cli/cli/pull/123
   [cli/cli#123: Tweak flags language](https://github.com/cli/cli/pull/123)

   $ gh md link --simple https://github.com/cli/cli/pull/123
   [cli/cli#123](https://github.com/cli/cli/pull/123)

   $ gh md link cli/cli#123
   [cli/cli#123: Tweak flags language](https://github.com/cli/cli/pull/123)"
);

const REF_HELP: &str = concat!(
    input_forms_help!(),
    "

EXAMPLES

   $ gh md ref https://github.com/cli/cli/pull/123
   cli/cli#123"
);

const TITLE_HELP: &str = concat!(
    input_forms_help!(),
    "

With --sanitize, colons and slashes become \" - \" and question marks are
dropped so the title can be used as a file name.

EXAMPLES

   $ gh md title cli/cli#123
   Tweak flags language"
);

const URL_HELP: &str = concat!(
    input_forms_help!(),
    "

References without a URL are assumed to be issues.

EXAMPLES

   $ gh md url cli/cli#123
   https://github.com/cli/cli/issues/123"
);

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one line (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml)
    pub format: OutputFormat,
    /// Enable verbose output (debug-level logging)
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, verbose: bool) -> Self {
        Self {
            format,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.verbose && matches!(self.format, OutputFormat::Text)
    }
}

/// GitHub markdown link tools.
///
/// Turns GitHub issue, pull request and discussion URLs or references into
/// markdown links, references, titles and URLs.
#[derive(Parser)]
#[command(name = "gh-md")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Bypass the GraphQL response cache
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Convert an input URL into a markdown link
    #[command(after_long_help = LINK_HELP)]
    Link {
        /// URL, reference or markdown link
        #[arg(value_name = "INPUT")]
        input: String,

        /// Disable title lookup
        #[arg(long)]
        simple: bool,
    },

    /// Convert an input URL into an issue reference
    #[command(visible_alias = "reference", after_long_help = REF_HELP)]
    Ref {
        /// URL, reference or markdown link
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Fetch the title of a GitHub issue, pull request, or discussion
    #[command(after_long_help = TITLE_HELP)]
    Title {
        /// URL, reference or markdown link
        #[arg(value_name = "INPUT")]
        input: String,

        /// Sanitize output for use as a file path
        #[arg(long)]
        sanitize: bool,
    },

    /// Convert an input reference into a GitHub URL
    #[command(after_long_help = URL_HELP)]
    Url {
        /// URL, reference or markdown link
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Generate shell completion scripts
    #[command(subcommand)]
    Completion(CompletionCommand),
}

/// Completion subcommands
#[derive(Subcommand)]
pub enum CompletionCommand {
    /// Generate completion script for a shell (output to stdout)
    #[command(after_long_help = COMPLETION_GENERATE_HELP)]
    Generate {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
