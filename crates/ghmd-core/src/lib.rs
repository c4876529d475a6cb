// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # gh-md Core
//!
//! Core library for `gh md`: GitHub references in markdown.
//!
//! This crate provides reusable components for:
//! - Matching issue, pull request and discussion references in free text
//! - Resolving reference titles through the GitHub GraphQL API
//! - Rendering markdown links, shorthands, titles and URLs
//! - Configuration, authentication and response caching
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ghmd_core::{EnvTokenProvider, OctocrabTransport, load_config, to_link};
//! use anyhow::Result;
//!
//! # async fn example() -> Result<()> {
//! let config = load_config()?;
//! let transport = OctocrabTransport::from_provider(&EnvTokenProvider, &config, true)?;
//!
//! let link = to_link("cli/cli#2673", false, &transport).await?;
//! println!("{link}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`matcher`] - Reference extraction from text
//! - [`resolver`] - Title resolution
//! - [`format`] - User-facing operations
//! - [`github`] - GitHub API (auth, transport, GraphQL documents)
//! - [`config`] - Configuration loading and paths

// ============================================================================
// Authentication
// ============================================================================

pub use auth::{StaticTokenProvider, TokenProvider};

// ============================================================================
// Error Handling
// ============================================================================

pub use error::{GhmdError, TransportError};

/// Convenience Result type for gh-md operations.
///
/// This is equivalent to `std::result::Result<T, GhmdError>`.
pub type Result<T> = std::result::Result<T, GhmdError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, CacheConfig, GitHubConfig, config_dir, config_file_path, load_config,
};

// ============================================================================
// Caching
// ============================================================================

pub use cache::{CacheEntry, ResponseCache};

// ============================================================================
// References
// ============================================================================

pub use matcher::{RawReference, find_reference, match_reference};
pub use reference::{Reference, ReferenceKind};
pub use resolver::{Resolved, TitleBranches, resolve, resolve_title};
pub use sanitize::{sanitize_path_component, sanitize_title};

// ============================================================================
// Operations
// ============================================================================

pub use format::{Formatted, TitleOutcome, to_link, to_reference, to_title, to_url};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::auth::{EnvTokenProvider, TokenSource};
pub use github::{GraphqlRequest, GraphqlResponse, GraphqlTransport, OctocrabTransport};

// ============================================================================
// Modules
// ============================================================================

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod github;
pub mod matcher;
pub mod reference;
pub mod resolver;
pub mod retry;
pub mod sanitize;
