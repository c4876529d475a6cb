// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Token resolution, the GraphQL transport seam, the Octocrab-backed
//! transport, and the title query documents.

pub mod auth;
pub mod client;
pub mod graphql;
pub mod transport;

pub use client::OctocrabTransport;
pub use transport::{GraphqlError, GraphqlRequest, GraphqlResponse, GraphqlTransport};
