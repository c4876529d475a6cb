// SPDX-License-Identifier: Apache-2.0

//! Lazily built GitHub transport.
//!
//! `ref`, `url`, `link --simple` and unmatched input never talk to GitHub, so
//! the token lookup (which may shell out to `gh auth token`) and the client
//! are only set up on the first GraphQL request.

use async_trait::async_trait;
use ghmd_core::error::TransportError;
use ghmd_core::{
    AppConfig, EnvTokenProvider, GraphqlRequest, GraphqlResponse, GraphqlTransport,
    OctocrabTransport,
};
use tokio::sync::OnceCell;
use tracing::debug;

/// Builds an [`OctocrabTransport`] on first use.
pub struct LazyTransport<'a> {
    config: &'a AppConfig,
    use_cache: bool,
    inner: OnceCell<OctocrabTransport>,
}

impl<'a> LazyTransport<'a> {
    /// Creates a transport that has not connected yet.
    pub fn new(config: &'a AppConfig, use_cache: bool) -> Self {
        Self {
            config,
            use_cache,
            inner: OnceCell::new(),
        }
    }

    async fn client(&self) -> Result<&OctocrabTransport, TransportError> {
        self.inner
            .get_or_try_init(|| async {
                debug!(use_cache = self.use_cache, "Initializing GitHub transport");
                OctocrabTransport::from_provider(&EnvTokenProvider, self.config, self.use_cache)
            })
            .await
    }
}

#[async_trait]
impl GraphqlTransport for LazyTransport<'_> {
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, TransportError> {
        self.client().await?.execute(request).await
    }
}
