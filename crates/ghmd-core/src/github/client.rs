// SPDX-License-Identifier: Apache-2.0

//! Octocrab-backed GraphQL transport.
//!
//! Owns everything the resolver treats as opaque: the authenticated client,
//! the overall request deadline, retries of transient failures, and the
//! response cache.

use std::time::Duration;

use async_trait::async_trait;
use backon::Retryable;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument, warn};

use super::transport::{GraphqlRequest, GraphqlResponse, GraphqlTransport};
use crate::auth::TokenProvider;
use crate::cache::ResponseCache;
use crate::config::AppConfig;
use crate::error::TransportError;
use crate::retry::{is_retryable_octocrab, retry_backoff};

/// GraphQL transport over an authenticated Octocrab client.
pub struct OctocrabTransport {
    client: Octocrab,
    timeout: Duration,
    cache: Option<ResponseCache>,
}

impl OctocrabTransport {
    /// Wraps an existing client with the given overall deadline.
    #[must_use]
    pub fn new(client: Octocrab, timeout: Duration) -> Self {
        Self {
            client,
            timeout,
            cache: None,
        }
    }

    /// Puts a response cache in front of the client.
    #[must_use]
    pub fn with_cache(mut self, cache: Option<ResponseCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Builds a transport from a token provider and configuration.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::NotAuthenticated` if the provider has no token,
    /// or `TransportError::Network` if the client cannot be built.
    #[instrument(skip(provider, config))]
    pub fn from_provider(
        provider: &dyn TokenProvider,
        config: &AppConfig,
        use_cache: bool,
    ) -> Result<Self, TransportError> {
        let token = provider
            .github_token()
            .ok_or(TransportError::NotAuthenticated)?;
        let client = create_client_with_token(&token)?;

        let cache = if use_cache {
            ResponseCache::from_config(&config.cache).map(|cache| cache.scoped_to(&token))
        } else {
            None
        };

        Ok(Self::new(client, config.github.api_timeout()).with_cache(cache))
    }
}

/// Creates an authenticated Octocrab client using a provided token.
///
/// # Errors
///
/// Returns an error if the Octocrab client cannot be built.
#[instrument(skip(token))]
pub fn create_client_with_token(token: &SecretString) -> Result<Octocrab, TransportError> {
    info!("Creating GitHub client");

    let client = Octocrab::builder()
        .personal_token(token.expose_secret().to_string())
        .build()?;

    debug!("Created authenticated GitHub client");
    Ok(client)
}

#[async_trait]
impl GraphqlTransport for OctocrabTransport {
    #[instrument(skip_all, fields(operation = %request.operation_name))]
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, TransportError> {
        if let Some(cache) = &self.cache
            && let Some(response) = cache.get(request)
        {
            return Ok(response);
        }

        debug!("Executing GraphQL query");
        let send = (|| async { self.client.graphql::<GraphqlResponse>(request).await })
            .retry(retry_backoff())
            .when(is_retryable_octocrab)
            .notify(|err, dur| {
                warn!(
                    error = %err,
                    retry_after = ?dur,
                    "Retrying GraphQL query"
                );
            });

        let response = tokio::time::timeout(self.timeout, send)
            .await
            .map_err(|_| TransportError::Timeout {
                seconds: self.timeout.as_secs(),
            })??;

        debug!(
            has_data = response.data.is_some(),
            errors = response.errors.len(),
            "GraphQL query completed"
        );

        if let Some(cache) = &self.cache
            && is_cacheable(&response)
        {
            cache.put(request, &response);
        }

        Ok(response)
    }
}

/// Only answers that carry data and at most `NOT_FOUND` errors are stored.
fn is_cacheable(response: &GraphqlResponse) -> bool {
    response.data.is_some() && response.only_not_found_errors()
}
