//! Shared HTTP client construction policy for the resolver.
//!
//! Centralizes networking defaults so every API lookup stays consistent on
//! timeout, user-agent, and compression.

use std::time::Duration;

use reqwest::Client;

use crate::user_agent;

use super::ResolveError;

/// Total request timeout for a single API lookup. No retries are performed;
/// a timed-out lookup immediately degrades to the documented fallback.
pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Builds the resolver HTTP client using shared project policy.
///
/// # Errors
///
/// Returns [`ResolveError::ClientBuild`] when client construction fails.
pub(crate) fn build_resolver_http_client() -> Result<Client, ResolveError> {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(user_agent::default_resolver_user_agent())
        .gzip(true)
        .build()
        .map_err(|error| ResolveError::client_build(&error.to_string()))
}
