//! Error types for resolver operations.
//!
//! These errors are internal to the resolution pipeline: the public
//! [`CivitaiResolver::resolve`](super::CivitaiResolver::resolve) contract is
//! total and collapses every variant to a fallback URL at the boundary.

use thiserror::Error;

/// Errors that can occur while resolving a share URL.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// HTTP client construction failed
    #[error("failed to construct resolver HTTP client: {reason}")]
    ClientBuild {
        /// Why client construction failed
        reason: String,
    },

    /// The request never produced a usable response (connect failure, timeout)
    #[error("request to '{url}' failed: {reason}")]
    Transport {
        /// The API endpoint that was requested
        url: String,
        /// Why the request failed
        reason: String,
    },

    /// The API answered with a non-success HTTP status
    #[error("'{url}' returned HTTP {status}")]
    HttpStatus {
        /// The API endpoint that was requested
        url: String,
        /// The HTTP status code received
        status: u16,
    },

    /// The response body could not be parsed as the expected JSON shape
    #[error("unexpected response body from '{url}': {reason}")]
    MalformedResponse {
        /// The API endpoint that was requested
        url: String,
        /// Why the body could not be parsed
        reason: String,
    },
}

impl ResolveError {
    /// Creates a `ClientBuild` error.
    #[must_use]
    pub fn client_build(reason: &str) -> Self {
        Self::ClientBuild {
            reason: reason.to_string(),
        }
    }

    /// Creates a `Transport` error for a failed request.
    #[must_use]
    pub fn transport(url: &str, reason: &str) -> Self {
        Self::Transport {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an `HttpStatus` error for a non-success response.
    #[must_use]
    pub fn http_status(url: &str, status: u16) -> Self {
        Self::HttpStatus {
            url: url.to_string(),
            status,
        }
    }

    /// Creates a `MalformedResponse` error for an unparseable body.
    #[must_use]
    pub fn malformed_response(url: &str, reason: &str) -> Self {
        Self::MalformedResponse {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
