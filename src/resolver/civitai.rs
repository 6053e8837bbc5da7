//! Civitai share-URL resolution against the public REST API.
//!
//! The [`CivitaiResolver`] turns share/model page URLs into direct download
//! URLs by querying `https://civitai.com/api/v1/model-versions/{id}` (when
//! the share URL names a specific version) or
//! `https://civitai.com/api/v1/models/{id}` (bare model pages, taking the
//! first listed version as "latest" - a heuristic, not a guarantee).
//!
//! The public [`resolve`](CivitaiResolver::resolve) contract is total: every
//! failure collapses to the best available URL and no error ever reaches the
//! caller.

use std::path::PathBuf;

use reqwest::Client;
use reqwest::header;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::{self, ApiToken};

use super::classify::{UrlClass, classify};
use super::http_client::build_resolver_http_client;
use super::ResolveError;

/// Canonical origin used for fallback construction and download-URL
/// normalization, independent of the API base used for requests.
pub const CIVITAI_ORIGIN: &str = "https://civitai.com";

// ==================== Civitai API Response Types ====================

/// A model version record from the Civitai API.
///
/// Both lookups only ever read `downloadUrl`; every other response field is
/// ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VersionRecord {
    pub download_url: Option<String>,
}

/// A model record from `GET /api/v1/models/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModelRecord {
    pub model_versions: Option<Vec<VersionRecord>>,
}

// ==================== CivitaiResolver ====================

/// Resolves Civitai share/model page URLs to direct download URLs.
///
/// Stateless across calls: the API token is re-read from the config file on
/// every resolution, and no lookup result is cached. Each call issues at most
/// two API requests (version lookup, then model page lookup) with a 10 second
/// timeout each and no retries.
pub struct CivitaiResolver {
    client: Client,
    api_base: String,
    config_path: Option<PathBuf>,
}

impl CivitaiResolver {
    /// Creates a resolver targeting the real Civitai API, with the token
    /// config at its default location.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if HTTP client construction fails.
    pub fn new() -> Result<Self, ResolveError> {
        Self::build(CIVITAI_ORIGIN.to_string(), None)
    }

    /// Creates a resolver reading the API token from an explicit config path.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if HTTP client construction fails.
    pub fn with_config_path(config_path: impl Into<PathBuf>) -> Result<Self, ResolveError> {
        Self::build(CIVITAI_ORIGIN.to_string(), Some(config_path.into()))
    }

    /// Creates a resolver with a custom API base (for testing with wiremock)
    /// and an optional explicit token config path.
    ///
    /// Input classification, fallback construction, and download-URL
    /// normalization still use the canonical [`CIVITAI_ORIGIN`]; only the
    /// API requests go to `api_base`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if HTTP client construction fails.
    pub fn with_api_base(
        api_base: impl Into<String>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, ResolveError> {
        Self::build(api_base.into(), config_path)
    }

    fn build(api_base: String, config_path: Option<PathBuf>) -> Result<Self, ResolveError> {
        let client = build_resolver_http_client()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            config_path,
        })
    }

    /// Resolves a share/model page URL to a direct download URL.
    ///
    /// Total contract: always returns a string, never errors. Non-Civitai
    /// URLs and existing direct download links pass through unchanged
    /// (trimmed); empty input returns the empty string; every API failure
    /// degrades to the documented fallback.
    #[tracing::instrument(skip(self, url), fields(input_len = url.len()))]
    pub async fn resolve(&self, url: &str) -> String {
        let input = url.trim();
        match classify(input) {
            UrlClass::Empty => String::new(),
            UrlClass::AlreadyDirect => {
                debug!("input is already a direct download link");
                input.to_string()
            }
            UrlClass::Foreign => input.to_string(),
            UrlClass::Share {
                version_id,
                model_id,
            } => self.resolve_share(input, version_id, model_id).await,
        }
    }

    /// Runs the two-tier lookup for a classified share URL.
    ///
    /// A specific version id is unambiguous and preferred; a bare model page
    /// guesses "latest" from the first listed version. The strategy order is
    /// fixed: a version lookup that succeeds without a download URL falls
    /// through to the model page lookup, and only a failed version lookup
    /// short-circuits with the constructed fallback.
    async fn resolve_share(
        &self,
        input: &str,
        version_id: Option<String>,
        model_id: Option<String>,
    ) -> String {
        // Read fresh on every call; never cached across resolutions.
        let token = self.load_token();
        debug!(token_present = token.is_some(), "loaded token config");

        if let Some(id) = version_id {
            match self.lookup_version_download_url(&id, token.as_ref()).await {
                Ok(Some(download_url)) => return normalize_download_url(&download_url),
                Ok(None) => {
                    debug!(version_id = %id, "version record has no download URL; trying model page");
                }
                Err(error) => {
                    warn!(error = %error, version_id = %id, "version lookup failed; using constructed fallback");
                    return format!("{CIVITAI_ORIGIN}/api/download/models/{id}");
                }
            }
        }

        if let Some(id) = model_id {
            match self.lookup_model_download_url(&id, token.as_ref()).await {
                Ok(Some(download_url)) => return normalize_download_url(&download_url),
                Ok(None) => {
                    debug!(model_id = %id, "model record has no usable version");
                }
                Err(error) => {
                    warn!(error = %error, model_id = %id, "model lookup failed; returning input unchanged");
                }
            }
        }

        input.to_string()
    }

    fn load_token(&self) -> Option<ApiToken> {
        match &self.config_path {
            Some(path) => config::load_token_from(path),
            None => config::load_token(),
        }
    }

    /// Looks up a model version and returns its download URL, if any.
    async fn lookup_version_download_url(
        &self,
        version_id: &str,
        token: Option<&ApiToken>,
    ) -> Result<Option<String>, ResolveError> {
        let api_url = format!("{}/api/v1/model-versions/{version_id}", self.api_base);
        let record: VersionRecord = self.fetch_json(&api_url, token).await?;
        Ok(record.download_url.filter(|value| !value.is_empty()))
    }

    /// Looks up a model page and returns the first version's download URL,
    /// if any. Later versions are never consulted.
    async fn lookup_model_download_url(
        &self,
        model_id: &str,
        token: Option<&ApiToken>,
    ) -> Result<Option<String>, ResolveError> {
        let api_url = format!("{}/api/v1/models/{model_id}", self.api_base);
        let record: ModelRecord = self.fetch_json(&api_url, token).await?;
        Ok(record
            .model_versions
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|version| version.download_url)
            .filter(|value| !value.is_empty()))
    }

    /// Issues one authenticated GET and parses the JSON body.
    ///
    /// The token only ever travels in the `Authorization` header; it is never
    /// part of `api_url` and never appears in the returned errors.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        api_url: &str,
        token: Option<&ApiToken>,
    ) -> Result<T, ResolveError> {
        debug!(api_url = %api_url, "calling Civitai API");

        let mut request = self
            .client
            .get(api_url)
            .header(header::ACCEPT, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|error| ResolveError::transport(api_url, &error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::http_status(api_url, status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|error| ResolveError::malformed_response(api_url, &error.to_string()))
    }
}

impl std::fmt::Debug for CivitaiResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CivitaiResolver")
            .field("api_base", &self.api_base)
            .field("config_path", &self.config_path)
            .finish_non_exhaustive()
    }
}

/// Resolves a share URL with a default resolver.
///
/// Convenience wrapper over [`CivitaiResolver::resolve`] preserving the same
/// total contract: if the resolver itself cannot be constructed, the trimmed
/// input is returned unchanged.
pub async fn resolve_to_direct(url: &str) -> String {
    match CivitaiResolver::new() {
        Ok(resolver) => resolver.resolve(url).await,
        Err(error) => {
            warn!(error = %error, "resolver construction failed; returning input unchanged");
            url.trim().to_string()
        }
    }
}

/// Normalizes an API-provided download URL.
///
/// Values starting with `/` resolve against [`CIVITAI_ORIGIN`] (an RFC 3986
/// join, so protocol-relative `//host/path` values pick up the scheme);
/// everything else is used verbatim.
fn normalize_download_url(download_url: &str) -> String {
    if download_url.starts_with('/') {
        if let Ok(origin) = Url::parse(CIVITAI_ORIGIN) {
            if let Ok(joined) = origin.join(download_url) {
                return joined.to_string();
            }
        }
    }
    download_url.to_string()
}
