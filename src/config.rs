//! API token loading from the local config file.
//!
//! The token lives in an INI file next to the executable:
//!
//! ```ini
//! [API]
//! civitai_token = ...
//! ```
//!
//! Loading never fails outward: a missing file, an unreadable file, a missing
//! key, or a token that fails shape validation all yield `None` so the
//! resolver stays functional without authentication. The token value itself
//! is never logged; [`ApiToken`] redacts both `Debug` and `Display` output.

use std::fmt;
use std::path::{Path, PathBuf};

use ini::Ini;
use tracing::debug;

/// File name of the token config, co-located with the executable.
const CONFIG_FILE_NAME: &str = ".config";

/// INI section holding API credentials.
const CONFIG_SECTION: &str = "API";

/// INI key holding the Civitai API token.
const CONFIG_KEY: &str = "civitai_token";

/// Minimum length of a plausible Civitai API token.
const MIN_TOKEN_LEN: usize = 32;

/// An opaque API token with a validated shape.
///
/// The secret is only ever placed in an `Authorization` header; it must never
/// appear in URLs or log output. `Debug` and `Display` are redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Validates and wraps a raw config value.
    ///
    /// Returns `None` for blank values and for values that are likely not a
    /// real token (shorter than 32 characters or containing a space).
    #[must_use]
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.len() < MIN_TOKEN_LEN || trimmed.contains(' ') {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Returns the secret value for use in the `Authorization` header.
    ///
    /// Callers must not place the returned value in URLs or log output.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Returns the default token config path: `.config` next to the executable,
/// falling back to the current directory when the executable path is unknown.
#[must_use]
pub fn default_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE_NAME)
}

/// Loads the API token from the default config location.
///
/// Returns `None` when no valid token is configured; never errors.
#[must_use]
pub fn load_token() -> Option<ApiToken> {
    load_token_from(&default_config_path())
}

/// Loads the API token from an explicit config file path.
///
/// Returns `None` when the file is missing, unreadable, lacks the
/// `[API] civitai_token` key, or holds a value that fails validation.
#[must_use]
pub fn load_token_from(path: &Path) -> Option<ApiToken> {
    if !path.exists() {
        return None;
    }

    let cfg = match Ini::load_from_file(path) {
        Ok(cfg) => cfg,
        Err(error) => {
            debug!(
                path = %path.display(),
                error = %error,
                "token config unreadable; continuing without token"
            );
            return None;
        }
    };

    let raw = cfg.section(Some(CONFIG_SECTION))?.get(CONFIG_KEY)?;
    let token = ApiToken::parse(raw);
    if token.is_none() {
        debug!(
            path = %path.display(),
            "configured token is blank or fails shape validation; continuing without token"
        );
    }
    token
}
