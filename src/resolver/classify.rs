//! Input URL classification.
//!
//! Splits the resolution algorithm's pattern matching out of the network
//! path so the pass-through and fall-through rules are unit-testable
//! without HTTP.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// The only host that receives special handling.
pub(crate) const CIVITAI_HOST: &str = "civitai.com";

/// Matches a URL path that is already a direct download link.
#[allow(clippy::expect_used)]
static DOWNLOAD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/api/download/models/\d+$").expect("download regex is valid") // Static pattern, safe to panic
});

/// Matches a model page path and captures the model id.
#[allow(clippy::expect_used)]
static MODEL_PAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/models/(\d+)(?:/.*)?$").expect("model page regex is valid") // Static pattern, safe to panic
});

/// Query parameter naming a specific model version on a share URL.
const VERSION_ID_PARAM: &str = "modelVersionId";

/// Classification of a trimmed input string.
///
/// The order of strategies attempted for [`UrlClass::Share`] is fixed:
/// version lookup (when `version_id` is present), then model page lookup
/// (when `model_id` is present), then the original input. A version lookup
/// that succeeds without a download URL still falls through to the model
/// page strategy, never the other way around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlClass {
    /// Empty input; resolves to the empty string.
    Empty,
    /// Already a `civitai.com` direct download link; passes through unchanged.
    AlreadyDirect,
    /// Not a `civitai.com` URL (or not parseable as a URL); passes through unchanged.
    Foreign,
    /// A `civitai.com` share/model page needing API resolution.
    Share {
        /// Numeric `modelVersionId` query parameter, when present.
        version_id: Option<String>,
        /// Model id captured from a `/models/{id}` path, when present.
        model_id: Option<String>,
    },
}

/// Classifies a trimmed input string.
///
/// Host comparison is case-insensitive and exact: subdomains such as
/// `www.civitai.com` are foreign, matching the single special-cased domain.
#[must_use]
pub fn classify(input: &str) -> UrlClass {
    if input.is_empty() {
        return UrlClass::Empty;
    }

    let Ok(parsed) = Url::parse(input) else {
        return UrlClass::Foreign;
    };
    let Some(host) = parsed.host_str() else {
        return UrlClass::Foreign;
    };
    if !host.eq_ignore_ascii_case(CIVITAI_HOST) {
        return UrlClass::Foreign;
    }
    // An explicit non-default port is a different authority than plain
    // civitai.com. The parser already drops a redundant `:443`, so any
    // surviving port marks the URL foreign.
    if parsed.port().is_some() {
        return UrlClass::Foreign;
    }

    if DOWNLOAD_PATTERN.is_match(parsed.path()) {
        return UrlClass::AlreadyDirect;
    }

    UrlClass::Share {
        version_id: extract_version_id(&parsed),
        model_id: extract_model_id(parsed.path()),
    }
}

/// Extracts a numeric `modelVersionId` query parameter (first occurrence).
fn extract_version_id(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == VERSION_ID_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
}

/// Extracts the model id from a `/models/{id}` path.
fn extract_model_id(path: &str) -> Option<String> {
    MODEL_PAGE_PATTERN
        .captures(path)
        .map(|captures| captures[1].to_string())
}
