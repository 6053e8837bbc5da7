//! Shared User-Agent string for resolver HTTP clients.
//!
//! Single source for project URL and UA format so API traffic stays
//! consistent and easy to update (good citizenship; RFC 9308).

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/fierce-tools/civitai-resolver";

/// Default User-Agent for resolver API requests (identifies the tool).
#[must_use]
pub(crate) fn default_resolver_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("civitai-resolver/{version} (share-url-resolver; +{PROJECT_UA_URL})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_ua_contains_version_and_project_url() {
        let ua = default_resolver_user_agent();
        assert!(
            ua.contains(PROJECT_UA_URL),
            "resolver UA must contain project URL: {ua}"
        );
        assert_eq!(
            env!("CARGO_PKG_VERSION"),
            ua.strip_prefix("civitai-resolver/")
                .and_then(|s| s.split(' ').next())
                .expect("resolver UA has version"),
            "resolver UA must contain crate version"
        );
    }
}
