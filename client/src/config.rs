//! Outbound HTTP configuration.
//!
//! DESIGN
//! ======
//! Created once at application start (by the server for SSR, from the shell's
//! `<meta>` tags when hydrating) and handed to the view tree through Leptos
//! context. Nothing reads a process-wide default at call time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// `<meta name=...>` carrying the base URL in the HTML shell.
pub const META_BASE_URL: &str = "quiz-api-base-url";
/// `<meta name=...>` carrying the credential-forwarding flag.
pub const META_WITH_CREDENTIALS: &str = "quiz-api-with-credentials";

/// Where the backend lives and whether cookies travel with requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the backend API, without a trailing `/`.
    pub base_url: String,
    /// Forward session cookies on cross-origin calls.
    pub with_credentials: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            with_credentials: true,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: &str, with_credentials: bool) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            with_credentials,
        }
    }

    /// Absolute URL for an endpoint path such as `/api/subjects`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Rebuild from the shell's `<meta>` values; absent or blank values fall
    /// back to the defaults.
    #[must_use]
    pub fn from_meta(base_url: Option<&str>, with_credentials: Option<&str>) -> Self {
        let defaults = Self::default();
        let base_url = base_url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(&defaults.base_url);
        let with_credentials = with_credentials
            .and_then(parse_flag)
            .unwrap_or(defaults.with_credentials);
        Self::new(base_url, with_credentials)
    }

    /// Flag value as written into the shell.
    #[must_use]
    pub fn credentials_flag(&self) -> &'static str {
        if self.with_credentials { "true" } else { "false" }
    }
}

/// Parse a boolean flag the way operators write them in env files.
#[must_use]
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read the configuration the server embedded in the document head.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn read_from_document() -> ApiConfig {
    let meta = |name: &str| -> Option<String> {
        web_sys::window()?
            .document()?
            .query_selector(&format!("meta[name=\"{name}\"]"))
            .ok()??
            .get_attribute("content")
    };
    ApiConfig::from_meta(
        meta(META_BASE_URL).as_deref(),
        meta(META_WITH_CREDENTIALS).as_deref(),
    )
}
