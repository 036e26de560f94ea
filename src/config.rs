//! Client Configuration
//!
//! Where the packing API lives. Defaults to the page's own origin; a
//! `<meta name="packlist-api" content="...">` tag overrides it.

/// Collection path served by the packing server
pub const API_PATH: &str = "/api/packing";

/// Used when there is no window (tests, workers)
pub const FALLBACK_ORIGIN: &str = "http://localhost:8080";

const META_SELECTOR: &str = "meta[name=\"packlist-api\"]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute collection URL, e.g. `http://localhost:8080/api/packing`
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }

    /// Read the page origin and the optional meta override
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::resolve(None, FALLBACK_ORIGIN);
        };
        let origin = window
            .location()
            .origin()
            .unwrap_or_else(|_| FALLBACK_ORIGIN.to_string());
        let meta = window
            .document()
            .and_then(|doc| doc.query_selector(META_SELECTOR).ok().flatten())
            .and_then(|el| el.get_attribute("content"))
            .filter(|content| !content.trim().is_empty());
        Self::resolve(meta, &origin)
    }

    /// Combine an optional override with the page origin.
    /// Relative overrides are resolved against the origin.
    fn resolve(meta: Option<String>, origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        match meta {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => Self::new(url),
            Some(path) => Self::new(format!("{}/{}", origin, path.trim_start_matches('/'))),
            None => Self::new(format!("{}{}", origin, API_PATH)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_origin_api_path() {
        let config = ClientConfig::resolve(None, "https://pack.example.com/");
        assert_eq!(config.api_base, "https://pack.example.com/api/packing");
    }

    #[test]
    fn test_absolute_override_wins() {
        let config = ClientConfig::resolve(
            Some("http://10.0.0.2:9000/api/packing".to_string()),
            "https://pack.example.com",
        );
        assert_eq!(config.api_base, "http://10.0.0.2:9000/api/packing");
    }

    #[test]
    fn test_relative_override_joins_origin() {
        let config = ClientConfig::resolve(Some("/v2/packing".to_string()), "http://localhost:3000");
        assert_eq!(config.api_base, "http://localhost:3000/v2/packing");
    }
}
