//! Process-wide configuration for the outbound API credentials.
//!
//! Keys are read once at startup (CLI flag or environment variable via
//! clap) and passed into the adapters explicitly. Nothing in the pipeline
//! reads the process environment ad hoc, which keeps the adapters
//! testable with injected fake keys.

/// Credentials consumed by the News API adapter and the translator.
///
/// A `None` key means the corresponding call degrades to its empty-result
/// fallback instead of being attempted.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// NewsAPI key, sent as the `X-Api-Key` header.
    pub news_api_key: Option<String>,
    /// DeepL auth key for title translation.
    pub deepl_auth_key: Option<String>,
}

impl AppConfig {
    /// Build a config, treating empty strings as unset.
    ///
    /// An empty env var (`X_API_KEY=""`) otherwise reads as a present key
    /// and produces a confusing 401 instead of the "key not set" skip.
    pub fn new(news_api_key: Option<String>, deepl_auth_key: Option<String>) -> Self {
        Self {
            news_api_key: news_api_key.filter(|k| !k.is_empty()),
            deepl_auth_key: deepl_auth_key.filter(|k| !k.is_empty()),
        }
    }
}
