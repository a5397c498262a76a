//! Batch title translation via the DeepL API.
//!
//! Translation sits behind the [`Translate`] trait so the News-API
//! pipeline can be exercised with a mock service in tests. The real
//! implementation degrades hard: any failure (no credentials, transport
//! error, bad response shape) is logged and surfaces as an empty list,
//! which callers read as "translation unavailable, keep the originals".

use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

const DEEPL_URL: &str = "https://api-free.deepl.com/v2/translate";
const TARGET_LANG: &str = "JA";

/// Batch translation seam.
///
/// Implementations return the translated strings in input order, one per
/// input, or an empty list when translation is unavailable. They never
/// return an error; the caller's fallback is always "use the originals".
pub trait Translate {
    async fn translate_batch(&self, texts: &[String]) -> Vec<String>;
}

/// DeepL-backed translator targeting Japanese.
#[derive(Debug, Clone)]
pub struct DeeplTranslator {
    client: Client,
    auth_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeeplResponse {
    translations: Vec<DeeplTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeeplTranslation {
    text: String,
}

impl DeeplTranslator {
    pub fn new(client: Client, auth_key: Option<String>) -> Self {
        Self { client, auth_key }
    }
}

impl Translate for DeeplTranslator {
    #[instrument(level = "info", skip_all, fields(batch = texts.len()))]
    async fn translate_batch(&self, texts: &[String]) -> Vec<String> {
        if texts.is_empty() {
            info!("Empty batch; skipping translation call");
            return Vec::new();
        }

        let Some(auth_key) = self.auth_key.as_deref() else {
            warn!("DEEPL_AUTH_KEY is not set; returning untranslated sentinel");
            return Vec::new();
        };

        let body = serde_json::json!({
            "text": texts,
            "target_lang": TARGET_LANG,
        });

        let response = match self
            .client
            .post(DEEPL_URL)
            .header("Authorization", format!("DeepL-Auth-Key {auth_key}"))
            .json(&body)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
        {
            Ok(resp) => resp,
            Err(e) => {
                error!(error = %e, "DeepL request failed");
                return Vec::new();
            }
        };

        match response.json::<DeeplResponse>().await {
            Ok(parsed) => {
                let values: Vec<String> =
                    parsed.translations.into_iter().map(|t| t.text).collect();
                info!(count = values.len(), "Translated batch");
                values
            }
            Err(e) => {
                error!(error = %e, "Failed to decode DeepL response");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_batch_skips_service_call() {
        // No key configured and no server reachable: an empty input must
        // short-circuit before either matters.
        let translator = DeeplTranslator::new(Client::new(), Some("key".to_string()));
        assert!(translator.translate_batch(&[]).await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_auth_key_returns_empty() {
        let translator = DeeplTranslator::new(Client::new(), None);
        let out = translator
            .translate_batch(&["A headline".to_string()])
            .await;
        assert!(out.is_empty());
    }

    #[test]
    fn test_deepl_response_shape() {
        let json = r#"{"translations":[{"detected_source_language":"EN","text":"医療ニュース"}]}"#;
        let parsed: DeeplResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.translations[0].text, "医療ニュース");
    }
}
