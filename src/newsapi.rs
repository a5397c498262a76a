//! NewsAPI keyword-search adapter.
//!
//! Queries `https://newsapi.org/v2/everything` for the fixed keyword
//! `medical`, flattens the JSON response into
//! `(title, published_at, source_name, url, image_url)` tuples, translates
//! the title column to Japanese, and sorts the rows newest-first.
//!
//! The raw articles are kept as `serde_json::Value` through the flattening
//! step so that malformed shapes (null fields, a `source` that is not an
//! object) degrade to empty strings instead of failing deserialization.
//! Any transport or decode failure yields an empty list for the whole
//! call; there are no partial batches.

use crate::models::NewsApiArticle;
use crate::translate::Translate;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, instrument, warn};
use url::Url;

const API_URL: &str = "https://newsapi.org/v2/everything";
const QUERY_KEYWORD: &str = "medical";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    articles: Vec<Value>,
}

/// Pull the publisher name out of a raw `source` field.
///
/// Total over any shape: a missing field, a non-object, or an object
/// without a string `name` all come back as the empty string.
pub fn extract_source_name(source: Option<&Value>) -> String {
    source
        .and_then(|v| v.get("name"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn field_str(article: &Value, key: &str) -> String {
    article
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Issue the keyword query and return the raw article list.
///
/// A missing API key, transport failure, non-2xx status, or undecodable
/// body all collapse to an empty list, logged at the appropriate level.
#[instrument(level = "info", skip_all)]
pub async fn fetch_news_data(client: &Client, api_key: Option<&str>) -> Vec<Value> {
    let Some(api_key) = api_key else {
        warn!("News API key is not set; skipping fetch");
        return Vec::new();
    };

    let url = match Url::parse_with_params(
        API_URL,
        &[("sortBy", "publishedAt"), ("q", QUERY_KEYWORD)],
    ) {
        Ok(url) => url,
        Err(e) => {
            error!(error = %e, "Failed to build News API URL");
            return Vec::new();
        }
    };

    let response = match client
        .get(url)
        .header("X-Api-Key", api_key)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
    {
        Ok(resp) => resp,
        Err(e) => {
            error!(error = %e, "News API request failed");
            return Vec::new();
        }
    };

    match response.json::<ApiResponse>().await {
        Ok(parsed) => {
            info!(count = parsed.articles.len(), "Fetched News API articles");
            parsed.articles
        }
        Err(e) => {
            error!(error = %e, "Failed to decode News API response");
            Vec::new()
        }
    }
}

/// Flatten raw articles into tuples, nulls replaced with empty strings.
fn shape_articles(raw: &[Value]) -> Vec<NewsApiArticle> {
    raw.iter()
        .map(|article| {
            (
                field_str(article, "title"),
                field_str(article, "publishedAt"),
                extract_source_name(article.get("source")),
                field_str(article, "url"),
                field_str(article, "urlToImage"),
            )
        })
        .collect()
}

/// Replace the title column with its translation when the service returns
/// a full batch; otherwise keep the originals.
async fn translate_titles<T: Translate>(
    mut rows: Vec<NewsApiArticle>,
    translator: &T,
) -> Vec<NewsApiArticle> {
    let titles: Vec<String> = rows.iter().map(|row| row.0.clone()).collect();
    let translated = translator.translate_batch(&titles).await;

    if translated.len() == rows.len() {
        for (row, title) in rows.iter_mut().zip(translated) {
            row.0 = title;
        }
    } else {
        warn!(
            expected = rows.len(),
            got = translated.len(),
            "Translation unavailable; keeping original titles"
        );
    }
    rows
}

/// Shape, translate, and sort a raw article list.
pub(crate) async fn process_articles<T: Translate>(
    raw: Vec<Value>,
    translator: &T,
) -> Vec<NewsApiArticle> {
    if raw.is_empty() {
        info!("No articles to process; skipping translation");
        return Vec::new();
    }

    let rows = shape_articles(&raw);
    let mut rows = translate_titles(rows, translator).await;

    // ISO-8601 UTC timestamps sort correctly as strings.
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

/// Run the full News API pipeline: fetch, flatten, translate, sort.
///
/// Never returns a partial batch; every failure mode resolves to an empty
/// list so the caller can render "no articles".
#[instrument(level = "info", skip_all)]
pub async fn fetch_news_from_api<T: Translate>(
    client: &Client,
    api_key: Option<&str>,
    translator: &T,
) -> Vec<NewsApiArticle> {
    let raw = fetch_news_data(client, api_key).await;
    let articles = process_articles(raw, translator).await;
    info!(count = articles.len(), "News API pipeline complete");
    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct MockTranslator {
        responses: Vec<String>,
    }

    impl Translate for MockTranslator {
        async fn translate_batch(&self, _texts: &[String]) -> Vec<String> {
            self.responses.clone()
        }
    }

    /// Stands in for a service failure: the real translator returns an
    /// empty list on any error.
    struct UnavailableTranslator;

    impl Translate for UnavailableTranslator {
        async fn translate_batch(&self, _texts: &[String]) -> Vec<String> {
            Vec::new()
        }
    }

    fn raw_article(title: &str, published_at: &str, source_name: &str) -> Value {
        json!({
            "title": title,
            "publishedAt": published_at,
            "source": {"name": source_name},
            "url": "http://example.com/a",
            "urlToImage": "http://example.com/a.jpg",
        })
    }

    #[test]
    fn test_extract_source_name_is_total() {
        assert_eq!(extract_source_name(Some(&json!({"name": "BBC"}))), "BBC");
        assert_eq!(extract_source_name(Some(&json!({}))), "");
        assert_eq!(extract_source_name(Some(&json!("not a mapping"))), "");
        assert_eq!(extract_source_name(Some(&json!({"name": null}))), "");
        assert_eq!(extract_source_name(Some(&Value::Null)), "");
        assert_eq!(extract_source_name(None), "");
    }

    #[test]
    fn test_shape_articles_replaces_missing_and_null_fields() {
        let raw = vec![json!({
            "title": null,
            "source": null,
            "publishedAt": "2025-03-24T00:00:00Z",
        })];
        let rows = shape_articles(&raw);
        assert_eq!(
            rows[0],
            (
                "".to_string(),
                "2025-03-24T00:00:00Z".to_string(),
                "".to_string(),
                "".to_string(),
                "".to_string(),
            )
        );
    }

    #[tokio::test]
    async fn test_pipeline_translates_titles_and_flattens_source() {
        let raw = vec![raw_article(
            "Original Title",
            "2025-03-29T12:00:00Z",
            "Mock News",
        )];
        let translator = MockTranslator {
            responses: vec!["Translated Title".to_string()],
        };

        let articles = process_articles(raw, &translator).await;
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].0, "Translated Title");
        assert_eq!(articles[0].2, "Mock News");
    }

    #[tokio::test]
    async fn test_pipeline_falls_back_to_original_titles() {
        let raw = vec![raw_article(
            "Original Title",
            "2025-03-29T12:00:00Z",
            "Mock News",
        )];

        let articles = process_articles(raw, &UnavailableTranslator).await;
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].0, "Original Title");
        assert_eq!(articles[0].2, "Mock News");
    }

    #[tokio::test]
    async fn test_pipeline_sorts_by_published_at_descending() {
        let raw = vec![
            raw_article("Older", "2025-03-24T08:00:00Z", "A"),
            raw_article("Newest", "2025-03-29T12:00:00Z", "B"),
            raw_article("Middle", "2025-03-26T18:30:00Z", "C"),
        ];

        let articles = process_articles(raw, &UnavailableTranslator).await;
        let titles: Vec<&str> = articles.iter().map(|a| a.0.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Older"]);
    }

    #[tokio::test]
    async fn test_empty_fetch_yields_empty_pipeline_output() {
        // An upstream fetch failure surfaces as an empty raw list; the
        // pipeline must return empty without calling translation.
        struct PanickingTranslator;
        impl Translate for PanickingTranslator {
            async fn translate_batch(&self, _texts: &[String]) -> Vec<String> {
                panic!("translation must not be called for an empty batch");
            }
        }

        let articles = process_articles(Vec::new(), &PanickingTranslator).await;
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_news_data_without_key_is_empty() {
        let client = Client::new();
        assert!(fetch_news_data(&client, None).await.is_empty());
    }

    #[test]
    fn test_api_response_tolerates_missing_articles_key() {
        let parsed: ApiResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(parsed.articles.is_empty());
    }
}
