//! Data shapes shared across the ingestion pipeline.
//!
//! Every adapter emits positional tuples rather than named records: the
//! downstream templates index articles by position, and the three sources
//! produce different arities. Serde serializes the tuples as JSON arrays,
//! which keeps that contract visible at the output boundary.
//!
//! - [`NikkeiArticle`]: `(title, date, tag, detail_url, image_url)`
//! - [`JijiArticle`]: `(title, date, detail_url, image_url)`
//! - [`NewsApiArticle`]: `(title, published_at, source_name, url, image_url)`

use crate::utils::parse_date;
use chrono::NaiveDate;
use serde::Serialize;

/// One Nikkei Medical listing entry. URLs are absolute.
pub type NikkeiArticle = (String, String, String, String, String);

/// One Jiji Medical listing entry. `image_url` (last position) is the
/// empty string when the listing has no thumbnail.
pub type JijiArticle = (String, String, String, String);

/// One NewsAPI search result after flattening. `published_at` (second
/// position) stays in ISO-8601 UTC until the caller formats it for display.
pub type NewsApiArticle = (String, String, String, String, String);

/// The combined output of one aggregation run, one feed per source.
///
/// Adapters that failed contribute an empty feed; the document itself is
/// always produced so consumers can render "no articles" per source.
#[derive(Debug, Serialize)]
pub struct AggregatedFeed {
    pub nikkei: Vec<NikkeiArticle>,
    pub jiji: Vec<JijiArticle>,
    pub news_api: Vec<NewsApiArticle>,
}

/// The fields an external favorites store consumes when a user promotes
/// an article tuple into a persisted favorite.
///
/// Persistence itself (and the `(user, url)` uniqueness constraint) lives
/// outside this crate; this type only normalizes the raw date string into
/// a date value, with `None` meaning "unknown date".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteSeed {
    pub title: String,
    pub url: String,
    pub image_url: String,
    pub published_at: Option<NaiveDate>,
}

impl FavoriteSeed {
    /// Build a seed from tuple fields, parsing the source-formatted date.
    pub fn new(title: &str, url: &str, image_url: &str, raw_date: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            image_url: image_url.to_string(),
            published_at: parse_date(raw_date),
        }
    }
}
