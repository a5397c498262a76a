//! Jiji Medical listing scraper.
//!
//! Parses the medical-news listing at
//! `https://medical.jiji.com/news/?c=medical` into
//! `(title, date, detail_url, image_url)` tuples. Unlike the Nikkei page,
//! each article here is a self-contained `li.articleTextList__item`
//! block, so extraction walks the containers rather than zipping parallel
//! columns.
//!
//! A thumbnail is optional per item (empty string when absent); title,
//! date, and the item link are structurally required, and a container
//! missing any of them fails the whole batch closed.

use crate::fetch::fetch_html;
use crate::models::JijiArticle;
use crate::scrapers::first_direct_child;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{info, instrument, warn};

const LISTING_URL: &str = "https://medical.jiji.com/news/?c=medical";
const BASE_URL: &str = "https://medical.jiji.com";

static ITEM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li.articleTextList__item").unwrap());
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p.articleTextList__title").unwrap());
static DATE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.articleTextList__date").unwrap());
static IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a > p > img").unwrap());

/// Fetch and parse the Jiji Medical listing.
///
/// Returns an empty vector when the fetch yields no content or a required
/// field is missing from any item.
#[instrument(level = "info", skip(client))]
pub async fn scrape(client: &Client) -> Vec<JijiArticle> {
    let Some(html) = fetch_html(client, LISTING_URL).await else {
        warn!("No content from Jiji listing; skipping parse");
        return Vec::new();
    };

    let articles = parse_articles(&html);
    info!(count = articles.len(), "Scraped Jiji Medical listing");
    articles
}

/// Extract article tuples from listing markup, in document order.
pub fn parse_articles(html: &str) -> Vec<JijiArticle> {
    let document = Html::parse_document(html);
    let mut articles = Vec::new();

    for item in document.select(&ITEM_SELECTOR) {
        let Some(title) = item.select(&TITLE_SELECTOR).next() else {
            warn!("Listing item without a title; discarding batch");
            return Vec::new();
        };
        let Some(date) = item.select(&DATE_SELECTOR).next() else {
            warn!("Listing item without a date; discarding batch");
            return Vec::new();
        };
        let Some(href) = first_direct_child(item, "a").and_then(|a| a.value().attr("href"))
        else {
            warn!("Listing item without an anchor href; discarding batch");
            return Vec::new();
        };

        let image_url = item
            .select(&IMAGE_SELECTOR)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(|src| format!("{BASE_URL}{src}"))
            .unwrap_or_default();

        articles.push((
            title.text().collect(),
            date.text().collect(),
            format!("{BASE_URL}{href}"),
            image_url,
        ));
    }

    articles
}
