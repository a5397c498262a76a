//! Nikkei Medical listing scraper.
//!
//! Parses the all-articles listing at
//! `https://medical.nikkeibp.co.jp/inc/all/article/` into
//! `(title, date, tag, detail_url, image_url)` tuples. The page lays the
//! five fields out as parallel sequences of class-marked elements, so
//! extraction collects five columns and zips them positionally: the Nth
//! title pairs with the Nth date, tag, link, and thumbnail. If the page
//! ever produces mismatched column lengths the zip silently truncates to
//! the shortest column.
//!
//! This adapter fails closed: one missing anchor or attribute anywhere in
//! the batch discards the whole batch, never a partial one.

use crate::fetch::fetch_html;
use crate::models::NikkeiArticle;
use crate::scrapers::first_direct_child;
use itertools::izip;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{info, instrument, warn};

const LISTING_URL: &str = "https://medical.nikkeibp.co.jp/inc/all/article/";
const BASE_URL: &str = "https://medical.nikkeibp.co.jp";

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p.article-list-article-title").unwrap());
static DATE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p.article-list-date").unwrap());
static TAG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.article-list-tag").unwrap());
static LINK_CONTAINER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.detail-inner").unwrap());
static THUMB_CONTAINER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.article-list-thumb").unwrap());

/// Fetch and parse the Nikkei Medical listing.
///
/// Returns an empty vector when the fetch yields no content or the markup
/// does not match the expected structure.
#[instrument(level = "info", skip(client))]
pub async fn scrape(client: &Client) -> Vec<NikkeiArticle> {
    let Some(html) = fetch_html(client, LISTING_URL).await else {
        warn!("No content from Nikkei listing; skipping parse");
        return Vec::new();
    };

    let articles = parse_article_info(&html);
    info!(count = articles.len(), "Scraped Nikkei Medical listing");
    articles
}

/// Extract article tuples from listing markup, in document order.
pub fn parse_article_info(html: &str) -> Vec<NikkeiArticle> {
    let document = Html::parse_document(html);

    let titles: Vec<String> = document
        .select(&TITLE_SELECTOR)
        .map(|el| el.text().collect())
        .collect();
    let dates: Vec<String> = document
        .select(&DATE_SELECTOR)
        .map(|el| el.text().collect())
        .collect();
    let tags: Vec<String> = document
        .select(&TAG_SELECTOR)
        .map(|el| el.text().collect())
        .collect();

    // Link and thumbnail columns fail the whole batch when a container is
    // missing its direct-child anchor/img or the attribute itself.
    let mut urls = Vec::new();
    for container in document.select(&LINK_CONTAINER_SELECTOR) {
        let href = first_direct_child(container, "a").and_then(|a| a.value().attr("href"));
        match href {
            Some(href) => urls.push(format!("{BASE_URL}{href}")),
            None => {
                warn!("Link container without an anchor href; discarding batch");
                return Vec::new();
            }
        }
    }

    let mut img_urls = Vec::new();
    for container in document.select(&THUMB_CONTAINER_SELECTOR) {
        let src = first_direct_child(container, "img").and_then(|img| img.value().attr("src"));
        match src {
            Some(src) => img_urls.push(format!("{BASE_URL}{src}")),
            None => {
                warn!("Thumbnail container without an image src; discarding batch");
                return Vec::new();
            }
        }
    }

    izip!(titles, dates, tags, urls, img_urls).collect()
}
