//! Shared HTML fetch boundary for the scraper adapters.
//!
//! One GET per call, one attempt, and every transport-level failure
//! (connection error, timeout, non-2xx status) collapses to `None` so the
//! parse stage can skip cleanly. Nothing past this boundary ever sees a
//! transport error.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

const FETCH_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("med_news_feed/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client used by every adapter.
///
/// The 10-second timeout here is the only deadline the pipeline imposes;
/// callers wanting a tighter overall budget must enforce it externally.
pub fn build_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Fetch a page and return its markup, or `None` on any failure.
///
/// `None` is the "no content" sentinel: callers treat it as "skip
/// parsing". Failures are logged at error level with the offending URL.
#[instrument(level = "info", skip(client))]
pub async fn fetch_html(client: &Client, url: &str) -> Option<String> {
    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!(error = %e, %url, "HTML fetch failed");
            return None;
        }
    };

    let response = match response.error_for_status() {
        Ok(resp) => resp,
        Err(e) => {
            error!(error = %e, %url, "HTML fetch returned error status");
            return None;
        }
    };

    match response.text().await {
        Ok(body) => {
            debug!(bytes = body.len(), %url, "Fetched HTML");
            Some(body)
        }
        Err(e) => {
            error!(error = %e, %url, "Failed reading HTML body");
            None
        }
    }
}
