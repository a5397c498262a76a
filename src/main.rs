//! Aggregation binary: run the three adapters and emit one feed document.
//!
//! The adapters are independent, so they run concurrently; each makes at
//! most one outbound call and fails soft to an empty feed. News API
//! timestamps are converted to JST display form before output, matching
//! what the presentation layer renders.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use med_news_feed::cache::{self, InMemoryCache};
use med_news_feed::cli::{Cli, Source};
use med_news_feed::config::AppConfig;
use med_news_feed::fetch::build_client;
use med_news_feed::models::AggregatedFeed;
use med_news_feed::translate::DeeplTranslator;
use med_news_feed::utils::convert_utc_to_jst;
use med_news_feed::{newsapi, scrapers};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("med_news_feed starting up");

    let args = Cli::parse();
    debug!(?args.source, ?args.output, "Parsed CLI arguments");

    let config = AppConfig::new(args.news_api_key.clone(), args.deepl_auth_key.clone());
    let client = build_client();
    let translator = DeeplTranslator::new(client.clone(), config.deepl_auth_key.clone());
    let mut session_cache = InMemoryCache::new();

    // ---- Run the adapters concurrently; each fails soft to empty ----
    let nikkei_feed = async {
        if args.wants(Source::Nikkei) {
            scrapers::nikkei::scrape(&client).await
        } else {
            Vec::new()
        }
    };
    let jiji_feed = async {
        if args.wants(Source::Jiji) {
            scrapers::jiji::scrape(&client).await
        } else {
            Vec::new()
        }
    };
    let news_api_feed = async {
        if args.wants(Source::NewsApi) {
            cache::get_or_fetch(&mut session_cache, "news_api", || {
                newsapi::fetch_news_from_api(&client, config.news_api_key.as_deref(), &translator)
            })
            .await
        } else {
            Vec::new()
        }
    };

    let (nikkei, jiji, mut news_api) = futures::join!(nikkei_feed, jiji_feed, news_api_feed);

    // Published-at stays ISO-8601 UTC through the sort; display wants JST.
    for article in &mut news_api {
        article.1 = convert_utc_to_jst(&article.1);
    }

    info!(
        nikkei = nikkei.len(),
        jiji = jiji.len(),
        news_api = news_api.len(),
        "Aggregation complete"
    );

    let feed = AggregatedFeed {
        nikkei,
        jiji,
        news_api,
    };
    let json = serde_json::to_string_pretty(&feed)?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, json).await?;
            info!(%path, "Wrote aggregated feed");
        }
        None => println!("{json}"),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
