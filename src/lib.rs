//! # med_news_feed
//!
//! Multi-source medical-news ingestion and normalization.
//!
//! Three independent adapters pull articles from heterogeneous sources —
//! two HTML listing pages (Nikkei Medical, Jiji Medical) and the NewsAPI
//! keyword search — and normalize each into a positional tuple shape the
//! presentation layer consumes uniformly. A DeepL-backed translation step
//! localizes the News API titles and date utilities bridge the sources'
//! formats to a canonical JST representation.
//!
//! ## Failure model
//!
//! No error ever escapes an adapter. Transport failures become a "no
//! content" sentinel at the fetch boundary, parse and decode failures
//! become empty batches, translation failures fall back to the original
//! titles, and date-format failures return the input unchanged (or
//! "unknown date"). A consumer can always render "zero articles" instead
//! of an error page.
//!
//! ## Pipeline
//!
//! 1. **Fetch**: one GET per adapter invocation, 10-second timeout
//! 2. **Parse/shape**: source markup or JSON into canonical tuples
//! 3. **Translate** (News API only): batch title translation to Japanese
//! 4. **Normalize**: UTC timestamps to JST display strings

pub mod auth;
pub mod cache;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod models;
pub mod newsapi;
pub mod scrapers;
pub mod translate;
pub mod utils;
