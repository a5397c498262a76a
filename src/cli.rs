//! Command-line interface for the aggregation binary.
//!
//! API keys can be passed as flags or picked up from the environment
//! (`X_API_KEY`, `DEEPL_AUTH_KEY`); they are read once here and carried
//! in an [`crate::config::AppConfig`], never re-read inside the adapters.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the feed aggregator.
///
/// # Examples
///
/// ```sh
/// # Aggregate every source, print the feed JSON to stdout
/// med_news_feed
///
/// # Only the scrapers, written to a file
/// med_news_feed -s nikkei -s jiji -o feed.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Write the aggregated feed JSON to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Sources to aggregate; repeatable, defaults to all three
    #[arg(short, long, value_enum)]
    pub source: Vec<Source>,

    /// NewsAPI key (News API feed is skipped without one)
    #[arg(long, env = "X_API_KEY")]
    pub news_api_key: Option<String>,

    /// DeepL auth key (titles stay untranslated without one)
    #[arg(long, env = "DEEPL_AUTH_KEY")]
    pub deepl_auth_key: Option<String>,
}

/// The three article sources.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Nikkei,
    Jiji,
    NewsApi,
}

impl Cli {
    /// Whether this run should include `source`. No `-s` flags means all.
    pub fn wants(&self, source: Source) -> bool {
        self.source.is_empty() || self.source.contains(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_all_sources() {
        let cli = Cli::parse_from(["med_news_feed"]);
        assert!(cli.wants(Source::Nikkei));
        assert!(cli.wants(Source::Jiji));
        assert!(cli.wants(Source::NewsApi));
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_source_filter() {
        let cli = Cli::parse_from(["med_news_feed", "-s", "jiji"]);
        assert!(cli.wants(Source::Jiji));
        assert!(!cli.wants(Source::Nikkei));
        assert!(!cli.wants(Source::NewsApi));
    }

    #[test]
    fn test_keys_and_output_flags() {
        let cli = Cli::parse_from([
            "med_news_feed",
            "--news-api-key",
            "abc",
            "--deepl-auth-key",
            "def",
            "-o",
            "/tmp/feed.json",
        ]);
        assert_eq!(cli.news_api_key.as_deref(), Some("abc"));
        assert_eq!(cli.deepl_auth_key.as_deref(), Some("def"));
        assert_eq!(cli.output.as_deref(), Some("/tmp/feed.json"));
    }
}
