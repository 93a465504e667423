//! Bulletin HTTP client.
//!
//! Fetches the RSS document and decodes it into [`RawEntry`] values.
//! Retry and backoff are deliberately left to the caller's environment;
//! one fetch is one request.

use tracing::{debug, warn};

use super::entry::RawEntry;
use super::error::FeedError;

/// Default URL of the RHMZ observed-conditions bulletin.
const DEFAULT_FEED_URL: &str = "https://www.hidmet.gov.rs/eng/osmotreni/index.rss";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Bulletin URL.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Set a custom feed URL (for testing or mirrors).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// HTTP client for the observed-conditions bulletin.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// Create a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch the bulletin and decode it into raw entries.
    ///
    /// One entry per RSS item; items missing a title or description are
    /// skipped with a warning rather than failing the whole fetch.
    pub async fn fetch(&self) -> Result<Vec<RawEntry>, FeedError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let entries = parse_feed(body.as_ref())?;
        debug!(count = entries.len(), "fetched bulletin entries");

        Ok(entries)
    }
}

/// Decode an RSS document into raw entries.
///
/// Split out of [`FeedClient::fetch`] so decoding can be exercised
/// without a network.
pub fn parse_feed(body: &[u8]) -> Result<Vec<RawEntry>, FeedError> {
    let feed = feed_rs::parser::parse(body).map_err(|e| FeedError::Parse {
        message: e.to_string(),
    })?;

    let mut entries = Vec::with_capacity(feed.entries.len());
    for item in feed.entries {
        match (item.title, item.summary) {
            (Some(title), Some(summary)) => {
                entries.push(RawEntry::new(title.content, summary.content));
            }
            _ => warn!(id = %item.id, "skipping feed item without title or description"),
        }
    }

    Ok(entries)
}
