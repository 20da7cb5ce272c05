//! HTTP fetcher implementation
//!
//! Pages are fetched through the [`PageFetcher`] trait so the crawl engine can
//! run against the network or against canned pages in tests.

use crate::config::Config;
use crate::SweepError;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Maximum redirect hops followed before a fetch fails
const MAX_REDIRECTS: usize = 10;

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,

    /// Page body content
    pub body: String,
}

/// Network access for the crawl engine
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches a page, following redirects
    ///
    /// Fails with [`SweepError::Fetch`] on transport errors and
    /// [`SweepError::Status`] on a non-success status code.
    async fn fetch(&self, url: &str) -> Result<FetchedPage, SweepError>;
}

/// Builds an HTTP client with proper configuration
///
/// Every request carries the configured User-Agent. No timeout is applied
/// unless `request-timeout-secs` is set.
///
/// # Example
///
/// ```no_run
/// use svg_sweep::config::Config;
/// use svg_sweep::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.value.as_str())
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.crawler.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// [`PageFetcher`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a client built from the configuration
    pub fn new(config: &Config) -> Result<Self, SweepError> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, SweepError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SweepError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SweepError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let body = response.text().await.map_err(|source| SweepError::Fetch {
            url: url.to_string(),
            source,
        })?;

        Ok(FetchedPage { final_url, body })
    }
}
