//! Crawler module for page fetching and SVG harvesting
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `PageFetcher` trait
//! - Link extraction and canonicalization
//! - SVG fragment collection
//! - Traversal under a shared expansion budget

mod collector;
mod engine;
mod fetcher;
mod parser;

pub use collector::{
    collect_fragments, discovery_message, strip_presentation_attributes, CollectOutcome,
    STRIPPED_ATTRIBUTES,
};
pub use engine::Crawler;
pub use fetcher::{build_http_client, FetchedPage, HttpFetcher, PageFetcher};
pub use parser::{extract_links, extract_links_simple};

use crate::config::Config;
use crate::output::{write_report, CrawlStats};
use crate::storage::{FragmentStore, MemoryStore};
use crate::SweepError;
use std::path::Path;

/// Runs a complete sweep
///
/// This is the main entry point for a run. It will:
/// 1. Build the HTTP client
/// 2. Crawl from the configured start URL
/// 3. Write every distinct fragment to the report file
///
/// If the crawl fails, nothing is written.
///
/// # Arguments
///
/// * `config` - The validated configuration
///
/// # Returns
///
/// * `Ok(CrawlStats)` - Crawl completed and the report was written
/// * `Err(SweepError)` - Crawl or report writing failed
pub async fn sweep(config: &Config) -> Result<CrawlStats, SweepError> {
    let fetcher = HttpFetcher::new(config)?;
    let mut crawler = Crawler::new(fetcher, MemoryStore::new(), config.crawler.clone());

    let stats = crawler.run(&config.crawler.start_url).await?;

    let records = crawler.store().snapshot();
    write_report(&records, Path::new(&config.output.report_path))?;
    tracing::info!(
        "Wrote {} fragments to {}",
        records.len(),
        config.output.report_path
    );

    Ok(stats)
}
