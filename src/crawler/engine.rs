//! Crawl engine - traversal orchestration
//!
//! The engine walks outward from a start page depth-first and strictly
//! sequentially: one fetch in flight at a time, and each page's links are
//! followed to completion before the next sibling is fetched. Traversal uses
//! an explicit stack of per-page link iterators instead of recursion.
//!
//! All cross-page state (the fragment store, the expansion budget, run
//! statistics) is owned by the [`Crawler`] and lives for one run.

use crate::config::{CrawlerConfig, FailurePolicy};
use crate::crawler::collector::collect_fragments;
use crate::crawler::fetcher::{FetchedPage, PageFetcher};
use crate::crawler::parser::extract_links;
use crate::output::CrawlStats;
use crate::state::CrawlBudget;
use crate::storage::FragmentStore;
use crate::SweepError;
use scraper::Html;
use std::collections::HashSet;
use std::time::Instant;

/// Main crawl engine
pub struct Crawler<F, S> {
    fetcher: F,
    store: S,
    budget: CrawlBudget,
    config: CrawlerConfig,
    stats: CrawlStats,
    visited: HashSet<String>,
}

impl<F: PageFetcher, S: FragmentStore> Crawler<F, S> {
    /// Creates a new crawler
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Network access used for every page
    /// * `store` - Accumulator for harvested fragments
    /// * `config` - Crawler settings; `max_depth` seeds the expansion budget
    pub fn new(fetcher: F, store: S, config: CrawlerConfig) -> Self {
        Self {
            fetcher,
            store,
            budget: CrawlBudget::new(config.max_depth),
            config,
            stats: CrawlStats::default(),
            visited: HashSet::new(),
        }
    }

    /// Runs the crawl from the given start URL
    ///
    /// The start page is fetched and expanded but not itself searched for
    /// fragments. Every page reached from it is searched, then expanded while
    /// the shared budget lasts. With the default `abort` policy the first
    /// failed fetch ends the run with that error.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlStats)` - Traversal finished; fragments are in the store
    /// * `Err(SweepError)` - The start page or (under `abort`) any page failed
    pub async fn run(&mut self, start_url: &str) -> Result<CrawlStats, SweepError> {
        let started = Instant::now();
        tracing::info!(
            "Starting crawl at {} with expansion budget {}",
            start_url,
            self.budget.remaining()
        );

        let start = self.fetch_page(start_url).await?;
        if self.config.skip_visited {
            self.visited.insert(start_url.to_string());
            self.visited.insert(start.final_url.to_string());
        }

        let mut stack: Vec<std::vec::IntoIter<String>> = Vec::new();
        if let Some(links) = self.visit(&start, false) {
            stack.push(links.into_iter());
        }

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let Some(url) = frame.next() else {
                stack.pop();
                continue;
            };

            if self.config.skip_visited && !self.visited.insert(url.clone()) {
                tracing::trace!("Skipping already visited {}", url);
                continue;
            }

            let page = match self.fetch_page(&url).await {
                Ok(page) => page,
                Err(e) if e.is_fetch_failure() && self.skips_failures() => {
                    tracing::warn!("Skipping {}: {}", url, e);
                    self.stats.fetch_failures += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if self.config.skip_visited {
                self.visited.insert(page.final_url.to_string());
            }

            if let Some(links) = self.visit(&page, true) {
                stack.push(links.into_iter());
            }
        }

        self.stats.elapsed = started.elapsed();
        tracing::info!(
            "Crawl finished: {} pages fetched, {} expansions, {} fragments in {:?}",
            self.stats.pages_fetched,
            self.stats.expansion_steps,
            self.stats.fragments_recorded,
            self.stats.elapsed
        );

        Ok(self.stats.clone())
    }

    fn skips_failures(&self) -> bool {
        self.config.on_fetch_error == FailurePolicy::Skip
    }

    /// Fetches one page and counts it
    async fn fetch_page(&mut self, url: &str) -> Result<FetchedPage, SweepError> {
        tracing::debug!("Fetching {}", url);
        let page = self.fetcher.fetch(url).await?;
        self.stats.pages_fetched += 1;
        Ok(page)
    }

    /// Processes a fetched page
    ///
    /// Collects fragments when `collect` is set, then consumes one unit of
    /// the budget. Returns the page's links if the budget allowed expansion.
    /// The parsed document never outlives this call.
    fn visit(&mut self, page: &FetchedPage, collect: bool) -> Option<Vec<String>> {
        let document = Html::parse_document(&page.body);

        if collect {
            let outcome = collect_fragments(&document, &page.final_url, &mut self.store);
            self.stats.fragments_recorded += outcome.recorded;
            self.stats.duplicates_skipped += outcome.duplicates;
        }

        if !self.budget.try_consume() {
            tracing::trace!("Budget exhausted, not expanding {}", page.final_url);
            return None;
        }
        self.stats.expansion_steps += 1;

        let links = extract_links(&document, &page.final_url, self.config.skip_missing_href);
        tracing::debug!(
            "Expanding {} ({} links, {} expansions left)",
            page.final_url,
            links.len(),
            self.budget.remaining()
        );
        Some(links)
    }

    /// The fragment store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the crawler, returning its fragment store
    pub fn into_store(self) -> S {
        self.store
    }

    /// The shared expansion budget
    pub fn budget(&self) -> &CrawlBudget {
        &self.budget
    }
}
