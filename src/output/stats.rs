//! Run statistics

use std::time::Duration;

/// Counters collected over one crawl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Pages fetched successfully, the start page included
    pub pages_fetched: usize,

    /// Expansion steps consumed from the shared budget
    pub expansion_steps: usize,

    /// Distinct fragments recorded in the store
    pub fragments_recorded: usize,

    /// Fragments found again after their first sighting
    pub duplicates_skipped: usize,

    /// Failed fetches passed over under the `skip` policy
    pub fetch_failures: usize,

    /// Wall-clock time of the traversal
    pub elapsed: Duration,
}

impl CrawlStats {
    /// Fetched pages per second over the whole run
    pub fn pages_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.pages_fetched as f64 / secs
        } else {
            0.0
        }
    }
}

/// Prints statistics to stdout in a human-readable format
pub fn print_statistics(stats: &CrawlStats) {
    println!("=== SVG-Sweep Statistics ===\n");
    println!("Pages fetched:        {}", stats.pages_fetched);
    println!("Expansion steps:      {}", stats.expansion_steps);
    println!("Fragments recorded:   {}", stats.fragments_recorded);
    println!("Duplicates skipped:   {}", stats.duplicates_skipped);
    if stats.fetch_failures > 0 {
        println!("Fetch failures:       {}", stats.fetch_failures);
    }
    println!(
        "Elapsed:              {:.2}s ({:.2} pages/sec)",
        stats.elapsed.as_secs_f64(),
        stats.pages_per_second()
    );
}
