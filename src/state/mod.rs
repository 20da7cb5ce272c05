//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlBudget`: the single expansion counter shared by every branch of a crawl

mod budget;

pub use budget::CrawlBudget;
