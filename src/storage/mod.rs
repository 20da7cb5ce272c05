//! Storage module for harvested fragments
//!
//! This module provides the deduplicating store that accumulates every
//! distinct SVG fragment seen during a crawl, together with the page that
//! first contained it.

mod memory;
mod traits;

pub use memory::MemoryStore;
pub use traits::{normalize_fragment, FragmentRecord, FragmentStore};
