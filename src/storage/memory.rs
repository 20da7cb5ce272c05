use crate::storage::traits::{FragmentRecord, FragmentStore};
use std::collections::HashSet;

/// In-memory fragment store
///
/// Keeps records in insertion order and indexes them by normalized body, so
/// a lookup compares normalized text against normalized text only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<FragmentRecord>,
    seen: HashSet<String>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a fragment with this normalized body is recorded
    pub fn contains(&self, normalized: &str) -> bool {
        self.seen.contains(normalized)
    }
}

impl FragmentStore for MemoryStore {
    fn insert_if_new(&mut self, normalized: &str, source_url: &str, body: &str) -> bool {
        if self.seen.contains(normalized) {
            return false;
        }

        self.seen.insert(normalized.to_string());
        self.records.push(FragmentRecord {
            source_url: source_url.to_string(),
            body: body.to_string(),
        });
        true
    }

    fn snapshot(&self) -> Vec<FragmentRecord> {
        self.records.clone()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
