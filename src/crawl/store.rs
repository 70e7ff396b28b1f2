// src/crawl/store.rs
// =============================================================================
// A small set type used for both the frontier and the visited URLs.
//
// It wraps a HashSet so membership checks and removals are O(1), and exposes
// only the handful of operations the crawl loop needs.
// =============================================================================

use crate::error::CrawlError;
use std::collections::HashSet;
use std::hash::Hash;

// Below this capacity a scan is cheap enough that shrinking isn't worth it
const MIN_SHRINK_CAPACITY: usize = 64;

/// Uniqueness-enforcing collection with an explicit interface
#[derive(Debug, Clone)]
pub struct UrlSet<T> {
    items: HashSet<T>,
}

impl<T> Default for UrlSet<T> {
    fn default() -> Self {
        UrlSet {
            items: HashSet::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> UrlSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item. Returns false if it was already present.
    pub fn add(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    /// Removes an item. Returns false if it was not present.
    ///
    /// Releases memory once the set has drained to under a quarter of its
    /// capacity, so `pick_any` does not keep scanning empty buckets.
    pub fn remove(&mut self, item: &T) -> bool {
        let removed = self.items.remove(item);
        if removed
            && self.items.capacity() > MIN_SHRINK_CAPACITY
            && self.items.len() * 4 < self.items.capacity()
        {
            self.items.shrink_to_fit();
        }
        removed
    }

    pub fn has(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns some member of the set, without removing it
    ///
    /// Which member is unspecified (HashSet iteration order). The lookup
    /// walks the table from the start, so its cost tracks capacity, not
    /// length; `remove` keeps the two close.
    pub fn pick_any(&self) -> Result<T, CrawlError> {
        self.items.iter().next().cloned().ok_or(CrawlError::EmptyContainer)
    }
}

impl<T: Eq + Hash + Clone + Ord> UrlSet<T> {
    /// All members, sorted
    pub fn to_ordered_list(&self) -> Vec<T> {
        let mut list: Vec<T> = self.items.iter().cloned().collect();
        list.sort();
        list
    }
}
