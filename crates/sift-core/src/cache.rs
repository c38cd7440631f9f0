//! Scoped quality-score cache with TTL eviction
//!
//! Quality scores are pure in note content, so a service curating
//! overlapping corpora can reuse them between runs. The cache is an
//! explicit, owned object handed to the curator; nothing here is global.
//! Keys are SHA-256 hashes of the content.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default entry lifetime
pub const DEFAULT_TTL: Duration = Duration::from_secs(15 * 60);

/// Default maximum number of live entries
pub const DEFAULT_CAPACITY: usize = 4096;

#[derive(Debug)]
struct Entry {
    score: u32,
    inserted: Instant,
}

/// Content-keyed score cache with a TTL and a capacity bound
#[derive(Debug)]
pub struct ScoreCache {
    entries: HashMap<String, Entry>,
    ttl: Duration,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_CAPACITY)
    }
}

impl ScoreCache {
    /// Create a cache with an explicit TTL and capacity
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        ScoreCache {
            entries: HashMap::new(),
            ttl,
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached score for this content, computing and storing it
    /// on a miss or when the cached entry has expired.
    pub fn get_or_insert_with(&mut self, content: &str, compute: impl FnOnce() -> u32) -> u32 {
        let key = content_key(content);
        let now = Instant::now();

        if let Some(entry) = self.entries.get(&key) {
            if now.duration_since(entry.inserted) < self.ttl {
                self.hits += 1;
                return entry.score;
            }
        }

        self.misses += 1;
        let score = compute();

        if self.entries.len() >= self.capacity {
            self.evict_expired(now);
            if self.entries.len() >= self.capacity {
                // still full of live entries; start over rather than grow
                tracing::debug!(entries = self.entries.len(), "score cache overflow, clearing");
                self.entries.clear();
            }
        }

        self.entries.insert(key, Entry { score, inserted: now });
        score
    }

    /// Drop every entry older than the TTL
    fn evict_expired(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.duration_since(entry.inserted) < ttl);
    }

    /// Number of stored entries, including any not yet evicted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that required computing the score
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop all entries and reset counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

fn content_key(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_after_insert() {
        let mut cache = ScoreCache::default();
        assert_eq!(cache.get_or_insert_with("abc", || 7), 7);
        assert_eq!(cache.get_or_insert_with("abc", || unreachable!()), 7);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_distinct_content_distinct_entries() {
        let mut cache = ScoreCache::default();
        cache.get_or_insert_with("abc", || 1);
        cache.get_or_insert_with("def", || 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_or_insert_with("def", || unreachable!()), 2);
    }

    #[test]
    fn test_zero_ttl_always_recomputes() {
        let mut cache = ScoreCache::new(Duration::ZERO, 16);
        cache.get_or_insert_with("abc", || 1);
        // entry exists but is already expired, so this is a miss
        assert_eq!(cache.get_or_insert_with("abc", || 9), 9);
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_capacity_overflow_clears_live_entries() {
        let mut cache = ScoreCache::new(DEFAULT_TTL, 2);
        cache.get_or_insert_with("a", || 1);
        cache.get_or_insert_with("b", || 2);
        cache.get_or_insert_with("c", || 3);
        // overflow with nothing expired clears the table before inserting
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_or_insert_with("c", || unreachable!()), 3);
    }

    #[test]
    fn test_clear_resets_counters() {
        let mut cache = ScoreCache::default();
        cache.get_or_insert_with("a", || 1);
        cache.get_or_insert_with("a", || 1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 0);
    }
}
