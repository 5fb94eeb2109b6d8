//! Cache Store Module
//!
//! Cache engine combining HashMap storage with LRU tracking and optional
//! TTL expiration. Not synchronized; see [`QuestionCache`](super::QuestionCache)
//! for the shared handle.

use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::models::{QuestionGetSingleResponse, QuestionId};

// == Cache Store ==
/// Question storage with LRU eviction and optional TTL support.
///
/// `entries` and `lru` always hold the same key set; every method that
/// touches one updates the other before returning.
#[derive(Debug)]
pub struct CacheStore {
    /// Question payloads by id
    entries: HashMap<QuestionId, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL in seconds applied to new entries, None = entries never expire
    ttl: Option<u64>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity and no expiry.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(max_entries: usize) -> Self {
        Self::with_ttl(max_entries, None)
    }

    /// Creates a new CacheStore whose entries expire `ttl` seconds after
    /// insertion. `None` disables expiry.
    pub fn with_ttl(max_entries: usize, ttl: Option<u64>) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: HashMap::with_capacity(max_entries),
            lru: LruTracker::with_capacity(max_entries),
            stats: CacheStats::new(),
            max_entries,
            ttl,
        }
    }

    // == Get ==
    /// Looks up a question, marking it most recently used on a hit.
    ///
    /// Expired entries are dropped and reported as absent.
    pub fn get(&mut self, question_id: QuestionId) -> Option<QuestionGetSingleResponse> {
        let expired = match self.entries.get(&question_id) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.drop_entry(question_id);
            self.stats.record_miss();
            debug!(question_id, "question cache entry expired");
            return None;
        }

        self.lru.touch(question_id);
        self.stats.record_hit();
        self.entries
            .get(&question_id)
            .map(|entry| entry.payload.clone())
    }

    // == Set ==
    /// Stores a question, replacing any existing entry for the same id.
    ///
    /// If the id is new and the cache is full, the least recently used
    /// entry is evicted first. Returns the evicted id, if any.
    pub fn set(
        &mut self,
        question_id: QuestionId,
        payload: QuestionGetSingleResponse,
    ) -> Option<QuestionId> {
        let mut evicted = None;

        if !self.entries.contains_key(&question_id) && self.entries.len() >= self.max_entries {
            if let Some(oldest) = self.lru.evict_oldest() {
                self.entries.remove(&oldest);
                self.stats.record_eviction();
                debug!(evicted = oldest, "question cache full, evicted LRU entry");
                evicted = Some(oldest);
            }
        }

        self.entries
            .insert(question_id, CacheEntry::new(payload, self.ttl));
        self.lru.touch(question_id);
        self.stats.set_total_entries(self.entries.len());

        evicted
    }

    // == Remove ==
    /// Removes an entry. Returns whether one was present.
    pub fn remove(&mut self, question_id: QuestionId) -> bool {
        let removed = self.drop_entry(question_id);
        if removed {
            self.stats.record_invalidation();
        }
        removed
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        if self.ttl.is_none() {
            return 0;
        }

        let now = Utc::now();
        let expired: Vec<QuestionId> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(&question_id, _)| question_id)
            .collect();

        for question_id in &expired {
            self.drop_entry(*question_id);
        }

        expired.len()
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn contains(&self, question_id: QuestionId) -> bool {
        self.entries.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    pub fn ttl(&self) -> Option<u64> {
        self.ttl
    }

    fn drop_entry(&mut self, question_id: QuestionId) -> bool {
        let removed = self.entries.remove(&question_id).is_some();
        self.lru.remove(question_id);
        debug_assert_eq!(self.entries.len(), self.lru.len());
        self.stats.set_total_entries(self.entries.len());
        removed
    }
}
