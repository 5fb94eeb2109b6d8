//! Shared question cache handle.
//!
//! Wraps a [`CacheStore`] in a single mutex so that lookups, inserts,
//! removals and the recency bookkeeping they imply are serialized. None of
//! the operations perform I/O or await, so the lock is never held across a
//! suspension point.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::models::{QuestionGetSingleResponse, QuestionId};

// == Question Cache ==
/// Cheaply cloneable handle to a bounded LRU cache of single-question reads.
///
/// Construct one per process and pass clones to whatever serves requests.
#[derive(Debug, Clone)]
pub struct QuestionCache {
    inner: Arc<Mutex<CacheStore>>,
}

impl QuestionCache {
    // == Constructors ==
    /// Creates a cache holding at most `max_entries` questions, with no
    /// time-based expiry.
    pub fn new(max_entries: usize) -> Self {
        Self::from_store(CacheStore::new(max_entries))
    }

    /// Creates a cache whose entries also expire `ttl` seconds after insertion.
    pub fn with_ttl(max_entries: usize, ttl: Option<u64>) -> Self {
        Self::from_store(CacheStore::with_ttl(max_entries, ttl))
    }

    fn from_store(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // == Get ==
    /// Returns the cached question, or `None` on a miss.
    pub fn get(&self, question_id: QuestionId) -> Option<QuestionGetSingleResponse> {
        let hit = self.inner.lock().get(question_id);
        debug!(question_id, hit = hit.is_some(), "question cache lookup");
        hit
    }

    // == Set ==
    /// Inserts or replaces the cached question for `question_id`.
    pub fn set(&self, question_id: QuestionId, payload: QuestionGetSingleResponse) {
        self.inner.lock().set(question_id, payload);
    }

    // == Remove ==
    /// Invalidates the entry for `question_id`. Absent ids are ignored.
    pub fn remove(&self, question_id: QuestionId) {
        if self.inner.lock().remove(question_id) {
            debug!(question_id, "question cache entry invalidated");
        }
    }

    // == Cleanup Expired ==
    /// Drops expired entries, returning how many were removed.
    pub fn cleanup_expired(&self) -> usize {
        self.inner.lock().cleanup_expired()
    }

    // == Introspection ==
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn ttl(&self) -> Option<u64> {
        self.inner.lock().ttl()
    }
}
