//! Cache Module
//!
//! Read-through cache of single-question payloads with LRU eviction,
//! explicit invalidation and optional TTL expiration.

mod entry;
mod lru;
mod question_cache;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use question_cache::QuestionCache;
pub use stats::CacheStats;
pub use store::CacheStore;
