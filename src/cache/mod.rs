//! In-memory memoization for classification results.
//!
//! [`LruCache`] is the generic bounded store; [`CacheStats`] exposes its
//! counters so callers can see hits, misses and evictions.

pub mod lru;
pub mod stats;

pub use lru::{LruCache, DEFAULT_CAPACITY};
pub use stats::CacheStats;
