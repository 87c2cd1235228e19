//! Bounded least-recently-used cache.
//!
//! Recency is tracked with a monotonically increasing tick per access. The
//! entry map stores each key's current tick, and an ordered index maps ticks
//! back to keys so the oldest entry is always the first one in the index.

use crate::cache::stats::CacheStats;
use crate::errors::{Error, Result};
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Default number of entries kept per cache.
pub const DEFAULT_CAPACITY: usize = 128;

#[derive(Debug, Clone)]
struct Slot<V> {
    value: V,
    tick: u64,
}

/// A key-value store holding at most `capacity` entries, evicting the entry
/// unused for the longest time when a new key is inserted into a full cache.
#[derive(Debug, Clone)]
pub struct LruCache<K, V> {
    capacity: usize,
    entries: HashMap<K, Slot<V>>,
    recency: BTreeMap<u64, K>,
    next_tick: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create an empty cache. Fails if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self::with_nonzero_capacity(capacity))
    }

    /// Build without the zero check; `capacity` must already be validated.
    pub(crate) fn with_nonzero_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            recency: BTreeMap::new(),
            next_tick: 0,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key`, marking it most recently used on a hit.
    ///
    /// Counts a hit or a miss.
    pub fn get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let tick = self.advance();
        match self.entries.get_mut(key) {
            Some(slot) => {
                let previous = std::mem::replace(&mut slot.tick, tick);
                let value = slot.value.clone();
                if let Some(owned) = self.recency.remove(&previous) {
                    self.recency.insert(tick, owned);
                }
                self.hits += 1;
                Some(value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Check for `key` without touching recency or counters.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Insert or replace `key`, making it most recently used.
    ///
    /// Returns the evicted key, if inserting required evicting one.
    pub fn insert(&mut self, key: K, value: V) -> Option<K> {
        let tick = self.advance();

        if let Some(slot) = self.entries.get_mut(&key) {
            let previous = std::mem::replace(&mut slot.tick, tick);
            slot.value = value;
            self.recency.remove(&previous);
            self.recency.insert(tick, key);
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        self.recency.insert(tick, key.clone());
        self.entries.insert(key, Slot { value, tick });
        evicted
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: &K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(key) {
            return value;
        }
        let value = compute();
        self.insert(key.clone(), value.clone());
        value
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            capacity: self.capacity,
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }

    fn evict_oldest(&mut self) -> Option<K> {
        let (_, key) = self.recency.pop_first()?;
        self.entries.remove(&key);
        self.evictions += 1;
        Some(key)
    }

    fn advance(&mut self) -> u64 {
        let tick = self.next_tick;
        self.next_tick += 1;
        tick
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::with_nonzero_capacity(DEFAULT_CAPACITY)
    }
}
