//! Memoized classification.
//!
//! A [`Classifier`] owns one bounded LRU cache per format predicate plus one
//! for whole-string classification results. Each cache sits behind its own
//! mutex, so a classifier can be shared across threads; the lock is released
//! while a value is being computed.

use crate::cache::{CacheStats, LruCache};
use crate::config::ValidateConfig;
use crate::errors::Result;
use crate::formats::FormatTag;
use crate::predicates::{self, Predicate};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::BTreeMap;

/// A string together with the formats it matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub string: String,
    pub types: Vec<FormatTag>,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// A predicate paired with the cache of its past answers
#[derive(Debug)]
struct MemoizedPredicate {
    tag: FormatTag,
    predicate: Predicate,
    cache: Mutex<LruCache<String, bool>>,
}

impl MemoizedPredicate {
    fn new(tag: FormatTag, cache: LruCache<String, bool>) -> Self {
        Self {
            tag,
            predicate: predicates::predicate_for(tag),
            cache: Mutex::new(cache),
        }
    }

    fn check(&self, candidate: &str) -> bool {
        if let Some(hit) = self.cache.lock().get(candidate) {
            log::trace!("{} cache hit: {:?}", self.tag.name(), candidate);
            return hit;
        }

        log::trace!("{} cache miss: {:?}", self.tag.name(), candidate);
        let matched = (self.predicate)(candidate);
        self.cache.lock().insert(candidate.to_owned(), matched);
        matched
    }
}

/// Counters for every cache owned by a [`Classifier`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifierStats {
    pub predicates: BTreeMap<FormatTag, CacheStats>,
    pub classify: CacheStats,
}

impl std::fmt::Display for ClassifierStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cache Statistics:")?;
        for (tag, stats) in &self.predicates {
            writeln!(f, "  {:<13} {}", tag.name(), stats)?;
        }
        writeln!(f, "  {:<13} {}", "classify", self.classify)
    }
}

/// Classifies strings by format, remembering recent answers.
#[derive(Debug)]
pub struct Classifier {
    predicates: [MemoizedPredicate; 5],
    results: Mutex<LruCache<String, Vec<FormatTag>>>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_caches(LruCache::default, LruCache::default())
    }
}

impl Classifier {
    /// Classifier with the default capacity of 128 entries per cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier whose caches each hold up to `capacity` entries.
    ///
    /// Fails if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let results = LruCache::new(capacity)?;
        Ok(Self::from_caches(
            || LruCache::with_nonzero_capacity(capacity),
            results,
        ))
    }

    /// Classifier sized by `config.cache.capacity`
    pub fn from_config(config: &ValidateConfig) -> Result<Self> {
        Self::with_capacity(config.cache.capacity)
    }

    fn from_caches<F>(mut predicate_cache: F, results: LruCache<String, Vec<FormatTag>>) -> Self
    where
        F: FnMut() -> LruCache<String, bool>,
    {
        let predicates = FormatTag::ALL.map(|tag| MemoizedPredicate::new(tag, predicate_cache()));
        Self {
            predicates,
            results: Mutex::new(results),
        }
    }

    /// Capacity shared by every cache of this classifier
    pub fn capacity(&self) -> usize {
        self.results.lock().capacity()
    }

    /// Check `candidate` against a single format, using that format's cache.
    pub fn check(&self, tag: FormatTag, candidate: &str) -> bool {
        self.memoized(tag).check(candidate)
    }

    pub fn is_url(&self, candidate: &str) -> bool {
        self.check(FormatTag::Url, candidate)
    }

    pub fn is_ipv4(&self, candidate: &str) -> bool {
        self.check(FormatTag::Ipv4, candidate)
    }

    pub fn is_ipv6(&self, candidate: &str) -> bool {
        self.check(FormatTag::Ipv6, candidate)
    }

    pub fn is_email(&self, candidate: &str) -> bool {
        self.check(FormatTag::Email, candidate)
    }

    /// Spaces, tabs and carriage returns are ignored.
    pub fn is_phone_number(&self, candidate: &str) -> bool {
        self.check(FormatTag::PhoneNumber, candidate)
    }

    /// Every format `candidate` matches, in check order
    /// (url, ipv4, ipv6, email, phone_number). Empty if none match.
    pub fn classify(&self, candidate: &str) -> Vec<FormatTag> {
        if let Some(hit) = self.results.lock().get(candidate) {
            log::trace!("classify cache hit: {:?}", candidate);
            return hit;
        }

        let types: Vec<FormatTag> = FormatTag::ALL
            .into_iter()
            .filter(|tag| self.check(*tag, candidate))
            .collect();
        log::debug!("Classified {:?} as {:?}", candidate, types);

        self.results
            .lock()
            .insert(candidate.to_owned(), types.clone());
        types
    }

    /// [`classify`](Self::classify), keeping the input alongside the result
    pub fn classification(&self, candidate: &str) -> Classification {
        Classification {
            string: candidate.to_owned(),
            types: self.classify(candidate),
        }
    }

    /// Snapshot of every cache's counters
    pub fn stats(&self) -> ClassifierStats {
        ClassifierStats {
            predicates: self
                .predicates
                .iter()
                .map(|memo| (memo.tag, memo.cache.lock().stats()))
                .collect(),
            classify: self.results.lock().stats(),
        }
    }

    fn memoized(&self, tag: FormatTag) -> &MemoizedPredicate {
        // `predicates` is built from `FormatTag::ALL`, so position == variant order.
        &self.predicates[tag as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::DEFAULT_CAPACITY;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_capacity() {
        assert_eq!(Classifier::new().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(Classifier::with_capacity(0).is_err());
    }

    #[test]
    fn test_memoized_order_matches_tags() {
        let classifier = Classifier::new();
        for tag in FormatTag::ALL {
            assert_eq!(classifier.memoized(tag).tag, tag);
        }
    }

    #[test]
    fn test_classify_matches_uncached_predicates() {
        let classifier = Classifier::with_capacity(4).unwrap();
        for candidate in [
            "user@example.com",
            "192.168.1.1",
            "2001:db8::1",
            "+1 800 555 0199",
            "https://example.com/path?x=1",
            "",
            "nothing to see",
        ] {
            assert_eq!(classifier.classify(candidate), predicates::classify(candidate));
        }
    }

    #[test]
    fn test_repeated_classify_hits_aggregate_cache() {
        let classifier = Classifier::new();
        let first = classifier.classify("user@example.com");
        let second = classifier.classify("user@example.com");

        assert_eq!(first, second);
        let stats = classifier.stats();
        assert_eq!(stats.classify.misses, 1);
        assert_eq!(stats.classify.hits, 1);
        // Predicates only ran for the first call
        for predicate_stats in stats.predicates.values() {
            assert_eq!(predicate_stats.misses, 1);
            assert_eq!(predicate_stats.hits, 0);
        }
    }

    #[test]
    fn test_direct_predicate_call_warms_classify() {
        let classifier = Classifier::new();
        assert!(classifier.is_ipv4("10.0.0.1"));
        assert_eq!(classifier.classify("10.0.0.1"), vec![FormatTag::Ipv4]);

        let ipv4 = classifier.stats().predicates[&FormatTag::Ipv4];
        assert_eq!(ipv4.misses, 1);
        assert_eq!(ipv4.hits, 1);
    }

    #[test]
    fn test_eviction_forces_recomputation() {
        let classifier = Classifier::with_capacity(2).unwrap();
        classifier.is_url("aa.com");
        classifier.is_url("bb.com");
        classifier.is_url("cc.com");

        // "aa.com" was evicted: asking again is a miss, with the same answer
        assert!(classifier.is_url("aa.com"));
        let url = classifier.stats().predicates[&FormatTag::Url];
        assert_eq!(url.misses, 4);
        assert_eq!(url.hits, 0);
        assert_eq!(url.evictions, 2);
    }

    #[test]
    fn test_classification_keeps_input() {
        let classifier = Classifier::new();
        let result = classifier.classification("nope");
        assert_eq!(result.string, "nope");
        assert!(result.is_empty());
    }

    #[test]
    fn test_stats_display_lists_every_cache() {
        let rendered = Classifier::new().stats().to_string();
        for tag in FormatTag::ALL {
            assert!(rendered.contains(tag.name()));
        }
        assert!(rendered.contains("classify"));
    }

    #[test]
    fn test_classifier_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Classifier>();
    }
}
