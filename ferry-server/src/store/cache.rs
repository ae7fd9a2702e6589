//! Caching layer for segment lookups.
//!
//! A one-stop search issues one lookup for the origin's outgoing segments
//! and one per outgoing segment for its continuations. Popular origins
//! (Male, the airport) repeat the same lookups on every request, so the raw
//! store answers are cached for a short TTL. Routes themselves are always
//! rebuilt from these answers.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Location, RouteSegment};

use super::{SegmentStore, StoreError};

/// Cache key: the store query that produced an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum SegmentQuery {
    Between(Location, Location),
    From(Location),
    Locations,
}

/// Cached lookup results.
#[derive(Clone)]
enum CacheEntry {
    Segments(Arc<Vec<RouteSegment>>),
    Locations(Arc<Vec<Location>>),
}

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

/// Segment store with caching.
///
/// Wraps any `SegmentStore` and caches successful lookups. Errors are never
/// cached.
pub struct CachedSegmentStore<S> {
    inner: S,
    cache: MokaCache<SegmentQuery, CacheEntry>,
}

impl<S: SegmentStore> CachedSegmentStore<S> {
    /// Create a new cached store.
    pub fn new(inner: S, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, cache }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    async fn cached_segments<F>(
        &self,
        key: SegmentQuery,
        fetch: F,
    ) -> Result<Vec<RouteSegment>, StoreError>
    where
        F: Future<Output = Result<Vec<RouteSegment>, StoreError>>,
    {
        if let Some(CacheEntry::Segments(cached)) = self.cache.get(&key).await {
            return Ok(cached.as_ref().clone());
        }

        let segments = fetch.await?;
        self.cache
            .insert(key, CacheEntry::Segments(Arc::new(segments.clone())))
            .await;

        Ok(segments)
    }
}

impl<S: SegmentStore> SegmentStore for CachedSegmentStore<S> {
    async fn segments_between(
        &self,
        from: &Location,
        to: &Location,
    ) -> Result<Vec<RouteSegment>, StoreError> {
        let key = SegmentQuery::Between(from.clone(), to.clone());
        self.cached_segments(key, self.inner.segments_between(from, to))
            .await
    }

    async fn segments_from(&self, from: &Location) -> Result<Vec<RouteSegment>, StoreError> {
        let key = SegmentQuery::From(from.clone());
        self.cached_segments(key, self.inner.segments_from(from))
            .await
    }

    async fn locations(&self) -> Result<Vec<Location>, StoreError> {
        if let Some(CacheEntry::Locations(cached)) = self.cache.get(&SegmentQuery::Locations).await
        {
            return Ok(cached.as_ref().clone());
        }

        let locations = self.inner.locations().await?;
        self.cache
            .insert(
                SegmentQuery::Locations,
                CacheEntry::Locations(Arc::new(locations.clone())),
            )
            .await;

        Ok(locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SegmentId, TransportType};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store that counts lookups and can be told to fail.
    struct CountingStore {
        segments: Vec<RouteSegment>,
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingStore {
        fn new(segments: Vec<RouteSegment>) -> Self {
            Self {
                segments,
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self) -> Result<(), StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(StoreError::Api {
                    status: 503,
                    message: "down".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    impl SegmentStore for CountingStore {
        async fn segments_between(
            &self,
            from: &Location,
            to: &Location,
        ) -> Result<Vec<RouteSegment>, StoreError> {
            self.hit()?;
            Ok(self
                .segments
                .iter()
                .filter(|s| s.from() == from && s.to() == to)
                .cloned()
                .collect())
        }

        async fn segments_from(&self, from: &Location) -> Result<Vec<RouteSegment>, StoreError> {
            self.hit()?;
            Ok(self
                .segments
                .iter()
                .filter(|s| s.from() == from)
                .cloned()
                .collect())
        }

        async fn locations(&self) -> Result<Vec<Location>, StoreError> {
            self.hit()?;
            Ok(crate::store::collect_locations(self.segments.iter()))
        }
    }

    fn seg(id: u32, from: &str, to: &str) -> RouteSegment {
        RouteSegment::new(SegmentId(id), from.into(), to.into(), TransportType::Ferry, "45 min", 10)
            .unwrap()
    }

    fn loc(s: &str) -> Location {
        Location::new(s)
    }

    #[tokio::test]
    async fn repeated_lookup_hits_cache() {
        let store = CachedSegmentStore::new(
            CountingStore::new(vec![seg(1, "Male", "Maafushi")]),
            &CacheConfig::default(),
        );

        let first = store.segments_between(&loc("Male"), &loc("Maafushi")).await.unwrap();
        let second = store.segments_between(&loc("Male"), &loc("Maafushi")).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.inner().calls(), 1);
    }

    #[tokio::test]
    async fn queries_are_keyed_separately() {
        let store = CachedSegmentStore::new(
            CountingStore::new(vec![seg(1, "Male", "Maafushi")]),
            &CacheConfig::default(),
        );

        store.segments_from(&loc("Male")).await.unwrap();
        store.segments_between(&loc("Male"), &loc("Maafushi")).await.unwrap();
        store.segments_between(&loc("Maafushi"), &loc("Male")).await.unwrap();
        store.locations().await.unwrap();

        assert_eq!(store.inner().calls(), 4);

        store.segments_from(&loc("Male")).await.unwrap();
        store.locations().await.unwrap();
        assert_eq!(store.inner().calls(), 4);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let store = CachedSegmentStore::new(
            CountingStore::new(vec![seg(1, "Male", "Maafushi")]),
            &CacheConfig::default(),
        );

        store.segments_from(&loc("Male")).await.unwrap();
        store.invalidate_all();
        store.segments_from(&loc("Male")).await.unwrap();

        assert_eq!(store.inner().calls(), 2);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let mut inner = CountingStore::new(vec![]);
        inner.fail = true;
        let store = CachedSegmentStore::new(inner, &CacheConfig::default());

        assert!(store.segments_from(&loc("Male")).await.is_err());
        assert!(store.segments_from(&loc("Male")).await.is_err());
        assert_eq!(store.inner().calls(), 2);
    }
}
