//! Route segment stores.
//!
//! The planner only needs two lookups from the segment table: "segments
//! between these two locations" and "segments leaving this location". The
//! `SegmentStore` trait captures exactly that, so the table can live in a
//! JSON file, behind the CMS's REST API, or in a test fixture.

mod cache;
mod error;
mod memory;
mod record;
mod remote;

use std::future::Future;

pub use cache::{CacheConfig, CachedSegmentStore};
pub use error::StoreError;
pub use memory::InMemorySegmentStore;
pub use record::{SegmentRecord, published_segments};
pub use remote::{HttpSegmentStore, HttpStoreConfig};

use crate::domain::{Location, RouteSegment};

/// Read access to published route segments.
///
/// Locations are matched exactly. Implementations return only published
/// segments and never filter by anything else.
pub trait SegmentStore: Send + Sync {
    /// All published segments from `from` to `to`.
    fn segments_between(
        &self,
        from: &Location,
        to: &Location,
    ) -> impl Future<Output = Result<Vec<RouteSegment>, StoreError>> + Send;

    /// All published segments departing `from`, to any destination.
    fn segments_from(
        &self,
        from: &Location,
    ) -> impl Future<Output = Result<Vec<RouteSegment>, StoreError>> + Send;

    /// Every location appearing in a published segment, sorted and
    /// de-duplicated.
    fn locations(&self) -> impl Future<Output = Result<Vec<Location>, StoreError>> + Send;
}

/// The segment store chosen at startup.
pub enum SegmentSource {
    /// Segments loaded from a local JSON file
    File(InMemorySegmentStore),
    /// Segments fetched from the CMS
    Remote(HttpSegmentStore),
}

impl SegmentStore for SegmentSource {
    async fn segments_between(
        &self,
        from: &Location,
        to: &Location,
    ) -> Result<Vec<RouteSegment>, StoreError> {
        match self {
            SegmentSource::File(store) => store.segments_between(from, to).await,
            SegmentSource::Remote(store) => store.segments_between(from, to).await,
        }
    }

    async fn segments_from(&self, from: &Location) -> Result<Vec<RouteSegment>, StoreError> {
        match self {
            SegmentSource::File(store) => store.segments_from(from).await,
            SegmentSource::Remote(store) => store.segments_from(from).await,
        }
    }

    async fn locations(&self) -> Result<Vec<Location>, StoreError> {
        match self {
            SegmentSource::File(store) => store.locations().await,
            SegmentSource::Remote(store) => store.locations().await,
        }
    }
}

/// Sorted, de-duplicated endpoints of `segments`.
pub(crate) fn collect_locations<'a>(
    segments: impl IntoIterator<Item = &'a RouteSegment>,
) -> Vec<Location> {
    let set: std::collections::BTreeSet<&Location> = segments
        .into_iter()
        .flat_map(|s| [s.from(), s.to()])
        .collect();
    set.into_iter().cloned().collect()
}
