//! In-memory segment store.
//!
//! Loads the segment table from a JSON file of `SegmentRecord`s and serves
//! lookups from memory. This is the store used in development and when the
//! server runs against an exported snapshot of the CMS table.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Location, RouteSegment};

use super::record::{SegmentRecord, published_segments};
use super::{SegmentStore, StoreError, collect_locations};

/// Segment store backed by a `Vec` in memory.
///
/// Cloning shares the underlying table, so a reload through one handle is
/// visible through all of them.
#[derive(Debug, Clone, Default)]
pub struct InMemorySegmentStore {
    segments: Arc<RwLock<Vec<RouteSegment>>>,
}

impl InMemorySegmentStore {
    /// Create a store holding `segments`.
    pub fn new(segments: Vec<RouteSegment>) -> Self {
        Self {
            segments: Arc::new(RwLock::new(segments)),
        }
    }

    /// Create a store from table rows, dropping unpublished ones.
    pub fn from_records(records: Vec<SegmentRecord>) -> Result<Self, StoreError> {
        Ok(Self::new(published_segments(records)?))
    }

    /// Load a store from a JSON array of segment records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Ok(Self::new(read_json_file(path.as_ref())?))
    }

    /// Replace the table with the contents of `path`.
    ///
    /// On error the current contents are kept. Returns the number of
    /// published segments loaded.
    pub async fn reload(&self, path: impl AsRef<Path>) -> Result<usize, StoreError> {
        let segments = read_json_file(path.as_ref())?;
        let count = segments.len();
        *self.segments.write().await = segments;
        Ok(count)
    }

    /// Number of published segments held.
    pub async fn len(&self) -> usize {
        self.segments.read().await.len()
    }

    /// Returns true if the store holds no segments.
    pub async fn is_empty(&self) -> bool {
        self.segments.read().await.is_empty()
    }
}

fn read_json_file(path: &Path) -> Result<Vec<RouteSegment>, StoreError> {
    let json = std::fs::read_to_string(path)?;
    let records: Vec<SegmentRecord> = serde_json::from_str(&json)?;
    published_segments(records)
}

impl SegmentStore for InMemorySegmentStore {
    async fn segments_between(
        &self,
        from: &Location,
        to: &Location,
    ) -> Result<Vec<RouteSegment>, StoreError> {
        let segments = self.segments.read().await;
        Ok(segments
            .iter()
            .filter(|s| s.from() == from && s.to() == to)
            .cloned()
            .collect())
    }

    async fn segments_from(&self, from: &Location) -> Result<Vec<RouteSegment>, StoreError> {
        let segments = self.segments.read().await;
        Ok(segments
            .iter()
            .filter(|s| s.from() == from)
            .cloned()
            .collect())
    }

    async fn locations(&self) -> Result<Vec<Location>, StoreError> {
        let segments = self.segments.read().await;
        Ok(collect_locations(segments.iter()))
    }
}
