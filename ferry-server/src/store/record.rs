//! Segment table rows as served by the CMS.
//!
//! `SegmentRecord` mirrors the transport segment table column for column.
//! It is converted into a validated `RouteSegment` before the planner sees
//! it.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Location, RouteSegment, SegmentId, TransportType};

use super::StoreError;

fn default_published() -> bool {
    true
}

/// One row of the transport segment table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub id: u32,

    pub from_location: String,

    pub to_location: String,

    /// `"ferry"` or `"speedboat"`
    #[serde(rename = "type")]
    pub kind: String,

    /// Published duration, e.g. `"1 hour 30 min"`
    pub duration: String,

    pub price: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub schedule: String,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[serde(default)]
    pub boat_info: Option<String>,

    /// Draft rows are hidden from travellers.
    #[serde(default = "default_published")]
    pub published: bool,
}

impl TryFrom<SegmentRecord> for RouteSegment {
    type Error = StoreError;

    fn try_from(record: SegmentRecord) -> Result<Self, Self::Error> {
        let id = SegmentId(record.id);
        let invalid = |source: DomainError| StoreError::InvalidSegment { id, source };

        let kind: TransportType = record.kind.parse().map_err(invalid)?;
        let segment = RouteSegment::new(
            id,
            Location::new(record.from_location),
            Location::new(record.to_location),
            kind,
            record.duration,
            record.price,
        )
        .map_err(invalid)?;

        Ok(segment
            .with_name(record.name)
            .with_schedule(record.schedule)
            .with_amenities(record.amenities)
            .with_boat_info(record.boat_info))
    }
}

/// Convert records into segments, dropping unpublished rows.
///
/// Fails on the first invalid published row.
pub fn published_segments(records: Vec<SegmentRecord>) -> Result<Vec<RouteSegment>, StoreError> {
    records
        .into_iter()
        .filter(|r| r.published)
        .map(RouteSegment::try_from)
        .collect()
}
