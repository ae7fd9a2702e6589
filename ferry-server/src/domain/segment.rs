//! Route segments: single point-to-point boat legs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::duration::parse_duration_minutes;
use super::{DomainError, Location};

/// Identifier of a segment row in the segment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub u32);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of boat serving a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    /// Public or private ferry
    Ferry,
    /// Speedboat transfer
    Speedboat,
}

impl TransportType {
    /// Returns the lowercase name used in the segment table.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Ferry => "ferry",
            TransportType::Speedboat => "speedboat",
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ferry" => Ok(TransportType::Ferry),
            "speedboat" => Ok(TransportType::Speedboat),
            other => Err(DomainError::UnknownTransportType(other.to_string())),
        }
    }
}

/// One directed boat leg between two locations.
///
/// The duration is kept both as published (for display) and as parsed
/// minutes. Construction fails if the published duration can't be parsed,
/// so every `RouteSegment` has a usable travel time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSegment {
    id: SegmentId,
    from: Location,
    to: Location,
    kind: TransportType,
    duration: String,
    duration_minutes: u32,
    price: u64,
    name: String,
    schedule: String,
    amenities: Vec<String>,
    boat_info: Option<String>,
}

impl RouteSegment {
    /// Create a segment with empty descriptive metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferry_server::domain::{Location, RouteSegment, SegmentId, TransportType};
    ///
    /// let seg = RouteSegment::new(
    ///     SegmentId(1),
    ///     Location::new("Male"),
    ///     Location::new("Maafushi"),
    ///     TransportType::Ferry,
    ///     "1 hour 30 min",
    ///     10,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(seg.duration_minutes(), 90);
    /// assert_eq!(seg.duration(), "1 hour 30 min");
    /// ```
    pub fn new(
        id: SegmentId,
        from: Location,
        to: Location,
        kind: TransportType,
        duration: impl Into<String>,
        price: u64,
    ) -> Result<Self, DomainError> {
        let duration = duration.into();
        let duration_minutes = parse_duration_minutes(&duration)?;

        Ok(Self {
            id,
            from,
            to,
            kind,
            duration,
            duration_minutes,
            price,
            name: String::new(),
            schedule: String::new(),
            amenities: Vec::new(),
            boat_info: None,
        })
    }

    /// Set the display name (e.g. "Male - Maafushi Public Ferry").
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the free-text schedule.
    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    /// Set the list of on-board amenities.
    pub fn with_amenities(mut self, amenities: Vec<String>) -> Self {
        self.amenities = amenities;
        self
    }

    /// Set the boat description.
    pub fn with_boat_info(mut self, boat_info: Option<String>) -> Self {
        self.boat_info = boat_info;
        self
    }

    pub fn id(&self) -> SegmentId {
        self.id
    }

    pub fn from(&self) -> &Location {
        &self.from
    }

    pub fn to(&self) -> &Location {
        &self.to
    }

    pub fn kind(&self) -> TransportType {
        self.kind
    }

    /// The duration as published, e.g. "1 hour 30 min".
    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Price in the segment table's currency unit.
    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }

    pub fn boat_info(&self) -> Option<&str> {
        self.boat_info.as_deref()
    }

    pub fn is_speedboat(&self) -> bool {
        self.kind == TransportType::Speedboat
    }
}
