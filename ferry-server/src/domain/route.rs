//! Transportation routes.
//!
//! A `TransportationRoute` is a candidate itinerary from an origin to a
//! destination: either a single direct segment, or two segments joined at an
//! intermediate location with a layover in between. Routes are built fresh
//! for every query and never stored.

use chrono::Duration;

use super::{DomainError, Location, RouteSegment, TransportType};

/// A complete itinerary of one or two segments.
///
/// # Invariants
///
/// - One or two segments
/// - For two segments, the first arrives where the second departs
/// - Totals are computed at construction and never change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportationRoute {
    segments: Vec<RouteSegment>,
    layover_minutes: u32,
    total_duration_minutes: u32,
    total_cost: u64,
    description: String,
}

impl TransportationRoute {
    /// A route served by a single segment.
    pub fn direct(segment: RouteSegment) -> Self {
        let description = format!(
            "Direct {} from {} to {}",
            segment.kind(),
            segment.from(),
            segment.to()
        );

        Self {
            total_duration_minutes: segment.duration_minutes(),
            total_cost: segment.price(),
            layover_minutes: 0,
            segments: vec![segment],
            description,
        }
    }

    /// A route with one connection.
    ///
    /// The total duration is both legs plus `layover_minutes`; the total cost
    /// is both prices.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `first` doesn't arrive where `second` departs, or if
    /// the combined duration or price doesn't fit its integer type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferry_server::domain::{Location, RouteSegment, SegmentId, TransportType, TransportationRoute};
    ///
    /// let leg = |id, from: &str, to: &str, dur: &str, price| {
    ///     RouteSegment::new(SegmentId(id), from.into(), to.into(), TransportType::Speedboat, dur, price)
    ///         .unwrap()
    /// };
    ///
    /// let route = TransportationRoute::one_stop(
    ///     leg(2, "Male", "Guraidhoo", "30 min", 20),
    ///     leg(3, "Guraidhoo", "Maafushi", "20 min", 15),
    ///     120,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(route.total_duration_minutes(), 170);
    /// assert_eq!(route.total_cost(), 35);
    /// assert!(!route.is_direct_route());
    /// assert_eq!(route.via().unwrap().as_str(), "Guraidhoo");
    /// ```
    pub fn one_stop(
        first: RouteSegment,
        second: RouteSegment,
        layover_minutes: u32,
    ) -> Result<Self, DomainError> {
        if first.to() != second.from() {
            return Err(DomainError::SegmentsNotConnected(
                first.to().clone(),
                second.from().clone(),
            ));
        }

        let total_duration_minutes = first
            .duration_minutes()
            .checked_add(second.duration_minutes())
            .and_then(|mins| mins.checked_add(layover_minutes))
            .ok_or(DomainError::TotalOverflow)?;
        let total_cost = first
            .price()
            .checked_add(second.price())
            .ok_or(DomainError::TotalOverflow)?;
        let description = format!(
            "{} to {} via {} ({} + {})",
            first.from(),
            second.to(),
            first.to(),
            first.kind(),
            second.kind()
        );

        Ok(Self {
            segments: vec![first, second],
            layover_minutes,
            total_duration_minutes,
            total_cost,
            description,
        })
    }

    /// Returns the segments in travel order.
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    pub fn total_duration_minutes(&self) -> u32 {
        self.total_duration_minutes
    }

    /// Returns the total duration as a `Duration`.
    pub fn total_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.total_duration_minutes))
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Layover added between segments (0 for direct routes).
    pub fn layover_minutes(&self) -> u32 {
        self.layover_minutes
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if the route is a single segment.
    pub fn is_direct_route(&self) -> bool {
        self.segments.len() == 1
    }

    /// Number of speedboat legs.
    pub fn speedboat_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.kind() == TransportType::Speedboat)
            .count()
    }

    /// Where the route starts.
    pub fn origin(&self) -> &Location {
        // Both constructors guarantee at least one segment.
        self.segments[0].from()
    }

    /// Where the route ends.
    pub fn destination(&self) -> &Location {
        self.segments[self.segments.len() - 1].to()
    }

    /// The connecting location, for one-stop routes.
    pub fn via(&self) -> Option<&Location> {
        match self.segments.as_slice() {
            [first, _] => Some(first.to()),
            _ => None,
        }
    }
}
