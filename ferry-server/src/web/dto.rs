//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{RouteSegment, TransportationRoute, format_minutes};
use crate::planner::RouteSuggestions;

/// Query parameters for route lookups.
///
/// Location names are taken verbatim; no trimming or case folding.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin location name
    pub from: String,

    /// Destination location name
    pub to: String,

    /// `speed`, `cost`, `comfort` or `balanced` (default)
    pub optimization: Option<String>,
}

/// A segment of a route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// Segment table ID
    pub id: u32,

    pub from: String,

    pub to: String,

    /// `ferry` or `speedboat`
    #[serde(rename = "type")]
    pub kind: String,

    pub name: String,

    /// Duration as published
    pub duration: String,

    pub duration_minutes: u32,

    pub price: u64,

    pub schedule: String,

    pub amenities: Vec<String>,

    pub boat_info: Option<String>,
}

/// A route option.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Segments in travel order
    pub segments: Vec<SegmentResult>,

    /// Total travel time including layover
    pub total_duration_minutes: u32,

    /// Total travel time for display, e.g. "2h 50m"
    pub total_duration: String,

    pub total_cost: u64,

    pub is_direct_route: bool,

    pub description: String,
}

/// Response listing routes.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteResult>,
}

/// Response for route suggestions.
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    /// Top routes, best first
    pub routes: Vec<RouteResult>,

    /// Whether any suggested route is direct
    pub has_direct_route: bool,

    /// Status message
    pub message: String,
}

/// Response listing known locations.
#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl SegmentResult {
    /// Create from a domain RouteSegment.
    pub fn from_segment(segment: &RouteSegment) -> Self {
        Self {
            id: segment.id().0,
            from: segment.from().to_string(),
            to: segment.to().to_string(),
            kind: segment.kind().to_string(),
            name: segment.name().to_string(),
            duration: segment.duration().to_string(),
            duration_minutes: segment.duration_minutes(),
            price: segment.price(),
            schedule: segment.schedule().to_string(),
            amenities: segment.amenities().to_vec(),
            boat_info: segment.boat_info().map(str::to_string),
        }
    }
}

impl RouteResult {
    /// Create from a domain TransportationRoute.
    pub fn from_route(route: &TransportationRoute) -> Self {
        Self {
            segments: route
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            total_duration_minutes: route.total_duration_minutes(),
            total_duration: format_minutes(route.total_duration_minutes()),
            total_cost: route.total_cost(),
            is_direct_route: route.is_direct_route(),
            description: route.description().to_string(),
        }
    }
}

impl RoutesResponse {
    pub fn from_routes(routes: &[TransportationRoute]) -> Self {
        Self {
            routes: routes.iter().map(RouteResult::from_route).collect(),
        }
    }
}

impl SuggestionsResponse {
    /// Create from planner suggestions.
    pub fn from_suggestions(suggestions: &RouteSuggestions) -> Self {
        Self {
            routes: suggestions
                .routes
                .iter()
                .map(RouteResult::from_route)
                .collect(),
            has_direct_route: suggestions.has_direct_route,
            message: suggestions.message.clone(),
        }
    }
}
