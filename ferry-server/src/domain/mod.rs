//! Domain types for the island transfer planner.
//!
//! This module contains the core data model: locations, boat segments as
//! stored in the segment table, and the routes composed from them. Segments
//! are validated at construction, so code that receives a `RouteSegment`
//! can trust its parsed travel time.

mod duration;
mod error;
mod location;
mod route;
mod segment;

pub use duration::{InvalidDuration, format_minutes, parse_duration_minutes};
pub use error::DomainError;
pub use location::Location;
pub use route::TransportationRoute;
pub use segment::{RouteSegment, SegmentId, TransportType};
