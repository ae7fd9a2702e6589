//! Domain error types.
//!
//! These errors represent validation failures when building segments and
//! routes. They are distinct from store and transport errors.

use super::{InvalidDuration, Location};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Published duration could not be parsed
    #[error(transparent)]
    InvalidDuration(#[from] InvalidDuration),

    /// Transport type is not one of the known boat kinds
    #[error("unknown transport type: {0}")]
    UnknownTransportType(String),

    /// Consecutive segments don't share a location
    #[error("segments do not connect: first arrives at {0}, second departs {1}")]
    SegmentsNotConnected(Location, Location),

    /// Combined duration or price of a route is out of range
    #[error("route totals overflow")]
    TotalOverflow,
}
