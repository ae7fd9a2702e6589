//! Location names.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named place a boat departs from or arrives at (an island, a resort
/// jetty, the airport).
///
/// Locations are compared byte-for-byte. Two segments only connect when
/// their location strings are identical, so `"Male"` and `"male "` are
/// different places. Any normalization belongs to whoever produces the
/// strings, not to the planner.
///
/// # Examples
///
/// ```
/// use ferry_server::domain::Location;
///
/// let male = Location::new("Male");
/// assert_eq!(male.as_str(), "Male");
/// assert_ne!(male, Location::new("male"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Create a location from its display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the location name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the name is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Location {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({:?})", self.0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
