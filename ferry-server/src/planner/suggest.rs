//! Route suggestions for display.
//!
//! Wraps the optimized route list with a short, human-readable status line
//! and trims it to the configured number of suggestions.

use crate::domain::{Location, TransportationRoute};
use crate::store::{SegmentStore, StoreError};

use super::finder::RoutePlanner;
use super::optimize::OptimizationMode;

/// Top route candidates with a summary message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSuggestions {
    /// Best routes first, at most `max_suggestions` of them.
    pub routes: Vec<TransportationRoute>,

    /// Whether any suggested route is direct.
    pub has_direct_route: bool,

    /// Status message for the traveller.
    pub message: String,
}

impl RouteSuggestions {
    /// Build suggestions from an already-ordered route list.
    pub fn from_routes(
        mut routes: Vec<TransportationRoute>,
        from: &Location,
        to: &Location,
        max_suggestions: usize,
    ) -> Self {
        routes.truncate(max_suggestions);
        if routes.is_empty() {
            return Self::none_found(from, to);
        }

        let has_direct_route = routes.iter().any(|r| r.is_direct_route());
        let count = routes.len();

        let message = if has_direct_route {
            format!("Found {count} route(s) from {from} to {to}, including direct options.")
        } else {
            format!(
                "No direct routes available. Found {count} connecting route(s) from {from} to {to}."
            )
        };

        Self {
            routes,
            has_direct_route,
            message,
        }
    }

    /// The empty result.
    pub fn none_found(from: &Location, to: &Location) -> Self {
        Self {
            routes: Vec::new(),
            has_direct_route: false,
            message: format!(
                "No transportation routes found between {from} and {to}. Please try different islands."
            ),
        }
    }
}

impl<S: SegmentStore> RoutePlanner<S> {
    /// The top optimized routes with a status message.
    ///
    /// Only store failures produce an error; finding nothing is reported
    /// through the message.
    pub async fn get_route_suggestions(
        &self,
        from: &Location,
        to: &Location,
        mode: OptimizationMode,
    ) -> Result<RouteSuggestions, StoreError> {
        let routes = self.find_optimized_routes(from, to, mode).await?;
        Ok(RouteSuggestions::from_routes(
            routes,
            from,
            to,
            self.config().max_suggestions,
        ))
    }
}
