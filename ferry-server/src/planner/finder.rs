//! Direct and one-stop route search.
//!
//! Routes are at most two segments long: either a direct segment from the
//! origin to the destination, or a segment to some intermediate location
//! followed by a segment from there to the destination. Longer chains are
//! never explored.

use futures::future::try_join_all;
use tracing::debug;

use crate::domain::{Location, TransportationRoute};
use crate::store::{SegmentStore, StoreError};

use super::config::RouteConfig;
use super::optimize::{OptimizationMode, optimize_routes, sort_by_duration};

/// Route planner over a segment store.
///
/// All operations are read-only. Store errors propagate unchanged; "no
/// route" is an empty result, never an error.
pub struct RoutePlanner<S> {
    store: S,
    config: RouteConfig,
}

impl<S: SegmentStore> RoutePlanner<S> {
    /// Create a new planner.
    pub fn new(store: S, config: RouteConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Single-segment routes from `from` to `to`, in store order.
    ///
    /// Segments whose endpoints don't equal the query exactly are dropped,
    /// whatever the store returned.
    pub async fn find_direct_routes(
        &self,
        from: &Location,
        to: &Location,
    ) -> Result<Vec<TransportationRoute>, StoreError> {
        let segments = self.store.segments_between(from, to).await?;
        Ok(segments
            .into_iter()
            .filter(|s| s.from() == from && s.to() == to)
            .map(TransportationRoute::direct)
            .collect())
    }

    /// Two-segment routes from `from` to `to` with one connection.
    ///
    /// For every segment leaving `from`, looks up segments from its
    /// destination to `to` and pairs them. The continuation lookups run
    /// concurrently but results are assembled in the order of the outgoing
    /// segments. Sorted ascending by total duration.
    pub async fn find_one_stop_routes(
        &self,
        from: &Location,
        to: &Location,
    ) -> Result<Vec<TransportationRoute>, StoreError> {
        let mut outgoing = self.store.segments_from(from).await?;
        outgoing.retain(|s| s.from() == from);

        let continuations = try_join_all(
            outgoing
                .iter()
                .map(|first| self.store.segments_between(first.to(), to)),
        )
        .await?;

        let mut routes = Vec::new();
        for (first, seconds) in outgoing.into_iter().zip(continuations) {
            for second in seconds.into_iter().filter(|s| s.to() == to) {
                match TransportationRoute::one_stop(first.clone(), second, self.config.layover_mins)
                {
                    Ok(route) => routes.push(route),
                    // Disconnected legs or out-of-range totals; skip the pair.
                    Err(e) => debug!(error = %e, "skipping segment pair"),
                }
            }
        }

        Ok(sort_by_duration(routes))
    }

    /// Direct and one-stop routes together, ascending by total duration.
    pub async fn find_all_routes(
        &self,
        from: &Location,
        to: &Location,
    ) -> Result<Vec<TransportationRoute>, StoreError> {
        let mut routes = self.find_direct_routes(from, to).await?;
        let one_stop = self.find_one_stop_routes(from, to).await?;

        debug!(
            %from,
            %to,
            direct = routes.len(),
            one_stop = one_stop.len(),
            "found candidate routes"
        );

        routes.extend(one_stop);
        Ok(sort_by_duration(routes))
    }

    /// All candidate routes, ordered by `mode`.
    pub async fn find_optimized_routes(
        &self,
        from: &Location,
        to: &Location,
        mode: OptimizationMode,
    ) -> Result<Vec<TransportationRoute>, StoreError> {
        let routes = self.find_all_routes(from, to).await?;
        Ok(optimize_routes(routes, mode, &self.config))
    }
}
