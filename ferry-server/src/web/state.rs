//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::{RouteConfig, RoutePlanner};
use crate::store::{CacheConfig, CachedSegmentStore, SegmentSource};

/// The store stack the server runs on.
pub type ServerStore = CachedSegmentStore<SegmentSource>;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Route planner over the cached segment store
    pub planner: Arc<RoutePlanner<ServerStore>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(source: SegmentSource, cache_config: &CacheConfig, config: RouteConfig) -> Self {
        let store = CachedSegmentStore::new(source, cache_config);
        Self {
            planner: Arc::new(RoutePlanner::new(store, config)),
        }
    }

    /// The cached segment store.
    pub fn store(&self) -> &ServerStore {
        self.planner.store()
    }
}
