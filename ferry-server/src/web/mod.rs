//! Web layer for the island transfer planner.
//!
//! Provides HTTP endpoints for finding and ranking boat routes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::{AppState, ServerStore};
pub use templates::*;
