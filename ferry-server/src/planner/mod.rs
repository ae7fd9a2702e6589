//! Island transfer route planner.
//!
//! Answers "how do I get from this island to that one?" from a table of
//! point-to-point boat segments. Candidates are direct segments and
//! one-stop connections with a fixed layover; they are then ordered by
//! speed, cost, comfort, or a balanced blend of time and cost.

mod config;
mod finder;
mod optimize;
mod suggest;


pub use config::{
    BALANCED_COST_SCALE, BALANCED_COST_WEIGHT, BALANCED_DURATION_WEIGHT, DEFAULT_LAYOVER_MINS,
    DEFAULT_MAX_SUGGESTIONS, RouteConfig,
};
pub use finder::RoutePlanner;
pub use optimize::{OptimizationMode, OptimizationModeError, optimize_routes, sort_by_duration};
pub use suggest::RouteSuggestions;
