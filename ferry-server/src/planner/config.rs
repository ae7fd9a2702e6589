//! Planner configuration.
//!
//! The layover and the balanced-ranking weights are product calibration
//! values. Defaults are the figures the product team signed off on; change
//! them through configuration, not by editing the constants.

use chrono::Duration;

/// Minutes added between the two legs of a one-stop route.
pub const DEFAULT_LAYOVER_MINS: u32 = 120;

/// Number of routes returned by the suggestion endpoint.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Weight of total minutes in the balanced score.
pub const BALANCED_DURATION_WEIGHT: f64 = 0.6;

/// Weight of scaled cost in the balanced score.
pub const BALANCED_COST_WEIGHT: f64 = 0.4;

/// Divisor applied to cost before weighting, so price units and minutes
/// land on a comparable scale.
pub const BALANCED_COST_SCALE: f64 = 100.0;

/// Configuration parameters for route finding and ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteConfig {
    /// Layover between connecting segments (minutes).
    pub layover_mins: u32,

    /// Maximum number of routes in a suggestion response.
    pub max_suggestions: usize,

    /// Balanced score weight applied to total minutes.
    pub balanced_duration_weight: f64,

    /// Balanced score weight applied to scaled cost.
    pub balanced_cost_weight: f64,

    /// Cost divisor used by the balanced score.
    pub balanced_cost_scale: f64,
}

impl RouteConfig {
    /// Create a configuration with the given layover and suggestion limit,
    /// keeping the default balanced weights. A limit of zero is raised to one.
    pub fn new(layover_mins: u32, max_suggestions: usize) -> Self {
        Self {
            layover_mins,
            max_suggestions: max_suggestions.max(1),
            ..Self::default()
        }
    }

    /// Returns the layover as a Duration.
    pub fn layover(&self) -> Duration {
        Duration::minutes(i64::from(self.layover_mins))
    }

    /// Balanced score for a route with the given totals. Lower is better.
    pub fn balanced_score(&self, total_minutes: u32, total_cost: u64) -> f64 {
        f64::from(total_minutes) * self.balanced_duration_weight
            + (total_cost as f64 / self.balanced_cost_scale) * self.balanced_cost_weight
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            layover_mins: DEFAULT_LAYOVER_MINS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            balanced_duration_weight: BALANCED_DURATION_WEIGHT,
            balanced_cost_weight: BALANCED_COST_WEIGHT,
            balanced_cost_scale: BALANCED_COST_SCALE,
        }
    }
}
