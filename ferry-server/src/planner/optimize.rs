//! Route ordering strategies.
//!
//! Every strategy is a stable re-sort of the candidate list: nothing is
//! filtered out, and routes that compare equal keep their incoming order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::TransportationRoute;

use super::config::RouteConfig;

/// Error returned when parsing an unknown optimization mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown optimization mode: {0} (expected speed, cost, comfort or balanced)")]
pub struct OptimizationModeError(String);

/// How candidate routes are ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationMode {
    /// Shortest total time first
    Speed,
    /// Cheapest first
    Cost,
    /// Direct routes first, then routes with more speedboat legs
    Comfort,
    /// Weighted blend of time and cost
    #[default]
    Balanced,
}

impl OptimizationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationMode::Speed => "speed",
            OptimizationMode::Cost => "cost",
            OptimizationMode::Comfort => "comfort",
            OptimizationMode::Balanced => "balanced",
        }
    }
}

impl fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizationMode {
    type Err = OptimizationModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "speed" => Ok(OptimizationMode::Speed),
            "cost" => Ok(OptimizationMode::Cost),
            "comfort" => Ok(OptimizationMode::Comfort),
            "balanced" => Ok(OptimizationMode::Balanced),
            other => Err(OptimizationModeError(other.to_string())),
        }
    }
}

/// Sort routes ascending by total duration.
pub fn sort_by_duration(mut routes: Vec<TransportationRoute>) -> Vec<TransportationRoute> {
    routes.sort_by_key(|r| r.total_duration_minutes());
    routes
}

/// Re-order routes according to `mode`.
///
/// - `Speed`: ascending total minutes
/// - `Cost`: ascending total cost
/// - `Comfort`: direct before connecting, then more speedboat legs first
/// - `Balanced`: ascending `minutes * w_d + (cost / scale) * w_c`
///
/// Returns the same routes, reordered.
pub fn optimize_routes(
    mut routes: Vec<TransportationRoute>,
    mode: OptimizationMode,
    config: &RouteConfig,
) -> Vec<TransportationRoute> {
    match mode {
        OptimizationMode::Speed => routes.sort_by_key(|r| r.total_duration_minutes()),
        OptimizationMode::Cost => routes.sort_by_key(|r| r.total_cost()),
        OptimizationMode::Comfort => routes.sort_by(compare_comfort),
        OptimizationMode::Balanced => routes.sort_by(|a, b| {
            let a_score = config.balanced_score(a.total_duration_minutes(), a.total_cost());
            let b_score = config.balanced_score(b.total_duration_minutes(), b.total_cost());
            a_score.total_cmp(&b_score)
        }),
    }

    routes
}

fn compare_comfort(a: &TransportationRoute, b: &TransportationRoute) -> Ordering {
    // Primary: direct first
    let direct_cmp = b.is_direct_route().cmp(&a.is_direct_route());
    if direct_cmp != Ordering::Equal {
        return direct_cmp;
    }

    // Secondary: more speedboat legs
    b.speedboat_count().cmp(&a.speedboat_count())
}
