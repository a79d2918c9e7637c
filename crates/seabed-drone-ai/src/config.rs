//! Tunable behavior parameters.
//!
//! Consolidates every threshold the state machine, targeting and avoidance
//! read, so a run can be reconfigured from a JSON file.

use serde::{Deserialize, Serialize};

use seabed_core::constants::*;
use seabed_core::enums::TargetStrategy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Target-selection heuristic.
    pub strategy: TargetStrategy,
    /// Depth at or above which a surfacing drone may start searching.
    pub surface_threshold: i32,
    /// Carried scans that force a drone back to the surface.
    pub max_scans: usize,
    /// Full-retreat distance to a projected hostile.
    pub flee_distance: i32,
    /// Path-deviation distance to a projected hostile.
    pub avoid_distance: i32,
    /// Headlamp-off distance to a projected hostile.
    pub dark_distance: i32,
    /// Horizontal/vertical ratio under which a searching drone waits.
    pub drift_ratio: f64,
    /// Length of an evasive single-axis step.
    pub evade_step: i32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            strategy: TargetStrategy::default(),
            surface_threshold: SURFACE_THRESHOLD,
            max_scans: MAX_SCANS,
            flee_distance: FLEE_DISTANCE,
            avoid_distance: AVOID_DISTANCE,
            dark_distance: DARK_DISTANCE,
            drift_ratio: DRIFT_RATIO,
            evade_step: EVADE_STEP,
        }
    }
}

impl BehaviorConfig {
    pub fn with_strategy(mut self, strategy: TargetStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
