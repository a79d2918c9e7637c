//! Game constants and tuning parameters.

// --- Habitat ---

/// Habitat width and height in units. The habitat is a square.
pub const HABITAT_SIZE: i32 = 10_000;

/// y coordinate of the surface line, where drones save their scans.
pub const SURFACE_Y: i32 = 0;

// --- Behavior thresholds ---

/// A surfacing drone at or above this depth may pick a new search target.
pub const SURFACE_THRESHOLD: i32 = 500;

/// Unsaved scans a drone carries before it must surface.
pub const MAX_SCANS: usize = 6;

// --- Hostile distances ---

/// Every evasive candidate this close to a hostile forces a full retreat.
pub const FLEE_DISTANCE: i32 = 800;

/// A projected hostile this close to the drone triggers path deviation.
pub const AVOID_DISTANCE: i32 = 1200;

/// A projected hostile this close to the drone switches the headlamp off.
pub const DARK_DISTANCE: i32 = 2000;

// --- Movement ---

/// Horizontal/vertical offset ratio under which a searching drone waits
/// instead of moving.
pub const DRIFT_RATIO: f64 = 0.1;

/// Length of an evasive single-axis step.
pub const EVADE_STEP: i32 = 600;
