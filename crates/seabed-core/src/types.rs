//! Fundamental geometric and identity types.

use glam::{I64Vec2, IVec2};

/// Integer position in habitat space. x grows to the right, y grows downward
/// (y = 0 is the surface).
pub type Position = IVec2;

/// Per-turn displacement of a creature. Adding it to a [`Position`] projects
/// the creature's next-turn location.
pub type Velocity = IVec2;

/// Stable creature identifier from the catalog.
pub type CreatureId = i32;

/// Stable drone identifier, the only key correlating drones across turns.
pub type DroneId = i32;

/// Squared euclidean distance between two positions.
///
/// Computed in 64-bit so projected positions outside the habitat never
/// overflow.
pub fn sq_distance(a: Position, b: Position) -> i64 {
    let delta: I64Vec2 = a.as_i64vec2() - b.as_i64vec2();
    delta.length_squared()
}

/// Where a creature will be next turn if it keeps its velocity.
pub fn projected(position: Position, velocity: Velocity) -> Position {
    position + velocity
}
