//! Pure geometry on habitat positions: quadrant membership, quadrant
//! centers, density estimation and hostile range checks.
//!
//! Quadrants are always relative to a drone's current position, never a
//! fixed partition of the habitat.

use crate::constants::HABITAT_SIZE;
use crate::enums::Quadrant;
use crate::records::CreatureReading;
use crate::types::{sq_distance, Position};

/// Whether `point` lies strictly inside `quadrant` around `origin`.
///
/// Points on either of the origin's axes belong to no quadrant.
pub fn in_quadrant(point: Position, quadrant: Quadrant, origin: Position) -> bool {
    let horizontal = if quadrant.is_left() {
        point.x < origin.x
    } else {
        point.x > origin.x
    };
    let vertical = if quadrant.is_top() {
        point.y < origin.y
    } else {
        point.y > origin.y
    };
    horizontal && vertical
}

/// The quadrant around `origin` containing `point`, if it is off-axis.
pub fn quadrant_of(point: Position, origin: Position) -> Option<Quadrant> {
    Quadrant::ALL
        .into_iter()
        .find(|&quadrant| in_quadrant(point, quadrant, origin))
}

/// Center of `quadrant` around `origin`: halfway between the origin and the
/// habitat corner on that side.
pub fn quadrant_center(quadrant: Quadrant, origin: Position) -> Position {
    let x = if quadrant.is_left() {
        origin.x / 2
    } else {
        HABITAT_SIZE / 2 + origin.x / 2
    };
    let y = if quadrant.is_top() {
        origin.y / 2
    } else {
        HABITAT_SIZE / 2 + origin.y / 2
    };
    Position::new(x, y)
}

/// Area in square units of `quadrant` around `origin`, clamped to the habitat.
pub fn quadrant_area(quadrant: Quadrant, origin: Position) -> i64 {
    let width = if quadrant.is_left() {
        origin.x
    } else {
        HABITAT_SIZE - origin.x
    };
    let height = if quadrant.is_top() {
        origin.y
    } else {
        HABITAT_SIZE - origin.y
    };
    i64::from(width.max(0)) * i64::from(height.max(0))
}

/// Creatures per square unit in `quadrant`. Returns `None` for a quadrant of
/// zero area (drone on the habitat border).
pub fn density(origin: Position, quadrant: Quadrant, amount: usize) -> Option<f64> {
    let area = quadrant_area(quadrant, origin);
    if area == 0 {
        return None;
    }
    Some(amount as f64 / area as f64)
}

/// Whether any creature's projected position is strictly within `range` of
/// `position`.
pub fn any_in_range<'a>(
    creatures: impl IntoIterator<Item = &'a CreatureReading>,
    position: Position,
    range: i32,
) -> bool {
    let range_sq = i64::from(range) * i64::from(range);
    creatures
        .into_iter()
        .any(|creature| sq_distance(creature.projected(), position) < range_sq)
}

/// Creatures whose projected position lies in `quadrant` around `origin`.
pub fn in_quadrant_projected<'a>(
    creatures: &'a [CreatureReading],
    quadrant: Quadrant,
    origin: Position,
) -> impl Iterator<Item = &'a CreatureReading> + 'a {
    creatures
        .iter()
        .filter(move |creature| in_quadrant(creature.projected(), quadrant, origin))
}
