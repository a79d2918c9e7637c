//! Quadrant target selection.
//!
//! Two heuristics are available. Parity splits remaining creatures between
//! drone pairs by id parity with no coordination; density sends each drone
//! toward the quadrant with the most unscanned creatures per unit area.

use tracing::debug;

use seabed_core::enums::{Quadrant, TargetStrategy};
use seabed_core::geometry::{any_in_range, density, in_quadrant_projected};
use seabed_core::records::CreatureReading;
use seabed_core::state::{DroneRecord, PlayerState};
use seabed_core::types::CreatureId;

use crate::config::BehaviorConfig;

/// Resolve a search quadrant for `drone` with the configured strategy.
/// `None` means there is nothing worth searching for right now.
pub fn find_target(
    drone: &DroneRecord,
    player: &PlayerState,
    hostiles: &[CreatureReading],
    config: &BehaviorConfig,
) -> Option<Quadrant> {
    match config.strategy {
        TargetStrategy::Parity => find_target_by_parity(drone, player),
        TargetStrategy::Density => find_target_by_density(drone, player, hostiles, config),
    }
}

/// The creature a drone should chase under the parity rule: the lowest
/// remaining id with `id % 2 == drone_id / 2`, else the lowest remaining id.
pub fn parity_creature(drone: &DroneRecord, player: &PlayerState) -> Option<CreatureId> {
    let remaining = &player.remaining_creatures;
    let wanted = drone.id / 2;
    remaining
        .iter()
        .copied()
        .find(|id| id.rem_euclid(2) == wanted)
        .or_else(|| remaining.first().copied())
}

pub fn find_target_by_parity(drone: &DroneRecord, player: &PlayerState) -> Option<Quadrant> {
    let Some(creature) = parity_creature(drone, player) else {
        debug!(drone = drone.id, "no remaining creatures");
        return None;
    };
    debug!(drone = drone.id, creature, "parity target");

    let quadrant = drone.quadrant_of_creature(creature);
    if quadrant.is_none() {
        debug!(drone = drone.id, creature, "creature not on radar");
    }
    quadrant
}

pub fn find_target_by_density(
    drone: &DroneRecord,
    player: &PlayerState,
    hostiles: &[CreatureReading],
    config: &BehaviorConfig,
) -> Option<Quadrant> {
    if any_in_range(hostiles, drone.position, config.flee_distance) {
        debug!(drone = drone.id, "hostile within flee distance");
        return None;
    }

    let mut best: Option<(Quadrant, f64)> = None;
    for quadrant in Quadrant::ALL {
        let guarded = any_in_range(
            in_quadrant_projected(hostiles, quadrant, drone.position),
            drone.position,
            config.avoid_distance,
        );
        if guarded {
            debug!(drone = drone.id, %quadrant, "avoiding guarded quadrant");
            continue;
        }

        let count = drone
            .blips_in(quadrant)
            .filter(|id| player.remaining_creatures.contains(id))
            .count();
        let Some(score) = density(drone.position, quadrant, count) else {
            continue;
        };
        debug!(drone = drone.id, %quadrant, score, "quadrant density");

        if score > 0.0 && best.map_or(true, |(_, top)| score > top) {
            best = Some((quadrant, score));
        }
    }

    best.map(|(quadrant, _)| quadrant)
}
