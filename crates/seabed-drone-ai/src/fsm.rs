//! Drone behavior finite state machine.
//!
//! Pure functions that compute behavior transitions and the resulting
//! command for one drone based on its record and the visible hostiles.
//! Operates on plain data; the caller owns and mutates the game state.

use glam::DVec2;
use tracing::debug;

use seabed_core::commands::DroneCommand;
use seabed_core::constants::SURFACE_Y;
use seabed_core::enums::{DroneBehavior, Quadrant};
use seabed_core::geometry::{any_in_range, quadrant_center};
use seabed_core::records::CreatureReading;
use seabed_core::state::{DroneRecord, PlayerState};
use seabed_core::types::Position;

use crate::avoidance::cleanup_direction;
use crate::config::BehaviorConfig;
use crate::targeting::find_target;

/// Input to the behavior FSM for a single drone.
pub struct DroneContext<'a> {
    pub drone: &'a DroneRecord,
    pub player: &'a PlayerState,
    pub hostiles: &'a [CreatureReading],
    pub config: &'a BehaviorConfig,
}

/// Output of a transition evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorUpdate {
    pub new_behavior: DroneBehavior,
    pub behavior_changed: bool,
}

/// Evaluate the transition for one drone. Runs once per turn before
/// [`process`].
pub fn evaluate(ctx: &DroneContext) -> BehaviorUpdate {
    let current = ctx.drone.behavior;
    let new_behavior = match current {
        DroneBehavior::Surfacing => evaluate_surfacing(ctx),
        DroneBehavior::Searching { .. } => evaluate_searching(ctx),
    };
    BehaviorUpdate {
        new_behavior,
        behavior_changed: new_behavior != current,
    }
}

fn evaluate_surfacing(ctx: &DroneContext) -> DroneBehavior {
    if ctx.drone.position.y > ctx.config.surface_threshold {
        return DroneBehavior::Surfacing;
    }
    match find_target(ctx.drone, ctx.player, ctx.hostiles, ctx.config) {
        Some(target) => DroneBehavior::Searching { target },
        None => DroneBehavior::Surfacing,
    }
}

fn evaluate_searching(ctx: &DroneContext) -> DroneBehavior {
    if ctx.drone.current_scans.len() >= ctx.config.max_scans {
        debug!(drone = ctx.drone.id, "scan cap reached");
        return DroneBehavior::Surfacing;
    }
    match find_target(ctx.drone, ctx.player, ctx.hostiles, ctx.config) {
        Some(target) => DroneBehavior::Searching { target },
        None => DroneBehavior::Surfacing,
    }
}

/// Headlamp stays on unless a projected hostile is within dark distance.
pub fn use_light(ctx: &DroneContext) -> bool {
    !any_in_range(ctx.hostiles, ctx.drone.position, ctx.config.dark_distance)
}

/// Whether heading from `from` to `to` is close enough to vertical that the
/// drone should drift instead of moving.
pub fn is_drifting(from: Position, to: Position, drift_ratio: f64) -> bool {
    let offset: DVec2 = (to - from).as_dvec2().abs();
    offset.y > 0.0 && offset.x / offset.y < drift_ratio
}

/// Produce the command for a drone in `behavior`.
pub fn process(ctx: &DroneContext, behavior: DroneBehavior) -> DroneCommand {
    match behavior {
        DroneBehavior::Surfacing => process_surfacing(ctx),
        DroneBehavior::Searching { target } => process_searching(ctx, target),
    }
}

fn process_surfacing(ctx: &DroneContext) -> DroneCommand {
    let surface = Position::new(ctx.drone.position.x, SURFACE_Y);
    DroneCommand::move_to(surface, use_light(ctx), "Surfacing")
}

fn process_searching(ctx: &DroneContext, quadrant: Quadrant) -> DroneCommand {
    let position = ctx.drone.position;
    let light = use_light(ctx);

    let mut target = quadrant_center(quadrant, position);
    if any_in_range(ctx.hostiles, position, ctx.config.avoid_distance) {
        target = cleanup_direction(position, target, ctx.hostiles, ctx.config);
        debug!(drone = ctx.drone.id, x = target.x, y = target.y, "evading");
    }

    if is_drifting(position, target, ctx.config.drift_ratio) {
        DroneCommand::wait(light, format!("Drifting {quadrant}"))
    } else {
        DroneCommand::move_to(target, light, format!("Following {quadrant}"))
    }
}

/// Evaluate then process one drone: the full per-turn decision.
pub fn decide(ctx: &DroneContext) -> (BehaviorUpdate, DroneCommand) {
    let update = evaluate(ctx);
    let command = process(ctx, update.new_behavior);
    (update, command)
}
