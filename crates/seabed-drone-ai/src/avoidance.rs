//! Greedy single-step hostile avoidance.
//!
//! Re-evaluated from scratch every turn; no memory of earlier evasions.

use glam::IVec2;

use seabed_core::records::CreatureReading;
use seabed_core::types::{sq_distance, Position};

use crate::config::BehaviorConfig;

/// Which candidate the avoidance step settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvasiveChoice {
    /// The nominal target is the safest candidate.
    Nominal,
    /// Single step along x toward the target's side.
    AlongX,
    /// Single step along y toward the target's side.
    AlongY,
    /// Every candidate is within flee distance: back off on both axes.
    Retreat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvasivePlan {
    pub choice: EvasiveChoice,
    pub point: Position,
}

/// Smallest squared distance from `point` to any projected hostile.
fn nearest_hostile_sq(point: Position, hostiles: &[CreatureReading]) -> i64 {
    hostiles
        .iter()
        .map(|hostile| sq_distance(point, hostile.projected()))
        .min()
        .unwrap_or(i64::MAX)
}

/// Pick between the nominal target, two axis waypoints and a full retreat.
pub fn plan_evasion(
    position: Position,
    target: Position,
    hostiles: &[CreatureReading],
    config: &BehaviorConfig,
) -> EvasivePlan {
    let step = config.evade_step;
    // Zero offset counts as negative on that axis
    let sign_x = if target.x - position.x > 0 { 1 } else { -1 };
    let sign_y = if target.y - position.y > 0 { 1 } else { -1 };

    let along_x = position + IVec2::new(sign_x * step, 0);
    let along_y = position + IVec2::new(0, sign_y * step);

    let target_min = nearest_hostile_sq(target, hostiles);
    let x_min = nearest_hostile_sq(along_x, hostiles);
    let y_min = nearest_hostile_sq(along_y, hostiles);

    let flee_sq = i64::from(config.flee_distance) * i64::from(config.flee_distance);
    if target_min < flee_sq && x_min < flee_sq && y_min < flee_sq {
        return EvasivePlan {
            choice: EvasiveChoice::Retreat,
            point: position + IVec2::new(-sign_x * step, -sign_y * step),
        };
    }

    if target_min > x_min && target_min > y_min {
        return EvasivePlan {
            choice: EvasiveChoice::Nominal,
            point: target,
        };
    }

    if x_min > y_min {
        EvasivePlan {
            choice: EvasiveChoice::AlongX,
            point: along_x,
        }
    } else {
        EvasivePlan {
            choice: EvasiveChoice::AlongY,
            point: along_y,
        }
    }
}

/// Adjust `target` away from projected hostiles. See [`plan_evasion`].
pub fn cleanup_direction(
    position: Position,
    target: Position,
    hostiles: &[CreatureReading],
    config: &BehaviorConfig,
) -> Position {
    plan_evasion(position, target, hostiles, config).point
}
