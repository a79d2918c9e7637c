//! Per-drone commands emitted once per turn.
//!
//! The annotation is free text shown next to the drone for debugging and is
//! never parsed back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// One command for one drone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DroneCommand {
    /// Let the drone drift this turn.
    Wait { light: bool, annotation: String },
    /// Move toward `target`.
    Move {
        target: Position,
        light: bool,
        annotation: String,
    },
}

impl DroneCommand {
    pub fn wait(light: bool, annotation: impl Into<String>) -> Self {
        DroneCommand::Wait {
            light,
            annotation: annotation.into(),
        }
    }

    pub fn move_to(target: Position, light: bool, annotation: impl Into<String>) -> Self {
        DroneCommand::Move {
            target,
            light,
            annotation: annotation.into(),
        }
    }

    pub fn light(&self) -> bool {
        match self {
            DroneCommand::Wait { light, .. } | DroneCommand::Move { light, .. } => *light,
        }
    }

    pub fn annotation(&self) -> &str {
        match self {
            DroneCommand::Wait { annotation, .. } | DroneCommand::Move { annotation, .. } => {
                annotation
            }
        }
    }
}

impl fmt::Display for DroneCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DroneCommand::Wait { light, annotation } => {
                write!(f, "WAIT {} {}", u8::from(*light), annotation)
            }
            DroneCommand::Move {
                target,
                light,
                annotation,
            } => write!(
                f,
                "MOVE {} {} {} {}",
                target.x,
                target.y,
                u8::from(*light),
                annotation
            ),
        }
    }
}
