//! Tokenized turn records handed to the core by the protocol reader.
//!
//! Field order mirrors the wire protocol. Records carry no behavior; the
//! game state applies them once per turn.

use serde::{Deserialize, Serialize};

use crate::enums::Quadrant;
use crate::types::{projected, CreatureId, DroneId, Position, Velocity};

/// One catalog line: `id colorCode speciesCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: CreatureId,
    pub color_code: i32,
    pub species_code: i32,
}

/// One drone line: `id x y emergency battery`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroneReading {
    pub id: DroneId,
    pub position: Position,
    pub emergency: bool,
    pub battery: i32,
}

/// One unsaved scan held by a drone: `droneId creatureId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEvent {
    pub drone_id: DroneId,
    pub creature_id: CreatureId,
}

/// A creature visible this turn: `id x y vx vy`. Valid for one turn only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureReading {
    pub id: CreatureId,
    pub position: Position,
    pub velocity: Velocity,
}

impl CreatureReading {
    /// Position next turn if the creature keeps its velocity.
    pub fn projected(&self) -> Position {
        projected(self.position, self.velocity)
    }
}

/// A radar blip: `droneId creatureId quadrantLabel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarBlip {
    pub drone_id: DroneId,
    pub creature_id: CreatureId,
    pub quadrant: Quadrant,
}

/// Everything received for one turn, in protocol order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnInput {
    pub own_score: i32,
    pub foe_score: i32,
    pub own_scans: Vec<CreatureId>,
    pub foe_scans: Vec<CreatureId>,
    pub own_drones: Vec<DroneReading>,
    pub foe_drones: Vec<DroneReading>,
    pub drone_scans: Vec<ScanEvent>,
    pub visible_creatures: Vec<CreatureReading>,
    pub radar_blips: Vec<RadarBlip>,
}
