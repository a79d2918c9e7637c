//! Persistent drone records, player aggregates and the game aggregate.
//!
//! A single `GameState` lives for the whole match. Each turn it is refreshed
//! in place from a [`TurnInput`]; no turn history is kept.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::CreatureCatalog;
use crate::enums::{DroneBehavior, Quadrant};
use crate::error::SeabedError;
use crate::records::{CreatureReading, DroneReading, RadarBlip, ScanEvent, TurnInput};
use crate::types::{CreatureId, DroneId, Position};

/// Creature ids reported per quadrant by one drone's radar this turn.
pub type RadarMap = BTreeMap<Quadrant, BTreeSet<CreatureId>>;

/// One drone, correlated across turns by its id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneRecord {
    pub id: DroneId,
    pub position: Position,
    pub emergency: bool,
    pub battery: i32,
    /// Unsaved scans carried this turn.
    pub current_scans: BTreeSet<CreatureId>,
    pub radar: RadarMap,
    pub behavior: DroneBehavior,
    /// Present in the latest turn input.
    pub active: bool,
}

impl DroneRecord {
    /// A newly observed drone starts out surfacing.
    pub fn new(id: DroneId) -> Self {
        Self {
            id,
            position: Position::ZERO,
            emergency: false,
            battery: 0,
            current_scans: BTreeSet::new(),
            radar: RadarMap::new(),
            behavior: DroneBehavior::default(),
            active: false,
        }
    }

    /// Drop everything that is only valid for one turn.
    pub fn clear_turn_data(&mut self) {
        self.current_scans.clear();
        self.radar.clear();
        self.active = false;
    }

    /// Overwrite the per-turn fields from a reading. Id and behavior persist.
    pub fn refresh(&mut self, reading: &DroneReading) {
        self.position = reading.position;
        self.emergency = reading.emergency;
        self.battery = reading.battery;
        self.active = true;
    }

    /// First quadrant (in TL, TR, BL, BR order) whose blips include `creature`.
    pub fn quadrant_of_creature(&self, creature: CreatureId) -> Option<Quadrant> {
        self.radar
            .iter()
            .find(|(_, ids)| ids.contains(&creature))
            .map(|(quadrant, _)| *quadrant)
    }

    /// Blips seen in `quadrant` this turn.
    pub fn blips_in(&self, quadrant: Quadrant) -> impl Iterator<Item = CreatureId> + '_ {
        self.radar.get(&quadrant).into_iter().flatten().copied()
    }
}

/// Everything known about one player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerState {
    pub score: i32,
    /// All creatures this player has ever saved.
    pub total_scans: BTreeSet<CreatureId>,
    /// Drone records in first-seen order.
    pub drones: Vec<DroneRecord>,
    /// Radar-present, non-hostile creatures nobody on this side has scanned.
    pub remaining_creatures: BTreeSet<CreatureId>,
}

impl PlayerState {
    pub fn drone(&self, id: DroneId) -> Option<&DroneRecord> {
        self.drones.iter().find(|drone| drone.id == id)
    }

    pub fn drone_mut(&mut self, id: DroneId) -> Option<&mut DroneRecord> {
        self.drones.iter_mut().find(|drone| drone.id == id)
    }

    /// Drones reported in the latest turn.
    pub fn active_drones(&self) -> impl Iterator<Item = &DroneRecord> {
        self.drones.iter().filter(|drone| drone.active)
    }

    /// Clear per-turn data on every drone, then refresh or create the
    /// reported ones.
    pub fn refresh_drones(&mut self, readings: &[DroneReading]) {
        for drone in &mut self.drones {
            drone.clear_turn_data();
        }
        for reading in readings {
            match self.drone_mut(reading.id) {
                Some(drone) => drone.refresh(reading),
                None => {
                    let mut drone = DroneRecord::new(reading.id);
                    drone.refresh(reading);
                    self.drones.push(drone);
                }
            }
        }
    }

    pub fn record_scan(&mut self, event: ScanEvent) -> Result<(), SeabedError> {
        let drone = self
            .drone_mut(event.drone_id)
            .ok_or(SeabedError::UnknownDrone(event.drone_id))?;
        drone.current_scans.insert(event.creature_id);
        Ok(())
    }

    pub fn record_blip(&mut self, blip: RadarBlip) -> Result<(), SeabedError> {
        let drone = self
            .drone_mut(blip.drone_id)
            .ok_or(SeabedError::UnknownDrone(blip.drone_id))?;
        drone
            .radar
            .entry(blip.quadrant)
            .or_default()
            .insert(blip.creature_id);
        Ok(())
    }

    /// Creature ids already scanned, saved or not.
    pub fn known_creatures(&self) -> BTreeSet<CreatureId> {
        let mut known = self.total_scans.clone();
        for drone in &self.drones {
            known.extend(drone.current_scans.iter().copied());
        }
        known
    }

    /// Scannable creatures present on any drone's radar minus the known ones.
    /// Pure function of the current records.
    pub fn compute_remaining(&self, catalog: &CreatureCatalog) -> BTreeSet<CreatureId> {
        let present: BTreeSet<CreatureId> = self
            .drones
            .iter()
            .flat_map(|drone| drone.radar.values())
            .flatten()
            .copied()
            .filter(|&id| catalog.is_scannable(id))
            .collect();
        let known = self.known_creatures();
        present.difference(&known).copied().collect()
    }

    /// Rebuild `remaining_creatures` from scratch.
    pub fn recompute_remaining(&mut self, catalog: &CreatureCatalog) {
        self.remaining_creatures = self.compute_remaining(catalog);
    }
}

/// The whole match as seen by the bot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    pub own: PlayerState,
    pub foe: PlayerState,
    pub visible_creatures: Vec<CreatureReading>,
    pub visible_hostiles: Vec<CreatureReading>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one turn of input in protocol order and rebuild the own
    /// player's remaining creatures.
    ///
    /// Records that reference unknown drones are dropped; the errors are
    /// returned so the caller can report them.
    pub fn apply_turn(&mut self, catalog: &CreatureCatalog, input: &TurnInput) -> Vec<SeabedError> {
        let mut dropped = Vec::new();

        self.own.score = input.own_score;
        self.foe.score = input.foe_score;
        self.own.total_scans.extend(input.own_scans.iter().copied());
        self.foe.total_scans.extend(input.foe_scans.iter().copied());

        self.own.refresh_drones(&input.own_drones);
        self.foe.refresh_drones(&input.foe_drones);

        for &event in &input.drone_scans {
            let result = if self.own.drone(event.drone_id).is_some() {
                self.own.record_scan(event)
            } else {
                self.foe.record_scan(event)
            };
            if let Err(err) = result {
                dropped.push(err);
            }
        }

        self.visible_creatures.clear();
        self.visible_hostiles.clear();
        for &reading in &input.visible_creatures {
            if catalog.is_hostile(reading.id) {
                self.visible_hostiles.push(reading);
            } else {
                self.visible_creatures.push(reading);
            }
        }

        for &blip in &input.radar_blips {
            if let Err(err) = self.own.record_blip(blip) {
                dropped.push(err);
            }
        }

        self.own.recompute_remaining(catalog);
        dropped
    }
}
