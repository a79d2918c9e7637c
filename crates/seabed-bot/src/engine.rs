//! Decision engine — owns the game state for the whole match.
//!
//! `DecisionEngine` applies each turn's records, rebuilds the remaining
//! creatures and runs the behavior FSM for every owned drone. It performs no
//! I/O, so whole matches can be replayed in tests.

use tracing::{debug, warn};

use seabed_core::catalog::CreatureCatalog;
use seabed_core::commands::DroneCommand;
use seabed_core::records::TurnInput;
use seabed_core::state::GameState;
use seabed_drone_ai::config::BehaviorConfig;
use seabed_drone_ai::fsm::{decide, DroneContext};

/// Annotation used when a turn could not be read.
pub const FALLBACK_ANNOTATION: &str = "Recovering";

pub struct DecisionEngine {
    catalog: CreatureCatalog,
    state: GameState,
    config: BehaviorConfig,
    turn: u64,
}

impl DecisionEngine {
    pub fn new(catalog: CreatureCatalog, config: BehaviorConfig) -> Self {
        Self {
            catalog,
            state: GameState::new(),
            config,
            turn: 0,
        }
    }

    /// Ingest one turn and return exactly one command per owned drone, in
    /// drone first-seen order.
    pub fn tick(&mut self, input: &TurnInput) -> Vec<DroneCommand> {
        self.turn += 1;
        let _span = tracing::debug_span!("turn", turn = self.turn).entered();

        for err in self.state.apply_turn(&self.catalog, input) {
            warn!("dropped record: {err}");
        }
        debug!(
            remaining = ?self.state.own.remaining_creatures,
            hostiles = self.state.visible_hostiles.len(),
            "turn ingested"
        );

        // Decide on a shared borrow, then write behaviors back
        let mut decisions = Vec::new();
        for drone in self.state.own.active_drones() {
            let ctx = DroneContext {
                drone,
                player: &self.state.own,
                hostiles: &self.state.visible_hostiles,
                config: &self.config,
            };
            let (update, command) = decide(&ctx);
            if update.behavior_changed {
                debug!(drone = drone.id, from = ?drone.behavior, to = ?update.new_behavior, "behavior change");
            }
            decisions.push((drone.id, update.new_behavior, command));
        }

        let mut commands = Vec::with_capacity(decisions.len());
        for (id, behavior, command) in decisions {
            if let Some(drone) = self.state.own.drone_mut(id) {
                drone.behavior = behavior;
            }
            commands.push(command);
        }
        commands
    }

    /// Commands for a turn whose input could not be read: every drone seen
    /// last turn waits with its light on.
    pub fn fallback_commands(&self) -> Vec<DroneCommand> {
        self.state
            .own
            .active_drones()
            .map(|_| DroneCommand::wait(true, FALLBACK_ANNOTATION))
            .collect()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seabed_core::enums::{DroneBehavior, Quadrant};
    use seabed_core::records::{CatalogRecord, CreatureReading, DroneReading, RadarBlip};
    use seabed_core::types::{Position, Velocity};

    fn engine() -> DecisionEngine {
        let records = (4..8)
            .map(|id| CatalogRecord {
                id,
                color_code: 0,
                species_code: 1,
            })
            .chain([CatalogRecord {
                id: 16,
                color_code: -1,
                species_code: -1,
            }]);
        let catalog = CreatureCatalog::from_records(records).unwrap();
        DecisionEngine::new(catalog, BehaviorConfig::default())
    }

    fn drone(id: i32, x: i32, y: i32) -> DroneReading {
        DroneReading {
            id,
            position: Position::new(x, y),
            emergency: false,
            battery: 30,
        }
    }

    fn input() -> TurnInput {
        TurnInput {
            own_drones: vec![drone(0, 3333, 500), drone(2, 6666, 500)],
            foe_drones: vec![drone(1, 3333, 500), drone(3, 6666, 500)],
            radar_blips: vec![
                RadarBlip {
                    drone_id: 0,
                    creature_id: 4,
                    quadrant: Quadrant::BL,
                },
                RadarBlip {
                    drone_id: 2,
                    creature_id: 5,
                    quadrant: Quadrant::BR,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_one_command_per_own_drone() {
        let mut engine = engine();
        let commands = engine.tick(&input());
        assert_eq!(commands.len(), 2);
        assert_eq!(engine.turn(), 1);
    }

    #[test]
    fn test_behavior_persists_between_turns() {
        let mut engine = engine();
        engine.tick(&input());
        let own = &engine.state().own;
        assert_eq!(
            own.drone(0).unwrap().behavior,
            DroneBehavior::Searching {
                target: Quadrant::BL
            }
        );
        assert_eq!(
            own.drone(2).unwrap().behavior,
            DroneBehavior::Searching {
                target: Quadrant::BR
            }
        );

        // No more radar contacts: both give up and surface
        let mut next = input();
        next.radar_blips.clear();
        let commands = engine.tick(&next);
        assert!(commands.iter().all(|c| c.annotation() == "Surfacing"));
        assert!(engine
            .state()
            .own
            .drones
            .iter()
            .all(|d| d.behavior.is_surfacing()));
    }

    #[test]
    fn test_light_off_near_hostile() {
        let mut engine = engine();
        let mut turn = input();
        turn.visible_creatures.push(CreatureReading {
            id: 16,
            position: Position::new(3333, 1500),
            velocity: Velocity::new(0, 0),
        });
        let commands = engine.tick(&turn);
        assert!(!commands[0].light());
        assert!(commands[1].light());
        assert_eq!(engine.state().visible_hostiles.len(), 1);
    }

    #[test]
    fn test_fallback_covers_known_drones() {
        let mut engine = engine();
        assert!(engine.fallback_commands().is_empty());
        engine.tick(&input());
        let fallback = engine.fallback_commands();
        assert_eq!(fallback.len(), 2);
        assert!(fallback
            .iter()
            .all(|c| c.to_string() == "WAIT 1 Recovering"));
    }
}
