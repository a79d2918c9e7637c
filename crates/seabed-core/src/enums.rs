//! Enumeration types used throughout the bot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeabedError;

/// One of the four regions of the habitat around a drone, split on the
/// drone's own coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Top-left: smaller x, smaller y.
    TL,
    /// Top-right: larger x, smaller y.
    TR,
    /// Bottom-left: smaller x, larger y.
    BL,
    /// Bottom-right: larger x, larger y.
    BR,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::TL, Quadrant::TR, Quadrant::BL, Quadrant::BR];

    /// Two-letter radar label.
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::TL => "TL",
            Quadrant::TR => "TR",
            Quadrant::BL => "BL",
            Quadrant::BR => "BR",
        }
    }

    pub fn is_top(self) -> bool {
        matches!(self, Quadrant::TL | Quadrant::TR)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Quadrant::TL | Quadrant::BL)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quadrant {
    type Err = SeabedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TL" => Ok(Quadrant::TL),
            "TR" => Ok(Quadrant::TR),
            "BL" => Ok(Quadrant::BL),
            "BR" => Ok(Quadrant::BR),
            other => Err(SeabedError::UnknownQuadrant(other.to_string())),
        }
    }
}

/// Creature color category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureColor {
    /// Hostile creatures carry no color.
    Hostile,
    Pink,
    Yellow,
    Green,
    Blue,
}

impl TryFrom<i32> for CreatureColor {
    type Error = SeabedError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(CreatureColor::Hostile),
            0 => Ok(CreatureColor::Pink),
            1 => Ok(CreatureColor::Yellow),
            2 => Ok(CreatureColor::Green),
            3 => Ok(CreatureColor::Blue),
            other => Err(SeabedError::MalformedProtocol(format!(
                "unknown color code {other}"
            ))),
        }
    }
}

/// Creature species category. `Hostile` marks creatures drones must avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Hostile,
    Jellyfish,
    Fish,
    Crab,
}

impl Species {
    pub fn is_hostile(self) -> bool {
        self == Species::Hostile
    }
}

impl TryFrom<i32> for Species {
    type Error = SeabedError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Species::Hostile),
            0 => Ok(Species::Jellyfish),
            1 => Ok(Species::Fish),
            2 => Ok(Species::Crab),
            other => Err(SeabedError::MalformedProtocol(format!(
                "unknown species code {other}"
            ))),
        }
    }
}

/// Per-drone behavior state. A drone is in exactly one state at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum DroneBehavior {
    /// Heading straight up to save scans or to re-plan.
    #[default]
    Surfacing,
    /// Moving toward the center of a quadrant that holds a target creature.
    Searching { target: Quadrant },
}

impl DroneBehavior {
    pub fn is_surfacing(&self) -> bool {
        matches!(self, DroneBehavior::Surfacing)
    }

    /// Target quadrant while searching.
    pub fn target(&self) -> Option<Quadrant> {
        match self {
            DroneBehavior::Surfacing => None,
            DroneBehavior::Searching { target } => Some(*target),
        }
    }
}

/// How a drone picks its search quadrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetStrategy {
    /// Lowest remaining creature whose id parity matches `drone_id / 2`,
    /// resolved through the drone's radar.
    #[default]
    Parity,
    /// Quadrant with the most remaining creatures per unit area, skipping
    /// quadrants guarded by hostiles.
    Density,
}

impl fmt::Display for TargetStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetStrategy::Parity => f.write_str("parity"),
            TargetStrategy::Density => f.write_str("density"),
        }
    }
}

impl FromStr for TargetStrategy {
    type Err = SeabedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parity" => Ok(TargetStrategy::Parity),
            "density" => Ok(TargetStrategy::Density),
            other => Err(SeabedError::Config(format!("unknown target strategy {other}"))),
        }
    }
}
