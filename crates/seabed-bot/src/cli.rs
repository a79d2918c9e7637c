//! Command-line options and behavior config loading.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use seabed_core::enums::TargetStrategy;
use seabed_core::error::Result;
use seabed_drone_ai::config::BehaviorConfig;

#[derive(Debug, Parser)]
#[command(name = "seabed-bot", about = "Drone decision bot for the seabed scouting game")]
pub struct Args {
    /// JSON file with behavior thresholds; missing keys keep their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Target selection heuristic, overrides the config file
    #[arg(long)]
    pub strategy: Option<TargetStrategy>,
}

impl Args {
    pub fn behavior_config(&self) -> Result<BehaviorConfig> {
        load_config(self.config.as_deref(), self.strategy)
    }
}

/// Defaults, then the optional JSON file, then the strategy override.
pub fn load_config(path: Option<&Path>, strategy: Option<TargetStrategy>) -> Result<BehaviorConfig> {
    let mut config = match path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => BehaviorConfig::default(),
    };
    if let Some(strategy) = strategy {
        config.strategy = strategy;
    }
    Ok(config)
}
