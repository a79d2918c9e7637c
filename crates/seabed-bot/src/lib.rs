//! Seabed scouting bot.
//!
//! This crate wires the decision subsystem to the line-based turn protocol:
//! it reads records from stdin, drives the single game state through each
//! turn and writes one command per owned drone to stdout.

pub mod cli;
pub mod engine;
pub mod protocol;
pub mod turn_loop;

pub use seabed_core as core;
