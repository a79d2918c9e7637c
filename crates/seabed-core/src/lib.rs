//! Core types and definitions for the seabed scouting bot.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, the creature catalog, turn records, commands, player and
//! game aggregates, constants and errors. It performs no I/O.

pub mod catalog;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod geometry;
pub mod records;
pub mod state;
pub mod types;
