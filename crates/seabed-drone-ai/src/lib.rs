//! Drone decision subsystem.
//!
//! Implements the per-drone behavior state machine, quadrant target
//! selection and hostile avoidance geometry.

pub mod avoidance;
pub mod config;
pub mod fsm;
pub mod targeting;

pub use seabed_core as core;
