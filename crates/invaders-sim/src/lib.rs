//! Simulation engine for INVADERS.
//!
//! Owns the formation and boss, runs them at a fixed tick rate against an
//! injected clock and seeded RNG, and produces `TickReport`s for the host.

pub mod boss;
pub mod engine;
pub mod formation;
pub mod unit;

pub use engine::{SimConfig, SimulationEngine};
pub use invaders_core as core;
