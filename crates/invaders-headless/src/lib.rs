//! INVADERS headless runner.
//!
//! Drives a `SimulationEngine` from a fixed-rate game loop thread and
//! exposes a small handle for sending host commands and polling reports.

pub mod game_loop;
pub mod logging;
pub mod state;

pub use invaders_core as core;
