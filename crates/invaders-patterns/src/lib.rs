//! Attack patterns for INVADERS.
//!
//! Implements the formation's attack-pattern state machine, focus grouping,
//! and the boss's phase, movement and volley rules.

pub mod boss;
pub mod pattern;

pub use invaders_core as core;
