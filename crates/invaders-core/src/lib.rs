//! Core types and definitions for INVADERS.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, enums, tuning constants, level configuration, stat tables,
//! cooldowns, host commands, tick reports, and the clock, random-source and
//! bullet-sink seams. It has no dependency on a renderer or input layer.

pub mod clock;
pub mod commands;
pub mod config;
pub mod constants;
pub mod cooldown;
pub mod enums;
pub mod events;
pub mod random;
pub mod state;
pub mod stats;
pub mod types;

#[cfg(test)]
mod tests;
