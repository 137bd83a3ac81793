//! Host commands sent to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, so collision
//! results resolved elsewhere never mutate the formation mid-tick.

use serde::{Deserialize, Serialize};

use crate::types::UnitId;

/// All actions the host can request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    // --- Collision results ---
    /// A formation unit was destroyed outright.
    DestroyUnit { unit: UnitId },
    /// A formation unit took damage.
    HitUnit { unit: UnitId, damage: i32 },
    /// The boss took damage.
    HitBoss { damage: i32 },

    // --- Simulation control ---
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
