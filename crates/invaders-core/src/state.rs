//! Per-tick report: the visible state of the hostiles after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Rect, SimTime};

/// Summary returned by the engine after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickReport {
    pub time: SimTime,
    pub phase: GamePhase,
    pub formation: FormationView,
    pub boss: Option<BossView>,
    /// Enemy bullets spawned during this tick.
    pub bullets_spawned: usize,
}

/// Formation state for display and logging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormationView {
    pub live_count: usize,
    pub columns: usize,
    pub shooters: usize,
    pub extent: Rect,
    pub direction: Direction,
    pub pattern: PatternKind,
}

/// Boss state for display and logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub hp: i32,
    pub max_hp: i32,
    pub phase: BossPhase,
    pub extent: Rect,
    pub destroyed: bool,
}
