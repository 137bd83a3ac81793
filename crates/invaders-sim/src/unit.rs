//! A single formation unit.

use glam::IVec2;

use invaders_core::enums::{EnemyKind, EnemyTier};
use invaders_core::stats::EnemyStats;
use invaders_core::types::{Rect, UnitId};

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: UnitId,
    pub rect: Rect,
    pub kind: EnemyKind,
    pub stats: EnemyStats,
    destroyed: bool,
}

impl Unit {
    pub fn new(id: UnitId, rect: Rect, kind: EnemyKind, stats: EnemyStats) -> Self {
        Self {
            id,
            rect,
            kind,
            stats,
            destroyed: false,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn tier(&self) -> EnemyTier {
        self.kind.tier()
    }

    /// Mark destroyed. Returns false if it already was.
    pub fn destroy(&mut self) -> bool {
        !std::mem::replace(&mut self.destroyed, true)
    }

    /// Apply damage. Returns true when this hit destroyed the unit.
    pub fn hit(&mut self, damage: i32) -> bool {
        if self.destroyed {
            return false;
        }
        self.stats.hp -= damage;
        self.stats.hp <= 0 && self.destroy()
    }

    /// Move and flip to the other animation frame.
    pub fn step(&mut self, delta: IVec2) {
        self.rect.translate(delta);
        self.kind = self.kind.next_frame();
    }
}
