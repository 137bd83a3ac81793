//! Column-ordered storage for formation units.
//!
//! Columns run left to right; within a column the front is the top of the
//! screen and the back is nearest the player. Destroyed units stay in place
//! until the next sweep, so a destruction in the middle of a pattern never
//! shifts anything the pattern is iterating.

use glam::IVec2;
use log::debug;

use invaders_core::constants::*;
use invaders_core::enums::EnemyKind;
use invaders_core::stats::{EnemyStats, EnemyStatsTable};
use invaders_core::types::{Rect, UnitId};

use crate::unit::Unit;

#[derive(Debug, Clone)]
pub struct FormationGrid {
    columns: Vec<Vec<Unit>>,
    initial_columns: usize,
    initial_rows: usize,
    extent: Rect,
    live_count: usize,
}

/// Shooters split by how many live units back them up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnShooters {
    /// Back units of columns with two or more live units.
    pub multi_member: Vec<UnitId>,
    /// Sole units of columns with one live unit.
    pub single_member: Vec<UnitId>,
}

impl FormationGrid {
    /// Build a full `width` x `height` grid. Ids are assigned column by
    /// column, front to back.
    pub fn new(width: usize, height: usize, stats: &EnemyStatsTable) -> Self {
        let mut next_id = 0u32;
        let columns = (0..width)
            .map(|col| {
                (0..height)
                    .map(|row| {
                        let kind = EnemyKind::for_row(row, height);
                        let rect = Rect::new(
                            INIT_POS_X + SEPARATION_DISTANCE * col as i32,
                            INIT_POS_Y + SEPARATION_DISTANCE * row as i32,
                            UNIT_WIDTH,
                            UNIT_HEIGHT,
                        );
                        let unit = Unit::new(UnitId(next_id), rect, kind, stats.get(kind));
                        next_id += 1;
                        unit
                    })
                    .collect()
            })
            .collect();

        let mut grid = Self {
            columns,
            initial_columns: width,
            initial_rows: height,
            extent: Rect::default(),
            live_count: width * height,
        };
        grid.recompute();
        grid
    }

    /// Units the grid was built with.
    pub fn capacity(&self) -> usize {
        self.initial_columns * self.initial_rows
    }

    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// Columns still present, including any emptied since the last compaction.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Bounding box of the live units as of the last compaction.
    pub fn extent(&self) -> Rect {
        self.extent
    }

    pub fn columns(&self) -> &[Vec<Unit>] {
        &self.columns
    }

    /// Id of the unit originally placed at (`column`, `row`).
    pub fn initial_id(&self, column: usize, row: usize) -> Option<UnitId> {
        (column < self.initial_columns && row < self.initial_rows)
            .then(|| UnitId((column * self.initial_rows + row) as u32))
    }

    /// Column index and position within it.
    pub fn locate(&self, id: UnitId) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(c, column)| {
            column.iter().position(|u| u.id == id).map(|i| (c, i))
        })
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.columns.iter().flatten().find(|u| u.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.columns.iter_mut().flatten().find(|u| u.id == id)
    }

    /// Mark a unit destroyed. Returns false for absent or already destroyed units.
    pub fn destroy_unit(&mut self, id: UnitId) -> bool {
        let destroyed = self.unit_mut(id).is_some_and(|u| u.destroy());
        if destroyed {
            self.live_count -= 1;
        }
        destroyed
    }

    /// Damage a unit. Returns its stats if the hit destroyed it.
    pub fn hit_unit(&mut self, id: UnitId, damage: i32) -> Option<EnemyStats> {
        let unit = self.unit_mut(id)?;
        if !unit.hit(damage) {
            return None;
        }
        let stats = unit.stats;
        self.live_count -= 1;
        Some(stats)
    }

    /// Backmost live unit of a column.
    pub fn last_live_in_column(&self, column: usize) -> Option<UnitId> {
        self.columns
            .get(column)?
            .iter()
            .rev()
            .find(|u| !u.is_destroyed())
            .map(|u| u.id)
    }

    pub fn column_live_count(&self, column: usize) -> usize {
        self.columns
            .get(column)
            .map_or(0, |c| c.iter().filter(|u| !u.is_destroyed()).count())
    }

    /// Live units in column order, front to back within each column.
    pub fn live_units(&self) -> impl Iterator<Item = &Unit> {
        self.columns.iter().flatten().filter(|u| !u.is_destroyed())
    }

    /// Drop destroyed units from their columns.
    pub fn sweep(&mut self) {
        for (c, column) in self.columns.iter_mut().enumerate() {
            column.retain(|u| {
                if u.is_destroyed() {
                    debug!("removed unit {} from column {}", u.id.0, c);
                }
                !u.is_destroyed()
            });
        }
    }

    /// Move every live unit by `delta`.
    pub fn translate(&mut self, delta: IVec2) {
        for unit in self.columns.iter_mut().flatten() {
            if !unit.is_destroyed() {
                unit.step(delta);
            }
        }
    }

    /// Remove columns without live units and recompute extent and live count.
    pub fn compact(&mut self) {
        let mut index = 0;
        self.columns.retain(|column| {
            let keep = column.iter().any(|u| !u.is_destroyed());
            if !keep {
                debug!("removed column {}", index);
            }
            index += 1;
            keep
        });
        self.recompute();
    }

    /// Split the current back units by column strength.
    pub fn column_shooters(&self) -> ColumnShooters {
        let mut shooters = ColumnShooters::default();
        for c in 0..self.columns.len() {
            let Some(back) = self.last_live_in_column(c) else {
                continue;
            };
            match self.column_live_count(c) {
                1 => shooters.single_member.push(back),
                _ => shooters.multi_member.push(back),
            }
        }
        shooters
    }

    fn recompute(&mut self) {
        self.live_count = self.live_units().count();

        let mut live = self.live_units().map(|u| u.rect);
        let Some(first) = live.next() else {
            return;
        };
        let (min, max) = live.fold(
            (first.position, first.position + first.size),
            |(min, max), r| (min.min(r.position), max.max(r.position + r.size)),
        );
        self.extent = Rect {
            position: min,
            size: max - min,
        };
    }
}
