//! Active shooter per column.

use log::info;

use invaders_core::types::UnitId;

use super::grid::FormationGrid;

/// One slot per column with live units, holding that column's backmost
/// live unit. Slots are found by searching, never by cached column index,
/// so column removal never invalidates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShooterRoster {
    slots: Vec<UnitId>,
}

/// Effect of a destruction on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterChange {
    /// The destroyed unit was not a shooter.
    Unchanged,
    /// The next unit up the column took over the slot.
    Promoted(UnitId),
    /// The column has no live units left; its slot is gone.
    Dropped,
}

impl ShooterRoster {
    pub fn from_grid(grid: &FormationGrid) -> Self {
        let slots = (0..grid.column_count())
            .filter_map(|c| grid.last_live_in_column(c))
            .collect();
        Self { slots }
    }

    pub fn ids(&self) -> &[UnitId] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.slots.contains(&id)
    }

    /// Reassign after `destroyed` was marked destroyed in `grid`.
    pub fn on_destroyed(&mut self, grid: &FormationGrid, destroyed: UnitId) -> RosterChange {
        let Some(slot) = self.slots.iter().position(|&id| id == destroyed) else {
            return RosterChange::Unchanged;
        };

        let next = grid
            .locate(destroyed)
            .and_then(|(column, _)| grid.last_live_in_column(column));

        match next {
            Some(next) => {
                self.slots[slot] = next;
                RosterChange::Promoted(next)
            }
            None => {
                self.slots.remove(slot);
                info!("shooter roster reduced to {} members", self.slots.len());
                RosterChange::Dropped
            }
        }
    }
}
