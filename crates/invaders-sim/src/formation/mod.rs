//! The hostile formation: grid, shooter roster, movement and attack patterns.
//!
//! The host calls [`Formation::update`] once per tick to move and compact the
//! grid, then [`Formation::shoot`] to run the active attack pattern. Collision
//! results arrive through [`Formation::destroy`] and [`Formation::hit`], which
//! are safe to call at any point, including mid-pattern.

pub mod firing;
pub mod grid;
pub mod movement;
pub mod roster;

use log::{debug, info, warn};

use invaders_core::config::LevelConfig;
use invaders_core::constants::PATTERN_DELAY_MS;
use invaders_core::cooldown::Cooldown;
use invaders_core::enums::{Direction, PatternKind};
use invaders_core::events::BulletSink;
use invaders_core::random::RandomSource;
use invaders_core::state::FormationView;
use invaders_core::stats::{EnemyStats, EnemyStatsTable};
use invaders_core::types::{Bounds, Rect, UnitId};
use invaders_patterns::pattern::{self, PatternContext, PatternState};

use crate::unit::Unit;

pub use grid::FormationGrid;
pub use movement::MovementController;
pub use roster::{RosterChange, ShooterRoster};

#[derive(Debug, Clone)]
pub struct Formation {
    grid: FormationGrid,
    roster: ShooterRoster,
    movement: MovementController,
    pattern: PatternState,
    shooting_cooldown: Cooldown,
    /// When the formation last returned to Idle (ms).
    pattern_idle_since_ms: u64,
    level: u32,
}

impl Formation {
    /// Build the formation for a level. Overrides outside the grid are
    /// skipped with a warning.
    pub fn new(
        config: &LevelConfig,
        stats: &EnemyStatsTable,
        rng: &mut impl RandomSource,
        now_ms: u64,
    ) -> Self {
        let (width, height) = (config.formation_width, config.formation_height);
        info!("initializing {}x{} formation for level {}", width, height, config.level);

        let mut grid = FormationGrid::new(width, height, stats);
        for cell in &config.overrides {
            let Some(id) = grid.initial_id(cell.column, cell.row) else {
                warn!(
                    "ignoring override for ({}, {}) outside {}x{} formation",
                    cell.column, cell.row, width, height
                );
                continue;
            };
            if cell.hp <= 0 {
                grid.destroy_unit(id);
            } else if let Some(unit) = grid.unit_mut(id) {
                unit.stats.hp = cell.hp;
            }
        }
        grid.sweep();
        grid.compact();

        let roster = ShooterRoster::from_grid(&grid);
        let mut shooting_cooldown =
            Cooldown::with_variance(config.shooting_frequency_ms, config.shooting_variance());
        shooting_cooldown.reset(now_ms, rng);

        Self {
            grid,
            roster,
            movement: MovementController::new(config.base_speed),
            pattern: PatternState::Idle,
            shooting_cooldown,
            pattern_idle_since_ms: now_ms,
            level: config.level,
        }
    }

    /// Advance movement by one frame. On a movement step, destroyed units are
    /// swept, survivors move, and the level's pattern starts if the formation
    /// has been idle long enough.
    pub fn update(&mut self, bounds: Bounds, now_ms: u64) {
        self.grid.compact();
        self.movement
            .rescale(self.grid.live_count(), self.grid.capacity());

        let Some(delta) = self.movement.advance(self.grid.extent(), bounds) else {
            return;
        };
        self.grid.sweep();
        self.grid.translate(delta);
        self.grid.compact();

        if self.pattern.is_idle()
            && now_ms.saturating_sub(self.pattern_idle_since_ms) >= PATTERN_DELAY_MS
        {
            let kind = pattern::pattern_for_level(self.level);
            if kind != PatternKind::Idle {
                info!("starting {:?} pattern", kind);
                self.pattern = PatternState::start(kind);
            }
        }
    }

    /// Run the active pattern for one call. Returns the bullets spawned.
    pub fn shoot(
        &mut self,
        sink: &mut impl BulletSink,
        rng: &mut impl RandomSource,
        now_ms: u64,
    ) -> usize {
        if self.roster.is_empty() {
            return 0;
        }
        if self.pattern.gated_by_cooldown() {
            if !self.shooting_cooldown.is_finished(now_ms) {
                return 0;
            }
            self.shooting_cooldown.reset(now_ms, rng);
        }

        let kind = self.pattern.kind();
        let columns = match kind {
            PatternKind::RandomBurst => self.grid.column_shooters(),
            _ => Default::default(),
        };
        let ctx = PatternContext {
            roster: self.roster.ids(),
            multi_member: &columns.multi_member,
            single_member: &columns.single_member,
            now_ms,
        };
        let update = pattern::advance(&mut self.pattern, &ctx, rng);

        let mut spawned = 0;
        for shot in &update.volley {
            let Some(shooter) = self.grid.unit(shot.shooter).filter(|u| !u.is_destroyed()) else {
                continue;
            };
            for _ in 0..shot.repeat {
                spawned += firing::fire(shooter, sink);
            }
        }

        if update.completed {
            info!("{:?} pattern complete", kind);
            self.shooting_cooldown.reset(now_ms, rng);
            self.pattern_idle_since_ms = now_ms;
        }
        spawned
    }

    /// Destroy a unit outright. No-op for absent or already destroyed units.
    pub fn destroy(&mut self, id: UnitId) -> bool {
        if !self.grid.destroy_unit(id) {
            return false;
        }
        self.on_destroyed(id);
        true
    }

    /// Damage a unit. Returns its stats when the hit destroyed it.
    pub fn hit(&mut self, id: UnitId, damage: i32) -> Option<EnemyStats> {
        let stats = self.grid.hit_unit(id, damage)?;
        self.on_destroyed(id);
        Some(stats)
    }

    fn on_destroyed(&mut self, id: UnitId) {
        debug!("destroyed unit {}", id.0);
        if let RosterChange::Promoted(next) = self.roster.on_destroyed(&self.grid, id) {
            debug!("unit {} is now shooting", next.0);
        }
    }

    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.live_count() == 0
    }

    pub fn is_last_unit(&self) -> bool {
        self.grid.live_count() == 1
    }

    /// Live units in column order, front to back.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.grid.live_units()
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.grid.unit(id)
    }

    pub fn grid(&self) -> &FormationGrid {
        &self.grid
    }

    pub fn shooters(&self) -> &[UnitId] {
        self.roster.ids()
    }

    pub fn pattern(&self) -> &PatternState {
        &self.pattern
    }

    pub fn direction(&self) -> Direction {
        self.movement.direction()
    }

    pub fn movement(&self) -> &MovementController {
        &self.movement
    }

    pub fn extent(&self) -> Rect {
        self.grid.extent()
    }

    pub fn view(&self) -> FormationView {
        FormationView {
            live_count: self.grid.live_count(),
            columns: self.grid.column_count(),
            shooters: self.roster.len(),
            extent: self.grid.extent(),
            direction: self.movement.direction(),
            pattern: self.pattern.kind(),
        }
    }
}
