//! Simulation engine: drives the hostiles for one level.
//!
//! `SimulationEngine` owns the formation, the optional boss, the clock and a
//! seeded RNG. It processes host commands at tick boundaries, runs movement,
//! attack patterns and the boss, and returns a `TickReport`. Completely
//! headless, enabling deterministic testing with a `ManualClock`.

use std::collections::VecDeque;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use invaders_core::clock::{Clock, SystemClock};
use invaders_core::commands::HostCommand;
use invaders_core::config::LevelConfig;
use invaders_core::enums::GamePhase;
use invaders_core::events::BulletSpawn;
use invaders_core::state::TickReport;
use invaders_core::stats::{EnemyStats, EnemyStatsTable};
use invaders_core::types::{Bounds, SimTime, UnitId};

use crate::boss::Boss;
use crate::formation::Formation;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    /// A level's own seed takes precedence.
    pub seed: u64,
    /// Viewport used for margin checks.
    pub bounds: Bounds,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bounds: Bounds::default(),
        }
    }
}

/// The simulation engine. Owns the hostiles and all sim state.
pub struct SimulationEngine<C: Clock = SystemClock> {
    formation: Formation,
    boss: Option<Boss>,
    clock: C,
    rng: ChaCha8Rng,
    bounds: Bounds,
    time: SimTime,
    phase: GamePhase,
    command_queue: VecDeque<HostCommand>,
    bullets: Vec<BulletSpawn>,
}

impl<C: Clock> SimulationEngine<C> {
    /// Create an engine for `level`.
    pub fn new(level: &LevelConfig, config: SimConfig, clock: C) -> Self {
        let seed = level.seed.unwrap_or(config.seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let now = clock.now_ms();
        let formation = Formation::new(level, &EnemyStatsTable::base(), &mut rng, now);
        let boss = level.boss.then(Boss::default);
        info!(
            "level {} ready: {} units, boss: {}, seed {}",
            level.level,
            formation.live_count(),
            boss.is_some(),
            seed
        );

        Self {
            formation,
            boss,
            clock,
            rng,
            bounds: config.bounds,
            time: SimTime::default(),
            phase: GamePhase::default(),
            command_queue: VecDeque::new(),
            bullets: Vec::new(),
        }
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: HostCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = HostCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting report.
    pub fn tick(&mut self) -> TickReport {
        self.process_commands();

        let mut spawned = 0;
        if self.phase == GamePhase::Active {
            let now = self.clock.now_ms();
            self.formation.update(self.bounds, now);
            spawned += self.formation.shoot(&mut self.bullets, &mut self.rng, now);
            if let Some(boss) = self.boss.as_mut() {
                spawned += boss.update(&mut self.bullets, &mut self.rng, now);
            }
            self.check_cleared();
            self.time.advance();
        }

        let mut report = self.report();
        report.bullets_spawned = spawned;
        report
    }

    /// Current state without advancing.
    pub fn report(&self) -> TickReport {
        TickReport {
            time: self.time,
            phase: self.phase,
            formation: self.formation.view(),
            boss: self.boss.as_ref().map(Boss::view),
            bullets_spawned: 0,
        }
    }

    /// Drain the bullets spawned since the last call.
    pub fn take_bullets(&mut self) -> Vec<BulletSpawn> {
        std::mem::take(&mut self.bullets)
    }

    /// Destroy a formation unit immediately.
    pub fn destroy(&mut self, unit: UnitId) -> bool {
        self.formation.destroy(unit)
    }

    /// Damage a formation unit immediately. Returns its stats if it died.
    pub fn hit(&mut self, unit: UnitId, damage: i32) -> Option<EnemyStats> {
        self.formation.hit(unit, damage)
    }

    /// Damage the boss immediately. Returns true if the hit destroyed it.
    pub fn hit_boss(&mut self, damage: i32) -> bool {
        self.boss.as_mut().is_some_and(|boss| boss.hit(damage))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn boss(&self) -> Option<&Boss> {
        self.boss.as_ref()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::DestroyUnit { unit } => {
                self.formation.destroy(unit);
            }
            HostCommand::HitUnit { unit, damage } => {
                self.formation.hit(unit, damage);
            }
            HostCommand::HitBoss { damage } => {
                self.hit_boss(damage);
            }
            HostCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            HostCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    fn check_cleared(&mut self) {
        let boss_done = self.boss.as_ref().map_or(true, Boss::is_destroyed);
        if self.formation.is_empty() && boss_done {
            info!("level cleared at tick {}", self.time.tick);
            self.phase = GamePhase::Cleared;
        }
    }
}
