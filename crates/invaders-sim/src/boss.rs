//! The boss: one large unit whose movement and volleys change with its HP.

use glam::IVec2;
use log::info;

use invaders_core::constants::*;
use invaders_core::cooldown::Cooldown;
use invaders_core::enums::BossPhase;
use invaders_core::events::BulletSink;
use invaders_core::random::RandomSource;
use invaders_core::state::BossView;
use invaders_core::stats::{base_boss_stats, EnemyStats};
use invaders_core::types::{Rect, Rgb};
use invaders_patterns::boss::{figure_eight, patrol_step, phase_for_hp, volley};

const INITIAL_COLOR: Rgb = Rgb::new(255, 0, 0);
const DESTROYED_COLOR: Rgb = Rgb::new(255, 50, 50);

#[derive(Debug, Clone)]
pub struct Boss {
    rect: Rect,
    stats: EnemyStats,
    max_hp: i32,
    total_damage: i32,
    destroyed: bool,
    color: Rgb,
    /// Signed patrol speed for phase one.
    patrol_speed: i32,
    /// Figure-eight angle for phases two and three.
    angle: f64,
    shoot_cooldown: Cooldown,
    animation_cooldown: Cooldown,
    /// Phase seen on the last update, for logging transitions.
    last_phase: BossPhase,
}

impl Boss {
    pub fn new(position: IVec2, stats: EnemyStats) -> Self {
        Self {
            rect: Rect {
                position,
                size: IVec2::new(BOSS_WIDTH, BOSS_HEIGHT),
            },
            stats,
            max_hp: stats.hp,
            total_damage: 0,
            destroyed: false,
            color: INITIAL_COLOR,
            patrol_speed: BOSS_PATROL_SPEED,
            angle: 0.0,
            shoot_cooldown: Cooldown::new(BOSS_SHOOT_COOLDOWN_MS),
            animation_cooldown: Cooldown::new(BOSS_ANIMATION_COOLDOWN_MS),
            last_phase: phase_for_hp(stats.hp),
        }
    }

    /// Move and fire according to the current phase. Returns the bullets
    /// spawned. Does nothing once destroyed.
    pub fn update(
        &mut self,
        sink: &mut impl BulletSink,
        rng: &mut impl RandomSource,
        now_ms: u64,
    ) -> usize {
        if self.destroyed {
            return 0;
        }

        let phase = self.phase();
        if phase != self.last_phase {
            info!("boss entering phase {:?} at {} hp", phase, self.stats.hp);
            self.last_phase = phase;
        }

        match phase {
            BossPhase::One => {
                let (x, speed) = patrol_step(self.rect.x(), self.patrol_speed);
                self.rect.position.x = x;
                self.patrol_speed = speed;
            }
            BossPhase::Two | BossPhase::Three => {
                self.angle += BOSS_PHASE_ANGLE_STEP;
                self.rect.position = figure_eight(self.angle, self.rect.width());
            }
        }

        let mut spawned = 0;
        if self.shoot_cooldown.is_finished(now_ms) {
            self.shoot_cooldown.restart(now_ms);
            let origin = IVec2::new(self.rect.center_x(), self.rect.bottom());
            for bullet in volley(phase, origin) {
                sink.spawn(bullet);
                spawned += 1;
            }
        }

        if self.animation_cooldown.is_finished(now_ms) {
            self.animation_cooldown.restart(now_ms);
            self.color = Rgb::new(
                155 + rng.next_below(100) as u8,
                20 + rng.next_below(30) as u8,
                20 + rng.next_below(30) as u8,
            );
        }

        spawned
    }

    /// Apply damage. Returns true when this hit destroyed the boss.
    pub fn hit(&mut self, damage: i32) -> bool {
        if self.destroyed {
            return false;
        }
        self.stats.hp -= damage;
        self.total_damage += damage;

        if self.stats.hp <= 0 {
            self.destroyed = true;
            self.color = DESTROYED_COLOR;
            info!("boss destroyed after {} total damage", self.total_damage);
            return true;
        }
        let red = 255 * self.stats.hp / self.max_hp.max(1);
        self.color = Rgb::new(red.clamp(0, 255) as u8, 60, 60);
        false
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn hp(&self) -> i32 {
        self.stats.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn total_damage(&self) -> i32 {
        self.total_damage
    }

    /// Phase for the current HP. Never cached.
    pub fn phase(&self) -> BossPhase {
        phase_for_hp(self.stats.hp)
    }

    pub fn stats(&self) -> &EnemyStats {
        &self.stats
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn view(&self) -> BossView {
        BossView {
            hp: self.stats.hp,
            max_hp: self.max_hp,
            phase: self.phase(),
            extent: self.rect,
            destroyed: self.destroyed,
        }
    }
}

impl Default for Boss {
    fn default() -> Self {
        Self::new(IVec2::new(BOSS_INIT_X, BOSS_INIT_Y), base_boss_stats())
    }
}
