//! Boss phase rules.
//!
//! Phase selection, movement curves and volley layouts as pure functions.
//! The stateful boss in the simulation crate owns HP, cooldowns and position
//! and calls into these each tick.

use glam::IVec2;

use invaders_core::constants::*;
use invaders_core::enums::BossPhase;
use invaders_core::events::BulletSpawn;

/// Phase for the current HP. Recomputed every tick, no hysteresis.
pub fn phase_for_hp(hp: i32) -> BossPhase {
    if hp > BOSS_PHASE_ONE_HP {
        BossPhase::One
    } else if hp > BOSS_PHASE_TWO_HP {
        BossPhase::Two
    } else {
        BossPhase::Three
    }
}

/// One patrol step. Returns the new x and the (possibly reversed) speed.
pub fn patrol_step(x: i32, speed: i32) -> (i32, i32) {
    let next = x + speed;
    if next < BOSS_PATROL_MIN_X {
        (BOSS_PATROL_MIN_X, -speed)
    } else if next > BOSS_PATROL_MAX_X {
        (BOSS_PATROL_MAX_X, -speed)
    } else {
        (next, speed)
    }
}

/// Upper-left corner on the figure-eight at angle `t`.
pub fn figure_eight(t: f64, width: i32) -> IVec2 {
    let offset_x = BOSS_AMPLITUDE_X * t.sin();
    let offset_y = BOSS_AMPLITUDE_Y * t.sin() * t.cos();
    IVec2::new(
        BOSS_CENTER_X + offset_x as i32 - width / 2,
        BOSS_CENTER_Y + offset_y as i32,
    )
}

fn straight_shot(origin: IVec2) -> BulletSpawn {
    BulletSpawn::enemy(
        origin,
        IVec2::new(0, BOSS_STRAIGHT_SPEED),
        BOSS_STRAIGHT_BULLET_WIDTH,
        BOSS_STRAIGHT_BULLET_HEIGHT,
    )
}

fn fan(origin: IVec2) -> impl Iterator<Item = BulletSpawn> {
    BOSS_FAN_VELOCITIES_X.into_iter().map(move |vx| {
        BulletSpawn::enemy(
            origin,
            IVec2::new(vx, BOSS_FAN_SPEED),
            BOSS_FAN_BULLET_WIDTH,
            BOSS_FAN_BULLET_HEIGHT,
        )
    })
}

/// Bullets of one volley, fired from `origin` (bottom center of the boss).
pub fn volley(phase: BossPhase, origin: IVec2) -> Vec<BulletSpawn> {
    match phase {
        BossPhase::One => vec![straight_shot(origin)],
        BossPhase::Two => fan(origin).collect(),
        BossPhase::Three => fan(origin)
            .chain((0..BOSS_BARRAGE_COUNT).map(|i| {
                straight_shot(origin + IVec2::new(0, i * BOSS_BARRAGE_SPACING))
            }))
            .collect(),
    }
}
