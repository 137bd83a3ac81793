//! Bullet shaping for formation shooters.

use glam::IVec2;

use invaders_core::constants::*;
use invaders_core::enums::EnemyTier;
use invaders_core::events::{BulletSink, BulletSpawn};

use crate::unit::Unit;

/// Fire one volley from `shooter`. Returns the number of bullets spawned.
///
/// Bullets leave from the shooter's horizontal center at its bottom edge.
/// B-tier bullets travel faster; C-tier shooters fire a pair offset from
/// center.
pub fn fire(shooter: &Unit, sink: &mut impl BulletSink) -> usize {
    let tier = shooter.tier();
    let speed = match tier {
        EnemyTier::B => BULLET_SPEED * FAST_BULLET_MULTIPLIER,
        EnemyTier::A | EnemyTier::C => BULLET_SPEED,
    };
    let velocity = IVec2::new(0, speed);
    let origin = IVec2::new(shooter.rect.center_x(), shooter.rect.bottom());
    let bullet = |dx: i32| {
        BulletSpawn::enemy(
            origin + IVec2::new(dx, 0),
            velocity,
            ENEMY_BULLET_WIDTH,
            ENEMY_BULLET_HEIGHT,
        )
    };

    match tier {
        EnemyTier::C => {
            sink.spawn(bullet(-DOUBLE_SHOT_OFFSET));
            sink.spawn(bullet(DOUBLE_SHOT_OFFSET));
            2
        }
        EnemyTier::A | EnemyTier::B => {
            sink.spawn(bullet(0));
            1
        }
    }
}
