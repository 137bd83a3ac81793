//! Projectiles emitted by the simulation.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::Team;

/// A projectile to be spawned by the host's bullet system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletSpawn {
    pub origin: IVec2,
    /// Pixels per frame; positive y is downward.
    pub velocity: IVec2,
    pub width: i32,
    pub height: i32,
    pub team: Team,
}

/// Receiver for spawned projectiles.
pub trait BulletSink {
    fn spawn(&mut self, bullet: BulletSpawn);
}

impl BulletSink for Vec<BulletSpawn> {
    fn spawn(&mut self, bullet: BulletSpawn) {
        self.push(bullet);
    }
}

impl BulletSpawn {
    pub fn enemy(origin: IVec2, velocity: IVec2, width: i32, height: i32) -> Self {
        Self {
            origin,
            velocity,
            width,
            height,
            team: Team::Enemy,
        }
    }
}
