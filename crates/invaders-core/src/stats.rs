//! Ship stat tables.
//!
//! Base stats are immutable and looked up by kind. Upgrades never touch the
//! base tables: effective stats are recomputed from (base, levels) and handed
//! to whoever constructs a ship.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{EnemyKind, EnemyTier, PlayerShipKind, UpgradeType};

/// Stats of a hostile ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub hp: i32,
    pub attack: f64,
    /// Score awarded on destruction.
    pub point_value: u32,
    /// Coins awarded on destruction.
    pub coin_value: u32,
    /// Experience awarded on destruction.
    pub exp_value: u32,
}

/// Stats of a player ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerShipStats {
    pub ship_width: i32,
    pub ship_height: i32,
    pub max_hp: i32,
    pub attack: f64,
    pub move_speed: f64,
    /// Negative is upward.
    pub bullet_speed: f64,
    pub shooting_interval_ms: u64,
    pub bullet_width: i32,
    pub bullet_height: i32,
}

/// Base stats for a formation unit's tier.
pub fn base_enemy_stats(tier: EnemyTier) -> EnemyStats {
    match tier {
        EnemyTier::A => EnemyStats {
            hp: 1,
            attack: 1.0,
            point_value: 10,
            coin_value: 2,
            exp_value: 5,
        },
        EnemyTier::B => EnemyStats {
            hp: 3,
            attack: 1.0,
            point_value: 20,
            coin_value: 3,
            exp_value: 10,
        },
        EnemyTier::C => EnemyStats {
            hp: 6,
            attack: 1.0,
            point_value: 30,
            coin_value: 5,
            exp_value: 20,
        },
    }
}

/// Base stats for the boss.
pub fn base_boss_stats() -> EnemyStats {
    EnemyStats {
        hp: 100,
        attack: 2.0,
        point_value: 500,
        coin_value: 20,
        exp_value: 50,
    }
}

/// Base stats for a player ship kind.
pub fn base_player_stats(kind: PlayerShipKind) -> PlayerShipStats {
    let (max_hp, move_speed, shooting_interval_ms, bullet_width, bullet_height) = match kind {
        PlayerShipKind::Normal => (5, 2.0, 750, 6, 10),
        PlayerShipKind::BigShot => (3, 1.0, 750, 9, 15),
        PlayerShipKind::DoubleShot => (5, 1.0, 750, 6, 10),
        PlayerShipKind::MoveFast => (3, 3.0, 900, 6, 10),
    };
    PlayerShipStats {
        ship_width: 13 * 2,
        ship_height: 8 * 2,
        max_hp,
        attack: 1.0,
        move_speed,
        bullet_speed: -6.0,
        shooting_interval_ms,
        bullet_width,
        bullet_height,
    }
}

/// Stats handed to formation units at construction, per kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyStatsTable {
    pub a: EnemyStats,
    pub b: EnemyStats,
    pub c: EnemyStats,
}

impl EnemyStatsTable {
    pub fn base() -> Self {
        Self {
            a: base_enemy_stats(EnemyTier::A),
            b: base_enemy_stats(EnemyTier::B),
            c: base_enemy_stats(EnemyTier::C),
        }
    }

    pub fn get(&self, kind: EnemyKind) -> EnemyStats {
        match kind.tier() {
            EnemyTier::A => self.a,
            EnemyTier::B => self.b,
            EnemyTier::C => self.c,
        }
    }
}

impl Default for EnemyStatsTable {
    fn default() -> Self {
        Self::base()
    }
}

/// Upgrade levels of one player ship kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipUpgrades {
    pub attack: u32,
    pub move_speed: u32,
    pub fire_rate: u32,
    pub max_hp: u32,
}

impl Default for ShipUpgrades {
    fn default() -> Self {
        Self {
            attack: MIN_UPGRADE_LEVEL,
            move_speed: MIN_UPGRADE_LEVEL,
            fire_rate: MIN_UPGRADE_LEVEL,
            max_hp: MIN_UPGRADE_LEVEL,
        }
    }
}

impl ShipUpgrades {
    pub fn level_for(&self, upgrade: UpgradeType) -> u32 {
        match upgrade {
            UpgradeType::Attack => self.attack,
            UpgradeType::MoveSpeed => self.move_speed,
            UpgradeType::FireRate => self.fire_rate,
            UpgradeType::MaxHp => self.max_hp,
        }
    }

    /// Set a level, clamped to the valid range.
    pub fn set_level(&mut self, upgrade: UpgradeType, level: u32) {
        let level = level.clamp(MIN_UPGRADE_LEVEL, MAX_UPGRADE_LEVEL);
        match upgrade {
            UpgradeType::Attack => self.attack = level,
            UpgradeType::MoveSpeed => self.move_speed = level,
            UpgradeType::FireRate => self.fire_rate = level,
            UpgradeType::MaxHp => self.max_hp = level,
        }
    }
}

/// Persistent upgrade levels for every player ship kind.
/// Kinds never upgraded read as all-minimum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradeLevels {
    pub ships: HashMap<PlayerShipKind, ShipUpgrades>,
}

impl UpgradeLevels {
    pub fn for_ship(&self, kind: PlayerShipKind) -> ShipUpgrades {
        self.ships.get(&kind).copied().unwrap_or_default()
    }

    pub fn level(&self, kind: PlayerShipKind, upgrade: UpgradeType) -> u32 {
        self.for_ship(kind).level_for(upgrade)
    }

    pub fn set_level(&mut self, kind: PlayerShipKind, upgrade: UpgradeType, level: u32) {
        self.ships.entry(kind).or_default().set_level(upgrade, level);
    }

    /// Reset every attribute of one kind to the minimum level.
    pub fn reset(&mut self, kind: PlayerShipKind) {
        self.ships.insert(kind, ShipUpgrades::default());
    }
}

/// Current stats of a player ship kind given its upgrade levels.
pub fn effective_player_stats(kind: PlayerShipKind, levels: &UpgradeLevels) -> PlayerShipStats {
    let base = base_player_stats(kind);
    let upgrades = levels.for_ship(kind);
    let steps = |level: u32| level.saturating_sub(MIN_UPGRADE_LEVEL);

    let interval_cut = FIRE_RATE_STEP_MS * steps(upgrades.fire_rate) as u64;
    PlayerShipStats {
        attack: base.attack + ATTACK_PER_LEVEL * steps(upgrades.attack) as f64,
        move_speed: base.move_speed + MOVE_SPEED_PER_LEVEL * steps(upgrades.move_speed) as f64,
        shooting_interval_ms: base
            .shooting_interval_ms
            .saturating_sub(interval_cut)
            .max(MIN_SHOOTING_INTERVAL_MS),
        max_hp: base.max_hp + HP_PER_LEVEL * steps(upgrades.max_hp) as i32,
        ..base
    }
}
