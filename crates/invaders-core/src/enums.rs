//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{PROPORTION_B, PROPORTION_C};

/// Formation travel direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Right,
    Left,
    Down,
}

/// Shooter tier. Decides bullet speed and shot layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyTier {
    /// Single centered shot at base speed.
    A,
    /// Single centered shot at double speed.
    B,
    /// Two shots offset from center at base speed.
    C,
}

/// Formation unit kind. The `1`/`2` suffix is the animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

/// Allegiance of a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    Player,
    Enemy,
}

/// Attack pattern selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    /// Default random single-shot fire.
    #[default]
    Idle,
    Wave,
    SideWave,
    Focus,
    RandomBurst,
}

/// Boss behavior phase, derived from current HP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BossPhase {
    /// Patrol + straight shot.
    One,
    /// Figure-eight + five-way fan.
    Two,
    /// Figure-eight + fan + vertical barrage.
    Three,
}

/// Player ship variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerShipKind {
    Normal,
    BigShot,
    DoubleShot,
    MoveFast,
}

/// Upgradeable player ship attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeType {
    Attack,
    MoveSpeed,
    FireRate,
    MaxHp,
}

/// Engine run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    /// Formation and boss are both gone.
    Cleared,
}

impl EnemyKind {
    pub fn tier(self) -> EnemyTier {
        match self {
            Self::A1 | Self::A2 => EnemyTier::A,
            Self::B1 | Self::B2 => EnemyTier::B,
            Self::C1 | Self::C2 => EnemyTier::C,
        }
    }

    /// Kind for a row of a freshly built formation: the top band is C,
    /// the next band B, the rest A.
    pub fn for_row(row: usize, rows: usize) -> Self {
        let fraction = row as f64 / rows.max(1) as f64;
        if fraction < PROPORTION_C {
            Self::C1
        } else if fraction < PROPORTION_B + PROPORTION_C {
            Self::B1
        } else {
            Self::A1
        }
    }

    /// The other animation frame of the same tier.
    pub fn next_frame(self) -> Self {
        match self {
            Self::A1 => Self::A2,
            Self::A2 => Self::A1,
            Self::B1 => Self::B2,
            Self::B2 => Self::B1,
            Self::C1 => Self::C2,
            Self::C2 => Self::C1,
        }
    }
}

impl PlayerShipKind {
    pub const ALL: [PlayerShipKind; 4] = [
        PlayerShipKind::Normal,
        PlayerShipKind::BigShot,
        PlayerShipKind::DoubleShot,
        PlayerShipKind::MoveFast,
    ];
}

impl UpgradeType {
    pub const ALL: [UpgradeType; 4] = [
        UpgradeType::Attack,
        UpgradeType::MoveSpeed,
        UpgradeType::FireRate,
        UpgradeType::MaxHp,
    ];
}
