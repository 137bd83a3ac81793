#[cfg(test)]
mod tests {
    use glam::IVec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::clock::{Clock, ManualClock};
    use crate::commands::HostCommand;
    use crate::config::{CellOverride, ConfigError, LevelConfig};
    use crate::constants::*;
    use crate::cooldown::Cooldown;
    use crate::enums::*;
    use crate::events::{BulletSink, BulletSpawn};
    use crate::random::RandomSource;
    use crate::stats::*;
    use crate::types::{Rect, UnitId};

    // ---- Enums ----

    #[test]
    fn test_pattern_kind_serde() {
        for v in [
            PatternKind::Idle,
            PatternKind::Wave,
            PatternKind::SideWave,
            PatternKind::Focus,
            PatternKind::RandomBurst,
        ] {
            let json = serde_json::to_string(&v).unwrap();
            let back: PatternKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_kind_for_row_bands() {
        // 4 rows: 0.0 -> C, 0.25 and 0.5 -> B, 0.75 -> A
        assert_eq!(EnemyKind::for_row(0, 4), EnemyKind::C1);
        assert_eq!(EnemyKind::for_row(1, 4), EnemyKind::B1);
        assert_eq!(EnemyKind::for_row(2, 4), EnemyKind::B1);
        assert_eq!(EnemyKind::for_row(3, 4), EnemyKind::A1);
    }

    #[test]
    fn test_single_row_formation_is_c_tier() {
        assert_eq!(EnemyKind::for_row(0, 1).tier(), EnemyTier::C);
    }

    #[test]
    fn test_animation_frame_keeps_tier() {
        for kind in [
            EnemyKind::A1,
            EnemyKind::A2,
            EnemyKind::B1,
            EnemyKind::B2,
            EnemyKind::C1,
            EnemyKind::C2,
        ] {
            let next = kind.next_frame();
            assert_ne!(kind, next);
            assert_eq!(kind.tier(), next.tier());
            assert_eq!(next.next_frame(), kind);
        }
    }

    // ---- Geometry ----

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(20, 100, 24, 16);
        assert_eq!(r.right(), 44);
        assert_eq!(r.bottom(), 116);
        assert_eq!(r.center_x(), 32);
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
        // Touching edges do not overlap
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 20, 10, 10)));
    }

    #[test]
    fn test_rect_translate() {
        let mut r = Rect::new(20, 100, 24, 16);
        r.translate(IVec2::new(-8, 4));
        assert_eq!(r.position, IVec2::new(12, 104));
        assert_eq!(r.size, IVec2::new(24, 16));
    }

    // ---- Time and randomness ----

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(1_000);
        let handle = clock.clone();
        handle.advance(250);
        assert_eq!(clock.now_ms(), 1_250);
        clock.set(5_000);
        assert_eq!(handle.now_ms(), 5_000);
    }

    #[test]
    fn test_random_source_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(rng.next_below(3) < 3);
        }
        assert_eq!(rng.next_below(0), 0);
    }

    #[test]
    fn test_cooldown_unstarted_is_finished() {
        let cd = Cooldown::new(600);
        assert!(cd.is_finished(0));
    }

    #[test]
    fn test_cooldown_fixed_restart() {
        let mut cd = Cooldown::new(600);
        cd.restart(1_000);
        assert!(!cd.is_finished(1_599));
        assert!(cd.is_finished(1_600));
    }

    #[test]
    fn test_cooldown_jitter_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut cd = Cooldown::with_variance(2_000, 400);
        for i in 0..200 {
            cd.reset(i * 10_000, &mut rng);
            let d = cd.duration_ms();
            assert!((1_600..2_400).contains(&d), "duration {d} out of range");
        }
    }

    #[test]
    fn test_cooldown_variance_capped_by_base() {
        let cd = Cooldown::with_variance(100, 500);
        assert_eq!(cd.variance_ms(), 100);
    }

    // ---- Config ----

    #[test]
    fn test_level_defaults_grow() {
        let l1 = LevelConfig::for_level(1);
        let l5 = LevelConfig::for_level(5);
        assert!(l5.formation_width * l5.formation_height > l1.formation_width * l1.formation_height);
        assert!(l5.shooting_frequency_ms < l1.shooting_frequency_ms);
        assert_eq!(l1.level, 1);
    }

    #[test]
    fn test_shooting_variance_default_fraction() {
        let cfg = LevelConfig {
            shooting_frequency_ms: 2_500,
            ..LevelConfig::for_level(2)
        };
        assert_eq!(cfg.shooting_variance(), 500);

        let explicit = LevelConfig {
            shooting_variance_ms: Some(42),
            ..cfg
        };
        assert_eq!(explicit.shooting_variance(), 42);
    }

    #[test]
    fn test_level_from_partial_json() {
        let cfg = LevelConfig::from_json(
            r#"{
                "level": 3,
                "formation_width": 4,
                "formation_height": 3,
                "overrides": [{ "column": 0, "row": 2, "hp": 0 }]
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.level, 3);
        assert_eq!(cfg.formation_width, 4);
        assert_eq!(cfg.formation_height, 3);
        assert_eq!(
            cfg.overrides,
            vec![CellOverride {
                column: 0,
                row: 2,
                hp: 0
            }]
        );
        // Unspecified fields keep level-one defaults
        assert_eq!(cfg.shooting_frequency_ms, LevelConfig::for_level(1).shooting_frequency_ms);
        assert!(!cfg.boss);
    }

    #[test]
    fn test_level_rejects_empty_grid() {
        let err = LevelConfig::from_json(r#"{ "formation_width": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_level_rejects_zero_frequency() {
        let err = LevelConfig::from_json(r#"{ "shooting_frequency_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_level_parse_error() {
        let err = LevelConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_level_missing_file() {
        let err = LevelConfig::load(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    // ---- Stats ----

    #[test]
    fn test_enemy_table_by_tier() {
        let table = EnemyStatsTable::base();
        assert_eq!(table.get(EnemyKind::A2).hp, 1);
        assert_eq!(table.get(EnemyKind::B1).hp, 3);
        assert_eq!(table.get(EnemyKind::C2).point_value, 30);
        assert_eq!(base_boss_stats().hp, 100);
    }

    #[test]
    fn test_effective_stats_at_minimum_equal_base() {
        let levels = UpgradeLevels::default();
        for kind in PlayerShipKind::ALL {
            assert_eq!(effective_player_stats(kind, &levels), base_player_stats(kind));
        }
    }

    #[test]
    fn test_effective_stats_apply_levels() {
        let mut levels = UpgradeLevels::default();
        levels.set_level(PlayerShipKind::Normal, UpgradeType::Attack, 3);
        levels.set_level(PlayerShipKind::Normal, UpgradeType::MoveSpeed, 5);
        levels.set_level(PlayerShipKind::Normal, UpgradeType::FireRate, 4);
        levels.set_level(PlayerShipKind::Normal, UpgradeType::MaxHp, 2);

        let stats = effective_player_stats(PlayerShipKind::Normal, &levels);
        assert!((stats.attack - 1.6).abs() < 1e-9);
        assert!((stats.move_speed - 4.0).abs() < 1e-9);
        assert_eq!(stats.shooting_interval_ms, 750 - 75);
        assert_eq!(stats.max_hp, 6);

        // Other kinds are untouched
        assert_eq!(
            effective_player_stats(PlayerShipKind::BigShot, &levels),
            base_player_stats(PlayerShipKind::BigShot)
        );
    }

    #[test]
    fn test_upgrade_levels_clamped() {
        let mut levels = UpgradeLevels::default();
        levels.set_level(PlayerShipKind::MoveFast, UpgradeType::FireRate, 99);
        assert_eq!(levels.level(PlayerShipKind::MoveFast, UpgradeType::FireRate), MAX_UPGRADE_LEVEL);
        levels.set_level(PlayerShipKind::MoveFast, UpgradeType::Attack, 0);
        assert_eq!(levels.level(PlayerShipKind::MoveFast, UpgradeType::Attack), MIN_UPGRADE_LEVEL);
    }

    #[test]
    fn test_shooting_interval_floor() {
        let mut levels = UpgradeLevels::default();
        levels.set_level(PlayerShipKind::Normal, UpgradeType::FireRate, MAX_UPGRADE_LEVEL);
        let stats = effective_player_stats(PlayerShipKind::Normal, &levels);
        // 750 - 9 * 25 = 525, still above the floor
        assert_eq!(stats.shooting_interval_ms, 525);
        assert!(stats.shooting_interval_ms >= MIN_SHOOTING_INTERVAL_MS);
    }

    #[test]
    fn test_upgrade_reset() {
        let mut levels = UpgradeLevels::default();
        levels.set_level(PlayerShipKind::DoubleShot, UpgradeType::MaxHp, 7);
        levels.reset(PlayerShipKind::DoubleShot);
        assert_eq!(levels.for_ship(PlayerShipKind::DoubleShot), ShipUpgrades::default());
    }

    #[test]
    fn test_upgrade_levels_persist_as_json() {
        let mut levels = UpgradeLevels::default();
        levels.set_level(PlayerShipKind::BigShot, UpgradeType::Attack, 4);
        let json = serde_json::to_string(&levels).unwrap();
        let back: UpgradeLevels = serde_json::from_str(&json).unwrap();
        assert_eq!(back, levels);
    }

    // ---- Events and commands ----

    #[test]
    fn test_vec_is_bullet_sink() {
        let mut sink: Vec<BulletSpawn> = Vec::new();
        sink.spawn(BulletSpawn::enemy(IVec2::new(1, 2), IVec2::new(0, 4), 6, 10));
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].team, Team::Enemy);
    }

    #[test]
    fn test_host_command_tagged_json() {
        let cmd = HostCommand::HitUnit {
            unit: UnitId(7),
            damage: 2,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"HitUnit\""));
        let back: HostCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            back,
            HostCommand::HitUnit {
                unit: UnitId(7),
                damage: 2
            }
        ));
    }
}
