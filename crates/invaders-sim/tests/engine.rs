//! End-to-end tests driving `SimulationEngine` with a hand-driven clock.

use invaders_core::clock::ManualClock;
use invaders_core::commands::HostCommand;
use invaders_core::config::LevelConfig;
use invaders_core::constants::*;
use invaders_core::enums::{BossPhase, GamePhase, PatternKind};
use invaders_core::types::UnitId;
use invaders_sim::{SimConfig, SimulationEngine};

const FRAME_MS: u64 = 1000 / TICK_RATE as u64;

fn engine(level: &LevelConfig, seed: u64) -> (SimulationEngine<ManualClock>, ManualClock) {
    let clock = ManualClock::new(0);
    let engine = SimulationEngine::new(
        level,
        SimConfig {
            seed,
            ..Default::default()
        },
        clock.clone(),
    );
    (engine, clock)
}

fn all_units(engine: &SimulationEngine<ManualClock>) -> Vec<UnitId> {
    engine.formation().units().map(|u| u.id).collect()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let level = LevelConfig::for_level(3);
    let (mut engine_a, clock_a) = engine(&level, 12345);
    let (mut engine_b, clock_b) = engine(&level, 12345);

    for _ in 0..1_500 {
        clock_a.advance(FRAME_MS);
        clock_b.advance(FRAME_MS);
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Reports diverged with same seed");
        assert_eq!(engine_a.take_bullets(), engine_b.take_bullets());
    }
}

#[test]
fn test_level_seed_overrides_engine_seed() {
    let level = LevelConfig {
        seed: Some(7),
        ..LevelConfig::for_level(5)
    };
    let (mut engine_a, clock_a) = engine(&level, 1);
    let (mut engine_b, clock_b) = engine(&level, 2);
    for _ in 0..600 {
        clock_a.advance(FRAME_MS);
        clock_b.advance(FRAME_MS);
        engine_a.tick();
        engine_b.tick();
        assert_eq!(engine_a.take_bullets(), engine_b.take_bullets());
    }
}

// ---- Patterns ----

#[test]
fn test_level_one_runs_a_wave() {
    let level = LevelConfig::for_level(1);
    let (mut engine, clock) = engine(&level, 42);

    // Idle until the pattern delay passes and a movement step lands
    let mut saw_wave = false;
    let mut back_to_idle = false;
    for _ in 0..(20 * TICK_RATE) {
        clock.advance(FRAME_MS);
        let report = engine.tick();
        match report.formation.pattern {
            PatternKind::Wave => saw_wave = true,
            PatternKind::Idle if saw_wave => {
                back_to_idle = true;
                break;
            }
            _ => {}
        }
    }
    assert!(saw_wave, "level 1 should start a wave");
    assert!(back_to_idle, "the wave should complete");
    assert_eq!(engine.formation().shooters().len(), level.formation_width);
}

#[test]
fn test_level_five_stays_idle() {
    let level = LevelConfig::for_level(5);
    let (mut engine, clock) = engine(&level, 42);
    let mut bullets = 0;
    for _ in 0..(15 * TICK_RATE) {
        clock.advance(FRAME_MS);
        let report = engine.tick();
        assert_eq!(report.formation.pattern, PatternKind::Idle);
        bullets += report.bullets_spawned;
    }
    assert!(bullets > 0, "idle fire continues without a pattern");
}

// ---- Commands ----

#[test]
fn test_pause_and_resume() {
    let level = LevelConfig::for_level(1);
    let (mut engine, clock) = engine(&level, 42);
    engine.tick();

    engine.queue_command(HostCommand::Pause);
    let paused = engine.tick();
    assert_eq!(paused.phase, GamePhase::Paused);
    let tick = paused.time.tick;

    for _ in 0..100 {
        clock.advance(FRAME_MS);
        assert_eq!(engine.tick().time.tick, tick);
    }

    engine.queue_command(HostCommand::Resume);
    let resumed = engine.tick();
    assert_eq!(resumed.phase, GamePhase::Active);
    assert_eq!(resumed.time.tick, tick + 1);
}

#[test]
fn test_destroy_commands_clear_level() {
    let level = LevelConfig::for_level(2);
    let (mut engine, clock) = engine(&level, 42);
    let units = all_units(&engine);
    assert_eq!(units.len(), level.formation_width * level.formation_height);

    engine.queue_commands(units.iter().map(|&unit| HostCommand::DestroyUnit { unit }));
    clock.advance(FRAME_MS);
    let report = engine.tick();
    assert_eq!(report.formation.live_count, 0);
    assert_eq!(report.formation.shooters, 0);
    assert_eq!(report.phase, GamePhase::Cleared);

    // Destroying again is a no-op
    assert!(!engine.destroy(units[0]));
}

#[test]
fn test_hit_command_damages_units() {
    let level = LevelConfig {
        formation_width: 1,
        formation_height: 1,
        ..LevelConfig::for_level(1)
    };
    let (mut engine, _clock) = engine(&level, 42);
    let unit = all_units(&engine)[0];

    // Single row is C tier: 6 hp
    engine.queue_command(HostCommand::HitUnit { unit, damage: 5 });
    assert_eq!(engine.tick().formation.live_count, 1);
    engine.queue_command(HostCommand::HitUnit { unit, damage: 1 });
    let report = engine.tick();
    assert_eq!(report.formation.live_count, 0);
    assert_eq!(report.phase, GamePhase::Cleared);
}

// ---- Boss ----

#[test]
fn test_boss_phase_skip_through_engine() {
    let level = LevelConfig {
        boss: true,
        ..LevelConfig::for_level(5)
    };
    let (mut engine, clock) = engine(&level, 42);

    engine.queue_command(HostCommand::HitBoss { damage: 35 });
    let report = engine.tick();
    let boss = report.boss.unwrap();
    assert_eq!(boss.hp, 65);
    assert_eq!(boss.phase, BossPhase::One);

    engine.queue_command(HostCommand::HitBoss { damage: 40 });
    clock.advance(BOSS_SHOOT_COOLDOWN_MS);
    engine.take_bullets();
    let report = engine.tick();
    assert_eq!(report.boss.unwrap().phase, BossPhase::Three);

    // Phase three volley: fan plus vertical barrage
    let boss_bullets = engine
        .take_bullets()
        .into_iter()
        .filter(|b| b.width == BOSS_FAN_BULLET_WIDTH)
        .count();
    assert_eq!(boss_bullets, 10);
}

#[test]
fn test_level_needs_boss_down_to_clear() {
    let level = LevelConfig {
        formation_width: 1,
        formation_height: 1,
        boss: true,
        ..LevelConfig::for_level(1)
    };
    let (mut engine, _clock) = engine(&level, 42);
    let unit = all_units(&engine)[0];

    engine.queue_command(HostCommand::DestroyUnit { unit });
    assert_eq!(engine.tick().phase, GamePhase::Active);

    assert!(engine.hit_boss(100));
    assert_eq!(engine.tick().phase, GamePhase::Cleared);
    assert!(engine.boss().unwrap().is_destroyed());
}
