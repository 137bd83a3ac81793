//! Game loop thread: runs the simulation engine at 60Hz and publishes reports.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands arrive via `mpsc` channel. Reports are stored in shared state
//! for synchronous polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use invaders_core::clock::{Clock, SystemClock};
use invaders_core::config::LevelConfig;
use invaders_core::constants::TICK_RATE;
use invaders_core::enums::GamePhase;
use invaders_core::state::TickReport;
use invaders_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// What the loop did before it stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub ticks: u64,
    pub bullets: usize,
    pub cleared: bool,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    level: LevelConfig,
    config: SimConfig,
    latest_report: Arc<Mutex<Option<TickReport>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("invaders-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(&level, config, SystemClock::new());
            run_game_loop(engine, cmd_rx, &latest_report)
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<C: Clock>(
    mut engine: SimulationEngine<C>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_report: &Mutex<Option<TickReport>>,
) -> LoopSummary {
    let mut summary = LoopSummary::default();
    let mut next_tick_time = Instant::now();
    info!("game loop started at {} Hz", TICK_RATE);

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            info!(
                "game loop stopped after {} ticks, {} bullets",
                summary.ticks, summary.bullets
            );
            return summary;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let report = engine.tick();
        summary.ticks += 1;
        summary.bullets += report.bullets_spawned;
        if report.phase == GamePhase::Cleared && !summary.cleared {
            summary.cleared = true;
            info!("level cleared after {} ticks", summary.ticks);
        }

        // 3. Bullets belong to the host; the headless runner only counts them
        let spawned = engine.take_bullets();
        if !spawned.is_empty() {
            debug!("tick {}: {} bullets", report.time.tick, spawned.len());
        }

        // 4. Store latest report for synchronous polling
        if let Ok(mut lock) = latest_report.lock() {
            *lock = Some(report);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Forward queued commands to the engine. Returns false when the loop should stop.
fn drain_commands<C: Clock>(
    engine: &mut SimulationEngine<C>,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Host(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_core::clock::ManualClock;
    use invaders_core::commands::HostCommand;

    fn manual_engine() -> (SimulationEngine<ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let engine = SimulationEngine::new(
            &LevelConfig::for_level(1),
            SimConfig::default(),
            clock.clone(),
        );
        (engine, clock)
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Host(HostCommand::Pause)).unwrap();
        tx.send(GameLoopCommand::Host(HostCommand::Resume)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Host(HostCommand::Pause)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Host(HostCommand::Resume)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_drain_stops_on_shutdown_or_disconnect() {
        let (mut engine, _clock) = manual_engine();

        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::Host(HostCommand::Pause)).unwrap();
        assert!(drain_commands(&mut engine, &rx));
        assert_eq!(engine.tick().phase, GamePhase::Paused);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&mut engine, &rx));

        drop(tx);
        assert!(!drain_commands(&mut engine, &rx));
    }

    #[test]
    fn test_pause_resume_via_commands() {
        let (mut engine, clock) = manual_engine();

        let report = engine.tick();
        assert_eq!(report.phase, GamePhase::Active);

        // Pause
        engine.queue_command(HostCommand::Pause);
        let report = engine.tick();
        assert_eq!(report.phase, GamePhase::Paused);
        let paused_tick = report.time.tick;

        // Tick while paused: time should not advance
        clock.advance(100);
        let report = engine.tick();
        assert_eq!(report.time.tick, paused_tick);

        // Resume
        engine.queue_command(HostCommand::Resume);
        let report = engine.tick();
        assert_eq!(report.phase, GamePhase::Active);
        assert!(report.time.tick > paused_tick);
    }

    #[test]
    fn test_loop_exits_on_shutdown() {
        let (engine, _clock) = manual_engine();
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        let latest = Mutex::new(None);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        let summary = run_game_loop(engine, rx, &latest);
        assert_eq!(summary, LoopSummary::default());
        assert!(latest.lock().unwrap().is_none());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
