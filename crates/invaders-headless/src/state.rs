//! Runner state shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{anyhow, bail, Context};

use invaders_core::commands::HostCommand;
use invaders_core::config::LevelConfig;
use invaders_core::state::TickReport;
use invaders_sim::SimConfig;

use crate::game_loop::{self, LoopSummary};

/// Commands sent from the caller to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A host command to forward to the simulation engine.
    Host(HostCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running (or not yet started) game loop.
///
/// - `mpsc::Sender` sits behind a `Mutex` so the handle can be shared
/// - the latest report is `Arc<Mutex<...>>`, written by the loop thread
pub struct RunnerState {
    /// `None` before `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_report: Arc<Mutex<Option<TickReport>>>,
    pub running: Mutex<bool>,
    handle: Mutex<Option<JoinHandle<LoopSummary>>>,
}

impl Default for RunnerState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_report: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            handle: Mutex::new(None),
        }
    }
}

impl RunnerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop for `level`. Fails if one is already running.
    pub fn start(&self, level: LevelConfig, config: SimConfig) -> anyhow::Result<()> {
        let mut running = self
            .running
            .lock()
            .map_err(|e| anyhow!(e.to_string()))?;
        if *running {
            bail!("simulation already running");
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(level, config, self.latest_report.clone())
                .context("failed to spawn game loop thread")?;

        *self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))? = Some(cmd_tx);
        *self.handle.lock().map_err(|e| anyhow!(e.to_string()))? = Some(handle);
        *running = true;
        Ok(())
    }

    /// Forward a host command to the running simulation.
    pub fn send_command(&self, command: HostCommand) -> anyhow::Result<()> {
        let tx = self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
        match tx.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::Host(command))
                .context("failed to send command"),
            None => bail!("simulation not started"),
        }
    }

    /// Latest report for synchronous polling.
    pub fn latest_report(&self) -> anyhow::Result<Option<TickReport>> {
        let lock = self
            .latest_report
            .lock()
            .map_err(|e| anyhow!(e.to_string()))?;
        Ok(lock.clone())
    }

    /// Ask the loop to stop and wait for it. Returns `None` if nothing was running.
    pub fn shutdown(&self) -> anyhow::Result<Option<LoopSummary>> {
        if let Some(tx) = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!(e.to_string()))?
            .take()
        {
            // The loop may already have exited on its own.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }

        let handle = self.handle.lock().map_err(|e| anyhow!(e.to_string()))?.take();
        *self.running.lock().map_err(|e| anyhow!(e.to_string()))? = false;

        match handle {
            Some(handle) => handle
                .join()
                .map(Some)
                .map_err(|_| anyhow!("game loop thread panicked")),
            None => Ok(None),
        }
    }
}
