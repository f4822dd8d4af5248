//! Application state shared between the caller and the simulation loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use geomap_core::asset::Asset;
use geomap_core::commands::OperatorCommand;
use geomap_core::state::SimSnapshot;

/// Commands sent to the simulation loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// An operator command to forward to the engine.
    Operator(OperatorCommand),
    /// A fresh whole-set read from the asset feed, applied atomically
    /// at the next tick boundary.
    RefreshAssets(Vec<Asset>),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Errors from the app-layer control surface.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("simulation loop is gone: {0}")]
    LoopClosed(String),
}

/// Shared handle to the running simulation.
///
/// `mpsc::Sender` is Send but not Sync, so it lives behind a Mutex; the
/// latest snapshot is shared with the loop thread via `Arc<Mutex<...>>`.
pub struct AppState {
    /// Channel sender to the loop thread. `None` before `start`.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot, updated by the loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
    /// Whether the loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send a command to the loop thread.
    pub fn send(&self, command: LoopCommand) -> Result<(), AppError> {
        let tx_lock = self
            .command_tx
            .lock()
            .map_err(|e| AppError::LoopClosed(e.to_string()))?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(command)
                .map_err(|e| AppError::LoopClosed(e.to_string())),
            None => Err(AppError::NotStarted),
        }
    }

    /// Forward an operator command.
    pub fn send_command(&self, command: OperatorCommand) -> Result<(), AppError> {
        self.send(LoopCommand::Operator(command))
    }

    /// Get the latest snapshot synchronously (for polling / initial state).
    pub fn snapshot(&self) -> Result<Option<SimSnapshot>, AppError> {
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|e| AppError::LoopClosed(e.to_string()))?;
        Ok(lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        let err = state
            .send_command(OperatorCommand::Cancel)
            .expect_err("send before start must fail");
        assert!(matches!(err, AppError::NotStarted));
    }
}
