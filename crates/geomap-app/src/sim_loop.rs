//! Simulation loop thread — runs the engine at 10Hz and publishes snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands and feed refreshes arrive via `mpsc` channel;
//! snapshots are stored in shared state for synchronous polling and
//! optionally streamed to a snapshot channel.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use geomap_core::constants::TICK_RATE;
use geomap_core::state::SimSnapshot;
use geomap_sim::engine::{SimConfig, SimulationEngine};

use crate::state::LoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the simulation loop in a new thread.
///
/// Returns the command sender for the control surface to use. If
/// `snapshot_tx` is given, every tick's snapshot is also streamed to it
/// (dropped receivers are tolerated).
pub fn spawn_sim_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
    snapshot_tx: Option<mpsc::Sender<SimSnapshot>>,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("geomap-sim-loop".into())
        .spawn(move || {
            run_sim_loop(config, cmd_rx, &latest_snapshot, snapshot_tx);
        })
        .expect("Failed to spawn simulation loop thread");

    cmd_tx
}

/// The simulation loop. Runs until Shutdown command or channel disconnect.
fn run_sim_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
    snapshot_tx: Option<mpsc::Sender<SimSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    tracing::info!("simulation loop started");

    loop {
        // 1. Drain all pending commands and feed refreshes
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Operator(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(LoopCommand::RefreshAssets(assets)) => {
                    engine.refresh_assets(assets);
                }
                Ok(LoopCommand::Shutdown) => {
                    tracing::info!("simulation loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::info!("command channel closed, stopping loop");
                    return;
                }
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Stream the snapshot to any subscriber
        if let Some(tx) = &snapshot_tx {
            let _ = tx.send(snapshot.clone());
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomap_core::commands::OperatorCommand;
    use geomap_core::enums::EngagementPhase;
    use geomap_sim::scenario;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Operator(OperatorCommand::ClearSelection))
            .unwrap();
        tx.send(LoopCommand::RefreshAssets(Vec::new())).unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Operator(OperatorCommand::ClearSelection)
        ));
        assert!(matches!(commands[1], LoopCommand::RefreshAssets(_)));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 10Hz = 100ms per tick
        let expected_nanos = 1_000_000_000u64 / 10;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    /// Drive the loop end to end: feed assets in, select and launch over
    /// the channel, shut down cleanly.
    #[test]
    fn test_loop_processes_commands() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_sim_loop(SimConfig::default(), latest.clone(), None);

        let assets = scenario::build_assets(&scenario::ScenarioConfig::default());
        tx.send(LoopCommand::RefreshAssets(assets)).unwrap();
        tx.send(LoopCommand::Operator(OperatorCommand::SelectHostile {
            asset_id: "enemy-1".into(),
        }))
        .unwrap();

        // Wait for the selection to show up in a published snapshot.
        let mut armed = false;
        for _ in 0..50 {
            std::thread::sleep(TICK_DURATION);
            if let Some(snap) = latest.lock().unwrap().clone() {
                if snap.engagement.phase == EngagementPhase::Armed {
                    armed = true;
                    break;
                }
            }
        }
        assert!(armed, "loop should process selection within 50 ticks");

        tx.send(LoopCommand::Shutdown).unwrap();
    }
}
