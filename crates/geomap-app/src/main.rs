//! Headless demo: runs the simulation loop with the simulated asset feed,
//! scripts one engagement end to end, and prints the resulting snapshots.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use geomap_app::feed::{self, FeedConfig};
use geomap_app::sim_loop::{self, TICK_DURATION};
use geomap_app::state::{AppState, LoopCommand};
use geomap_core::commands::OperatorCommand;
use geomap_sim::engine::SimConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let state = AppState::new();
    let cmd_tx = sim_loop::spawn_sim_loop(
        SimConfig::default(),
        state.latest_snapshot.clone(),
        None,
    );
    *state.command_tx.lock().expect("fresh state") = Some(cmd_tx.clone());
    *state.running.lock().expect("fresh state") = true;

    let feed = feed::spawn_asset_feed(cmd_tx.clone(), FeedConfig::default());

    // Wait for the first feed refresh to land in a snapshot.
    let hostile_id = loop {
        std::thread::sleep(TICK_DURATION);
        let snapshot = state.snapshot().expect("loop running");
        if let Some(snap) = snapshot {
            if let Some(hostile) = snap.assets.iter().find(|a| a.is_hostile()) {
                break hostile.id.clone();
            }
        }
    };

    tracing::info!(hostile_id, "scripting demo engagement");
    state
        .send_command(OperatorCommand::SelectHostile {
            asset_id: hostile_id,
        })
        .expect("loop running");
    state
        .send_command(OperatorCommand::Launch)
        .expect("loop running");

    // Poll until the engagement reaches a terminal state, echoing progress.
    let mut last_progress = None;
    loop {
        std::thread::sleep(Duration::from_millis(500));
        let Some(snap) = state.snapshot().expect("loop running") else {
            continue;
        };
        if Some(snap.engagement.progress) != last_progress {
            last_progress = Some(snap.engagement.progress);
            println!(
                "{}",
                serde_json::to_string(&snap.engagement).expect("serializable view")
            );
        }
        if snap.engagement.phase.is_terminal() {
            break;
        }
    }

    feed.close();
    let _ = state.send(LoopCommand::Shutdown);
}
