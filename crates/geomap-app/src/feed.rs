//! Simulated asset feed — the stand-in for the external device layer.
//!
//! The real system refreshes the asset set over HTTP polling and a
//! WebSocket stream; the engine only requires a consistent read of
//! "current entities", so this feed reproduces that contract: a background
//! thread pushes whole-set refreshes to the simulation loop at a fixed
//! interval, drifting positions and statuses between reads.
//!
//! The feed is an explicitly scoped resource: `spawn_asset_feed` acquires
//! it, `AssetFeedHandle::close` releases it deterministically.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use geomap_core::asset::Asset;
use geomap_core::enums::AssetStatus;
use geomap_sim::scenario::{self, ScenarioConfig};

use crate::state::LoopCommand;

/// Configuration for the simulated feed.
#[derive(Debug, Clone, Copy)]
pub struct FeedConfig {
    /// RNG seed for the generated population and its drift.
    pub seed: u64,
    /// Number of friendly assets in the population.
    pub friendly_count: usize,
    /// Interval between whole-set refreshes.
    pub refresh_interval: Duration,
    /// Maximum positional drift per refresh, in degrees.
    pub drift_degrees: f64,
    /// Timestamp of the first read (epoch millis).
    pub base_timestamp_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            friendly_count: 12,
            refresh_interval: Duration::from_secs(2),
            drift_degrees: 0.002,
            base_timestamp_ms: 1_700_000_000_000,
        }
    }
}

/// Handle to a running feed thread.
pub struct AssetFeedHandle {
    stop_tx: mpsc::Sender<()>,
    join: Option<JoinHandle<()>>,
}

impl AssetFeedHandle {
    /// Stop the feed and wait for its thread to finish.
    pub fn close(mut self) {
        let _ = self.stop_tx.send(());
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

impl Drop for AssetFeedHandle {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawn the feed thread. The initial read is pushed immediately; further
/// refreshes follow at the configured interval until the handle is closed
/// or the loop's command channel goes away.
pub fn spawn_asset_feed(cmd_tx: mpsc::Sender<LoopCommand>, config: FeedConfig) -> AssetFeedHandle {
    let (stop_tx, stop_rx) = mpsc::channel::<()>();

    let join = std::thread::Builder::new()
        .name("geomap-asset-feed".into())
        .spawn(move || run_feed(cmd_tx, stop_rx, config))
        .expect("Failed to spawn asset feed thread");

    AssetFeedHandle {
        stop_tx,
        join: Some(join),
    }
}

fn run_feed(cmd_tx: mpsc::Sender<LoopCommand>, stop_rx: mpsc::Receiver<()>, config: FeedConfig) {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut assets = scenario::build_assets(&ScenarioConfig {
        seed: config.seed,
        friendly_count: config.friendly_count,
        base_timestamp_ms: config.base_timestamp_ms,
    });
    let mut timestamp_ms = config.base_timestamp_ms;

    tracing::info!(count = assets.len(), "asset feed started");
    if cmd_tx.send(LoopCommand::RefreshAssets(assets.clone())).is_err() {
        return;
    }

    loop {
        match stop_rx.recv_timeout(config.refresh_interval) {
            Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => {
                tracing::info!("asset feed stopped");
                return;
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }

        timestamp_ms += config.refresh_interval.as_millis() as u64;
        drift_assets(&mut rng, &mut assets, config.drift_degrees, timestamp_ms);

        if cmd_tx.send(LoopCommand::RefreshAssets(assets.clone())).is_err() {
            tracing::info!("simulation loop gone, stopping asset feed");
            return;
        }
        tracing::debug!(timestamp_ms, "asset refresh pushed");
    }
}

/// Drift the friendly population between reads: small positional wander,
/// occasional status changes, fresh last-seen stamps. Hostile positions
/// stay put, and allegiance never changes.
fn drift_assets(rng: &mut ChaCha8Rng, assets: &mut [Asset], drift: f64, timestamp_ms: u64) {
    for asset in assets.iter_mut() {
        asset.last_seen_ms = timestamp_ms;
        if asset.is_hostile() {
            continue;
        }

        asset.position.lat += rng.gen_range(-drift..=drift);
        asset.position.lon += rng.gen_range(-drift..=drift);

        // Rare status churn, weighted toward ready states.
        if rng.gen_bool(0.05) {
            asset.status = match rng.gen_range(0..6) {
                0..=2 => AssetStatus::Available,
                3 => AssetStatus::InUse,
                4 => AssetStatus::Maintenance,
                _ => AssetStatus::Offline,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The feed pushes an initial refresh immediately and stops cleanly.
    #[test]
    fn test_feed_initial_refresh_and_close() {
        let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();
        let feed = spawn_asset_feed(
            cmd_tx,
            FeedConfig {
                refresh_interval: Duration::from_secs(60),
                ..FeedConfig::default()
            },
        );

        let first = cmd_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("initial refresh should arrive promptly");
        match first {
            LoopCommand::RefreshAssets(assets) => {
                assert_eq!(assets.len(), 15); // 12 friendlies + 3 demo hostiles
            }
            other => panic!("expected RefreshAssets, got {:?}", other),
        }

        feed.close();
    }

    /// Drift never touches allegiance and leaves hostiles in place.
    #[test]
    fn test_drift_preserves_invariants() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut assets = scenario::build_assets(&ScenarioConfig::default());
        let before = assets.clone();

        drift_assets(&mut rng, &mut assets, 0.01, 1_700_000_100_000);

        for (a, b) in before.iter().zip(assets.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.allegiance, b.allegiance);
            assert_eq!(b.last_seen_ms, 1_700_000_100_000);
            if a.is_hostile() {
                assert_eq!(a.position, b.position, "hostiles must not drift");
            }
        }
    }
}
