//! Scenario asset factories — seeded population of the operating zones.
//!
//! Stands in for the first read of the external device feed: a friendly
//! population spread across the LA and San Diego zones plus a fixed set of
//! demo hostiles near the map center. Same seed, same asset set.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use geomap_core::asset::Asset;
use geomap_core::constants::{MAP_CENTER_LAT, MAP_CENTER_LON, ZONE_LA, ZONE_SAN_DIEGO};
use geomap_core::enums::{Allegiance, AssetKind, AssetStatus};
use geomap_core::types::GeoPoint;

/// Configuration for scenario generation.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioConfig {
    /// RNG seed for determinism. Same seed = same asset set.
    pub seed: u64,
    /// Number of friendly assets to generate.
    pub friendly_count: usize,
    /// Timestamp stamped onto every generated asset (epoch millis).
    pub base_timestamp_ms: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            friendly_count: 12,
            base_timestamp_ms: 1_700_000_000_000,
        }
    }
}

/// Build the full scenario asset set: generated friendlies followed by the
/// fixed demo hostiles, in that insertion order.
pub fn build_assets(config: &ScenarioConfig) -> Vec<Asset> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut assets = Vec::with_capacity(config.friendly_count + 3);

    for i in 0..config.friendly_count {
        assets.push(generate_friendly(&mut rng, i, config.base_timestamp_ms));
    }
    assets.extend(demo_hostiles(config.base_timestamp_ms));
    assets
}

/// Generate one friendly asset with a random kind, zone, and status.
fn generate_friendly(rng: &mut ChaCha8Rng, index: usize, timestamp_ms: u64) -> Asset {
    // LA is the primary operating area.
    let (zone_tag, bounds) = if rng.gen_bool(0.7) {
        ("LA", ZONE_LA)
    } else {
        ("SD", ZONE_SAN_DIEGO)
    };

    let kind = match rng.gen_range(0..4) {
        0 => AssetKind::Drone,
        1 => AssetKind::Sensor,
        2 => AssetKind::Camera,
        _ => AssetKind::Vehicle,
    };

    // Most of the fleet is ready for tasking.
    let status = match rng.gen_range(0..6) {
        0..=2 => AssetStatus::Available,
        3 => AssetStatus::InUse,
        4 => AssetStatus::Maintenance,
        _ => AssetStatus::Offline,
    };

    Asset {
        id: format!("friendly-{}", index + 1),
        name: format!("{:?}-{}-{}", kind, zone_tag, rng.gen_range(100..1000)),
        kind,
        allegiance: Allegiance::Friendly,
        status,
        position: random_point(rng, bounds),
        last_seen_ms: timestamp_ms,
    }
}

/// The three fixed demo hostiles, offset from the map center.
pub fn demo_hostiles(timestamp_ms: u64) -> Vec<Asset> {
    let hostile = |id: &str, name: &str, kind, dlat: f64, dlon: f64| Asset {
        id: id.to_owned(),
        name: name.to_owned(),
        kind,
        allegiance: Allegiance::Hostile,
        status: AssetStatus::Offline,
        position: GeoPoint::new(MAP_CENTER_LAT + dlat, MAP_CENTER_LON + dlon),
        last_seen_ms: timestamp_ms,
    };

    vec![
        hostile("enemy-1", "Enemy-Alpha", AssetKind::Drone, 0.01, 0.01),
        hostile("enemy-2", "Enemy-Beta", AssetKind::Sensor, -0.01, -0.01),
        hostile("enemy-3", "Enemy-Gamma", AssetKind::Camera, 0.005, 0.005),
    ]
}

/// Uniform random point within a (lat_min, lat_max, lon_min, lon_max) box,
/// rounded to 6 decimals the way the feed reports positions.
fn random_point(rng: &mut ChaCha8Rng, bounds: (f64, f64, f64, f64)) -> GeoPoint {
    let (lat_min, lat_max, lon_min, lon_max) = bounds;
    let round6 = |v: f64| (v * 1e6).round() / 1e6;
    GeoPoint::new(
        round6(rng.gen_range(lat_min..lat_max)),
        round6(rng.gen_range(lon_min..lon_max)),
    )
}
