//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick per 100 ms.
pub const TICK_RATE: u32 = 10;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Progress clock ---

/// Progress gained per tick while a projectile is in flight (percentage points).
pub const PROGRESS_STEP: u8 = 2;

/// Progress value at which an engagement completes.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Hard ceiling on engagement duration (seconds). If the window elapses
/// before progress reaches 100, the engagement times out.
pub const ENGAGEMENT_TIMEOUT_SECS: f64 = 30.0;

/// The timeout window in ticks.
pub const ENGAGEMENT_TIMEOUT_TICKS: u64 = (ENGAGEMENT_TIMEOUT_SECS * TICK_RATE as f64) as u64;

// --- Map ---

/// Default map center latitude (downtown Los Angeles).
pub const MAP_CENTER_LAT: f64 = 34.0522;

/// Default map center longitude.
pub const MAP_CENTER_LON: f64 = -118.2437;

// --- Operating zones (scenario generation) ---

/// Los Angeles zone bounds: (lat_min, lat_max, lon_min, lon_max).
pub const ZONE_LA: (f64, f64, f64, f64) = (33.7, 34.5, -118.5, -117.5);

/// San Diego zone bounds: (lat_min, lat_max, lon_min, lon_max).
pub const ZONE_SAN_DIEGO: (f64, f64, f64, f64) = (32.5, 33.2, -117.5, -116.8);
