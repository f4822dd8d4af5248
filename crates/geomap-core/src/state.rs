//! Simulation state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::enums::EngagementPhase;
use crate::events::UiEvent;
use crate::types::{GeoPoint, SimTime};

/// Complete state handed to the rendering layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    /// The registry's current asset set, in insertion order. Always a
    /// consistent read: refreshes are applied atomically between ticks.
    pub assets: Vec<Asset>,
    /// Ids of friendlies eligible as launch sources, for the selection
    /// dropdown. Same order as `assets`.
    pub eligible_source_ids: Vec<String>,
    pub engagement: EngagementView,
    /// Events emitted since the previous snapshot.
    pub events: Vec<UiEvent>,
}

/// Engagement status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngagementView {
    pub phase: EngagementPhase,
    /// The targeted hostile, while a selection or engagement exists.
    pub hostile_id: Option<String>,
    /// The resolver's pick (or manual override) for highlighting.
    pub nearest_friendly_id: Option<String>,
    /// Progress percentage in [0, 100]. Zero outside `InFlight` except
    /// `Completed`, which reports 100.
    pub progress: u8,
    /// Launch-time source position (snapshotted, not live).
    pub source: Option<GeoPoint>,
    /// Launch-time target position (snapshotted, not live).
    pub target: Option<GeoPoint>,
    /// Interpolated projectile position for animation, while in flight.
    pub missile: Option<GeoPoint>,
    /// Tick at which the projectile launched.
    pub launched_tick: Option<u64>,
}
