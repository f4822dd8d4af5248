//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::types::GeoPoint;

/// One-shot events for the rendering layer, drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    /// A hostile was selected; the resolver's pick (if any) rides along
    /// so the UI can highlight it immediately.
    HostileSelected {
        asset_id: String,
        nearest_friendly_id: Option<String>,
    },
    /// A friendly source was bound, either by the resolver or manually.
    SourceBound { asset_id: String },
    /// The selection was cleared (deselect or pre-launch abort).
    SelectionCleared,
    /// Projectile launched.
    MissileAway { source: GeoPoint, target: GeoPoint },
    /// Progress reached 100.
    EngagementCompleted { hostile_id: String },
    /// Operator cancelled mid-flight. Carries the progress at the moment
    /// of cancellation; the engagement itself resets to 0.
    EngagementCancelled { progress: u8 },
    /// The engagement window elapsed before completion.
    EngagementTimedOut { progress: u8 },
}
