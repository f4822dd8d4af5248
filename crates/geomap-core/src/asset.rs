//! The asset record — any tracked friendly or hostile object on the map.

use serde::{Deserialize, Serialize};

use crate::enums::{Allegiance, AssetKind, AssetStatus};
use crate::types::GeoPoint;

/// A positioned asset as delivered by the external device feed.
///
/// The simulation treats assets as read-only input for a given tick:
/// updates arrive only as whole-set refreshes through the registry.
/// `id` is unique within a refresh and stable across refreshes;
/// `allegiance` never changes within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    /// Display label, e.g. "Drone-LA-412".
    pub name: String,
    pub kind: AssetKind,
    pub allegiance: Allegiance,
    pub status: AssetStatus,
    pub position: GeoPoint,
    /// Epoch milliseconds of the last position update, per the feed.
    pub last_seen_ms: u64,
}

impl Asset {
    /// Whether this asset can serve as the source of an engagement:
    /// friendly and in an eligible status.
    pub fn eligible_source(&self) -> bool {
        self.allegiance == Allegiance::Friendly && self.status.eligible_source()
    }

    pub fn is_hostile(&self) -> bool {
        self.allegiance == Allegiance::Hostile
    }
}
