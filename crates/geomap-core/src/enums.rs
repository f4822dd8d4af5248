//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Friendly vs. hostile classification, fixed for an asset's lifetime
/// within a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Allegiance {
    #[default]
    Friendly,
    Hostile,
}

/// Operational status of an asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    /// Idle and ready for tasking.
    #[default]
    Available,
    /// Currently tasked, but still a valid engagement source.
    InUse,
    /// Undergoing maintenance; not a valid engagement source.
    Maintenance,
    /// Not reporting; not a valid engagement source.
    Offline,
}

/// Asset category. Informational only — no behavior depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    #[default]
    Drone,
    Sensor,
    Camera,
    Vehicle,
}

/// Engagement lifecycle phase, as exposed to the rendering layer.
///
/// The full state machine (with per-state payloads) lives in the sim crate;
/// this tag is the serializable projection of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementPhase {
    /// No selection, no engagement.
    #[default]
    Idle,
    /// Hostile selected, no launch source bound yet.
    Selecting,
    /// Hostile selected and a friendly source bound; ready to launch.
    Armed,
    /// Projectile in transit, progress advancing.
    InFlight,
    /// Progress reached 100.
    Completed,
    /// Cancelled by the operator mid-flight.
    Cancelled,
    /// The engagement window elapsed before progress reached 100.
    TimedOut,
}

impl AssetStatus {
    /// Whether an asset in this status may serve as an engagement source.
    pub fn eligible_source(&self) -> bool {
        matches!(self, AssetStatus::Available | AssetStatus::InUse)
    }
}

impl EngagementPhase {
    /// Terminal phases are discarded on the next selection or deselect.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EngagementPhase::Completed | EngagementPhase::Cancelled | EngagementPhase::TimedOut
        )
    }
}
