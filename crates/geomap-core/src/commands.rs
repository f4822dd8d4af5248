//! Operator commands sent from the interaction surface to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary. Invalid transitions are silent no-ops, never errors.

use serde::{Deserialize, Serialize};

/// All possible operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    /// Select a hostile asset as the engagement target (marker click).
    SelectHostile { asset_id: String },
    /// Manually bind a friendly asset as the launch source, overriding
    /// the resolver's nearest pick.
    SelectSource { asset_id: String },
    /// Clear the current selection (background map click). Also discards
    /// a terminal engagement.
    ClearSelection,
    /// Launch the armed engagement.
    Launch,
    /// Cancel the in-flight engagement, or abort a pre-launch selection.
    Cancel,
}
