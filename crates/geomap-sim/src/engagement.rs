//! Engagement state machine — the lifecycle of a single targeting interaction.
//!
//! Tagged-state representation: each variant carries only the fields valid
//! in that state, so partially initialized engagement data cannot exist.
//! At most one engagement exists at a time; terminal variants are discarded
//! on the next selection or deselect.

use geomap_core::constants::PROGRESS_COMPLETE;
use geomap_core::enums::EngagementPhase;
use geomap_core::state::EngagementView;
use geomap_core::types::GeoPoint;

/// The engagement lifecycle, from selection through a terminal outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EngagementState {
    /// No selection active.
    #[default]
    Idle,
    /// A hostile is selected. `nearest_friendly_id` is the resolver's pick;
    /// `None` means no eligible source existed and launch is unreachable.
    Selecting {
        hostile_id: String,
        nearest_friendly_id: Option<String>,
    },
    /// A hostile is selected and a friendly source is bound.
    Armed {
        hostile_id: String,
        friendly_id: String,
    },
    /// Projectile in transit. Positions are snapshotted at launch and do
    /// not track the live assets.
    InFlight {
        hostile_id: String,
        friendly_id: String,
        source: GeoPoint,
        target: GeoPoint,
        progress: u8,
        launched_tick: u64,
    },
    /// Progress reached 100.
    Completed {
        hostile_id: String,
        friendly_id: String,
    },
    /// Cancelled by the operator mid-flight. Progress and positions reset.
    Cancelled,
    /// The engagement window elapsed before completion. Progress and
    /// positions reset; the pre-reset progress is reported via UiEvent.
    TimedOut,
}

impl EngagementState {
    /// The serializable phase tag for this state.
    pub fn phase(&self) -> EngagementPhase {
        match self {
            EngagementState::Idle => EngagementPhase::Idle,
            EngagementState::Selecting { .. } => EngagementPhase::Selecting,
            EngagementState::Armed { .. } => EngagementPhase::Armed,
            EngagementState::InFlight { .. } => EngagementPhase::InFlight,
            EngagementState::Completed { .. } => EngagementPhase::Completed,
            EngagementState::Cancelled => EngagementPhase::Cancelled,
            EngagementState::TimedOut => EngagementPhase::TimedOut,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase().is_terminal()
    }

    /// The targeted hostile's id, while one is bound.
    pub fn hostile_id(&self) -> Option<&str> {
        match self {
            EngagementState::Selecting { hostile_id, .. }
            | EngagementState::Armed { hostile_id, .. }
            | EngagementState::InFlight { hostile_id, .. }
            | EngagementState::Completed { hostile_id, .. } => Some(hostile_id),
            _ => None,
        }
    }

    /// The bound (or resolver-picked) friendly source id.
    pub fn friendly_id(&self) -> Option<&str> {
        match self {
            EngagementState::Selecting {
                nearest_friendly_id,
                ..
            } => nearest_friendly_id.as_deref(),
            EngagementState::Armed { friendly_id, .. }
            | EngagementState::InFlight { friendly_id, .. }
            | EngagementState::Completed { friendly_id, .. } => Some(friendly_id),
            _ => None,
        }
    }

    /// Current progress percentage. Zero outside flight; a completed
    /// engagement reports 100.
    pub fn progress(&self) -> u8 {
        match self {
            EngagementState::InFlight { progress, .. } => *progress,
            EngagementState::Completed { .. } => PROGRESS_COMPLETE,
            _ => 0,
        }
    }

    /// Interpolated projectile position for animation, while in flight.
    pub fn missile_position(&self) -> Option<GeoPoint> {
        match self {
            EngagementState::InFlight {
                source,
                target,
                progress,
                ..
            } => Some(source.lerp(target, *progress as f64 / PROGRESS_COMPLETE as f64)),
            _ => None,
        }
    }

    /// Project this state into its display view.
    pub fn view(&self) -> EngagementView {
        let (source, target, launched_tick) = match self {
            EngagementState::InFlight {
                source,
                target,
                launched_tick,
                ..
            } => (Some(*source), Some(*target), Some(*launched_tick)),
            _ => (None, None, None),
        };

        EngagementView {
            phase: self.phase(),
            hostile_id: self.hostile_id().map(str::to_owned),
            nearest_friendly_id: self.friendly_id().map(str::to_owned),
            progress: self.progress(),
            source,
            target,
            missile: self.missile_position(),
            launched_tick,
        }
    }
}
