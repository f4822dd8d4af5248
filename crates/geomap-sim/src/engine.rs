//! Simulation engine — owns the registry and the engagement state machine.
//!
//! `SimulationEngine` processes operator commands at tick boundaries, drives
//! the progress clock, and produces `SimSnapshot`s. Invalid transition
//! attempts are silent no-ops per the engagement contract: the engine never
//! errors on operator input, it just leaves state unchanged.

use std::collections::VecDeque;

use geomap_core::asset::Asset;
use geomap_core::commands::OperatorCommand;
use geomap_core::constants::{ENGAGEMENT_TIMEOUT_TICKS, PROGRESS_COMPLETE, PROGRESS_STEP};
use geomap_core::events::UiEvent;
use geomap_core::state::SimSnapshot;
use geomap_core::types::SimTime;

use crate::engagement::EngagementState;
use crate::registry::AssetRegistry;
use crate::targeting;

/// Configuration for the progress clock.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Progress gained per tick while in flight.
    pub progress_step: u8,
    /// Absolute engagement deadline in ticks. If the window elapses before
    /// progress reaches 100, the engagement times out.
    pub timeout_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            progress_step: PROGRESS_STEP,
            timeout_ticks: ENGAGEMENT_TIMEOUT_TICKS,
        }
    }
}

/// The simulation engine. Owns all engagement state.
pub struct SimulationEngine {
    registry: AssetRegistry,
    engagement: EngagementState,
    time: SimTime,
    config: SimConfig,
    command_queue: VecDeque<OperatorCommand>,
    ui_events: Vec<UiEvent>,
}

impl SimulationEngine {
    /// Create a new engine with the given clock configuration.
    pub fn new(config: SimConfig) -> Self {
        Self {
            registry: AssetRegistry::new(),
            engagement: EngagementState::Idle,
            time: SimTime::default(),
            config,
            command_queue: VecDeque::new(),
            ui_events: Vec::new(),
        }
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = OperatorCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the registry's asset set with a fresh feed read.
    ///
    /// The swap is whole-set and happens between ticks, so engagement logic
    /// never observes a torn update. An in-flight engagement is unaffected:
    /// its positions were snapshotted at launch.
    pub fn refresh_assets(&mut self, assets: Vec<Asset>) {
        self.registry.replace_all(assets);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();
        self.advance_flight();
        self.time.advance();
        self.build_snapshot()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the engagement state.
    pub fn engagement(&self) -> &EngagementState {
        &self.engagement
    }

    /// Get a read-only reference to the asset registry.
    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single operator command.
    fn handle_command(&mut self, command: OperatorCommand) {
        match command {
            OperatorCommand::SelectHostile { asset_id } => self.select_hostile(asset_id),
            OperatorCommand::SelectSource { asset_id } => self.select_source(asset_id),
            OperatorCommand::ClearSelection => self.clear_selection(),
            OperatorCommand::Launch => self.launch(),
            OperatorCommand::Cancel => self.cancel(),
        }
    }

    /// Select a hostile as the engagement target and resolve the nearest
    /// eligible friendly source.
    ///
    /// Replaces any prior non-flight engagement; rejected while a
    /// projectile is in flight.
    fn select_hostile(&mut self, asset_id: String) {
        if matches!(self.engagement, EngagementState::InFlight { .. }) {
            tracing::debug!(asset_id, "selection rejected: engagement in flight");
            return;
        }

        let Some(hostile) = self.registry.get(&asset_id) else {
            tracing::debug!(asset_id, "selection ignored: unknown asset");
            return;
        };
        if !hostile.is_hostile() {
            tracing::debug!(asset_id, "selection ignored: not a hostile asset");
            return;
        }

        let nearest_friendly_id =
            targeting::find_nearest(hostile, self.registry.eligible_sources())
                .map(|a| a.id.clone());

        self.ui_events.push(UiEvent::HostileSelected {
            asset_id: asset_id.clone(),
            nearest_friendly_id: nearest_friendly_id.clone(),
        });

        self.engagement = match nearest_friendly_id {
            Some(friendly_id) => EngagementState::Armed {
                hostile_id: asset_id,
                friendly_id,
            },
            // No eligible source: the selection is retained but launch
            // stays unreachable until a source appears or is bound.
            None => EngagementState::Selecting {
                hostile_id: asset_id,
                nearest_friendly_id: None,
            },
        };
    }

    /// Manually bind a friendly source, overriding the resolver's pick.
    /// Re-binding within `Armed` is not a state change.
    fn select_source(&mut self, asset_id: String) {
        let hostile_id = match &self.engagement {
            EngagementState::Selecting { hostile_id, .. }
            | EngagementState::Armed { hostile_id, .. } => hostile_id.clone(),
            _ => {
                tracing::debug!(asset_id, "source bind ignored: no active selection");
                return;
            }
        };

        match self.registry.get(&asset_id) {
            Some(asset) if asset.eligible_source() => {
                self.engagement = EngagementState::Armed {
                    hostile_id,
                    friendly_id: asset_id.clone(),
                };
                self.ui_events.push(UiEvent::SourceBound { asset_id });
            }
            _ => {
                tracing::debug!(asset_id, "source bind ignored: not an eligible friendly");
            }
        }
    }

    /// Clear the selection (background map click). Also discards a
    /// terminal engagement. No-op from `Idle` and while in flight.
    fn clear_selection(&mut self) {
        match self.engagement {
            EngagementState::Idle | EngagementState::InFlight { .. } => {}
            _ => {
                self.engagement = EngagementState::Idle;
                self.ui_events.push(UiEvent::SelectionCleared);
            }
        }
    }

    /// Launch the armed engagement, snapshotting both positions from the
    /// registry at this instant.
    fn launch(&mut self) {
        let EngagementState::Armed {
            hostile_id,
            friendly_id,
        } = &self.engagement
        else {
            tracing::debug!("launch ignored: engagement not armed");
            return;
        };

        // A registry refresh may have removed either party since arming.
        let (Some(hostile), Some(friendly)) = (
            self.registry.get(hostile_id),
            self.registry.get(friendly_id),
        ) else {
            tracing::warn!(
                hostile_id,
                friendly_id,
                "launch ignored: asset no longer in registry"
            );
            return;
        };

        let source = friendly.position;
        let target = hostile.position;
        let hostile_id = hostile_id.clone();
        let friendly_id = friendly_id.clone();

        tracing::info!(hostile_id, friendly_id, "missile away");
        self.engagement = EngagementState::InFlight {
            hostile_id,
            friendly_id,
            source,
            target,
            progress: 0,
            launched_tick: self.time.tick,
        };
        self.ui_events.push(UiEvent::MissileAway { source, target });
    }

    /// Cancel: in flight this is a terminal transition; before launch it
    /// aborts the selection. Idempotent — cancelling when idle or already
    /// terminal is a no-op.
    fn cancel(&mut self) {
        match &self.engagement {
            EngagementState::InFlight { progress, .. } => {
                let progress = *progress;
                tracing::info!(progress, "engagement cancelled");
                self.engagement = EngagementState::Cancelled;
                self.ui_events.push(UiEvent::EngagementCancelled { progress });
            }
            EngagementState::Selecting { .. } | EngagementState::Armed { .. } => {
                self.engagement = EngagementState::Idle;
                self.ui_events.push(UiEvent::SelectionCleared);
            }
            _ => {}
        }
    }

    /// The progress clock: one task owning both the periodic increment and
    /// the absolute deadline.
    ///
    /// The increment is applied before the deadline check, so progress
    /// reaching 100 in the same instant the window elapses resolves to
    /// `Completed`, never `TimedOut`. Terminal transitions tear the clock
    /// down implicitly: nothing here touches a non-`InFlight` engagement,
    /// so no late tick can race a cancel.
    fn advance_flight(&mut self) {
        let EngagementState::InFlight {
            hostile_id,
            friendly_id,
            progress,
            launched_tick,
            ..
        } = &mut self.engagement
        else {
            return;
        };

        // The launching tick itself reports progress 0.
        if self.time.tick == *launched_tick {
            return;
        }

        *progress = progress.saturating_add(self.config.progress_step).min(PROGRESS_COMPLETE);

        if *progress >= PROGRESS_COMPLETE {
            let hostile_id = hostile_id.clone();
            let friendly_id = friendly_id.clone();
            tracing::info!(hostile_id, "engagement completed");
            self.engagement = EngagementState::Completed {
                hostile_id: hostile_id.clone(),
                friendly_id,
            };
            self.ui_events.push(UiEvent::EngagementCompleted { hostile_id });
        } else if self.time.tick - *launched_tick >= self.config.timeout_ticks {
            let progress = *progress;
            tracing::warn!(progress, "engagement timed out");
            self.engagement = EngagementState::TimedOut;
            self.ui_events.push(UiEvent::EngagementTimedOut { progress });
        }
    }

    /// Build the snapshot for this tick, draining pending UI events.
    fn build_snapshot(&mut self) -> SimSnapshot {
        SimSnapshot {
            time: self.time,
            assets: self.registry.iter().cloned().collect(),
            eligible_source_ids: self
                .registry
                .eligible_sources()
                .map(|a| a.id.clone())
                .collect(),
            engagement: self.engagement.view(),
            events: std::mem::take(&mut self.ui_events),
        }
    }
}
