#[cfg(test)]
mod tests {
    use crate::asset::Asset;
    use crate::commands::OperatorCommand;
    use crate::constants::{ENGAGEMENT_TIMEOUT_TICKS, PROGRESS_COMPLETE, PROGRESS_STEP};
    use crate::enums::*;
    use crate::events::UiEvent;
    use crate::state::SimSnapshot;
    use crate::types::{GeoPoint, SimTime};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_allegiance_serde() {
        let variants = vec![Allegiance::Friendly, Allegiance::Hostile];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: Allegiance = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_asset_status_serde() {
        let variants = vec![
            AssetStatus::Available,
            AssetStatus::InUse,
            AssetStatus::Maintenance,
            AssetStatus::Offline,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: AssetStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_engagement_phase_serde() {
        let variants = vec![
            EngagementPhase::Idle,
            EngagementPhase::Selecting,
            EngagementPhase::Armed,
            EngagementPhase::InFlight,
            EngagementPhase::Completed,
            EngagementPhase::Cancelled,
            EngagementPhase::TimedOut,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EngagementPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_terminal_phases() {
        assert!(EngagementPhase::Completed.is_terminal());
        assert!(EngagementPhase::Cancelled.is_terminal());
        assert!(EngagementPhase::TimedOut.is_terminal());
        assert!(!EngagementPhase::Idle.is_terminal());
        assert!(!EngagementPhase::Selecting.is_terminal());
        assert!(!EngagementPhase::Armed.is_terminal());
        assert!(!EngagementPhase::InFlight.is_terminal());
    }

    /// Verify OperatorCommand round-trips through serde (tagged union).
    #[test]
    fn test_operator_command_serde() {
        let commands = vec![
            OperatorCommand::SelectHostile {
                asset_id: "enemy-1".into(),
            },
            OperatorCommand::SelectSource {
                asset_id: "drone-7".into(),
            },
            OperatorCommand::ClearSelection,
            OperatorCommand::Launch,
            OperatorCommand::Cancel,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: OperatorCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since OperatorCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify UiEvent round-trips through serde.
    #[test]
    fn test_ui_event_serde() {
        let events = vec![
            UiEvent::HostileSelected {
                asset_id: "enemy-1".into(),
                nearest_friendly_id: Some("drone-7".into()),
            },
            UiEvent::MissileAway {
                source: GeoPoint::new(34.05, -118.24),
                target: GeoPoint::new(34.06, -118.25),
            },
            UiEvent::EngagementCancelled { progress: 40 },
            UiEvent::EngagementTimedOut { progress: 96 },
            UiEvent::SelectionCleared,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: UiEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify Asset round-trips through serde.
    #[test]
    fn test_asset_serde() {
        let asset = Asset {
            id: "drone-1".into(),
            name: "Drone-LA-101".into(),
            kind: AssetKind::Drone,
            allegiance: Allegiance::Friendly,
            status: AssetStatus::Available,
            position: GeoPoint::new(34.0522, -118.2437),
            last_seen_ms: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&asset).unwrap();
        let back: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(asset, back);
    }

    /// Verify SimSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = SimSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.engagement.phase, back.engagement.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify source eligibility: friendly + Available/InUse only.
    #[test]
    fn test_eligible_source() {
        let mut asset = Asset {
            id: "a".into(),
            name: "Sensor-LA-200".into(),
            kind: AssetKind::Sensor,
            allegiance: Allegiance::Friendly,
            status: AssetStatus::Available,
            position: GeoPoint::default(),
            last_seen_ms: 0,
        };
        assert!(asset.eligible_source());

        asset.status = AssetStatus::InUse;
        assert!(asset.eligible_source());

        asset.status = AssetStatus::Maintenance;
        assert!(!asset.eligible_source());

        asset.status = AssetStatus::Offline;
        assert!(!asset.eligible_source());

        asset.status = AssetStatus::Available;
        asset.allegiance = Allegiance::Hostile;
        assert!(!asset.eligible_source());
    }

    /// Verify GeoPoint geometry calculations.
    #[test]
    fn test_geo_point_distance() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    /// Planar metric on real map coordinates: the first friendly is
    /// ~0.0118 degrees out, the second ~0.0224.
    #[test]
    fn test_geo_point_distance_scenario() {
        let hostile = GeoPoint::new(34.06, -118.25);
        let near = GeoPoint::new(34.0522, -118.2437);
        let far = GeoPoint::new(34.05, -118.23);
        assert!((hostile.distance_to(&near) - 0.0118).abs() < 1e-3);
        assert!((hostile.distance_to(&far) - 0.0224).abs() < 1e-3);
        assert!(hostile.distance_to(&near) < hostile.distance_to(&far));
    }

    #[test]
    fn test_geo_point_lerp() {
        let a = GeoPoint::new(34.0, -118.0);
        let b = GeoPoint::new(35.0, -117.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        let mid = a.lerp(&b, 0.5);
        assert!((mid.lat - 34.5).abs() < 1e-10);
        assert!((mid.lon + 117.5).abs() < 1e-10);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..10 {
            time.advance();
        }
        assert_eq!(time.tick, 10);
        // 10 ticks at 10Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    /// The derived timeout window: 30 seconds at 10Hz.
    #[test]
    fn test_timeout_window() {
        assert_eq!(ENGAGEMENT_TIMEOUT_TICKS, 300);
        // Nominal flight: 100 / 2 = 50 ticks, well inside the window.
        assert!(
            (PROGRESS_COMPLETE as u64 / PROGRESS_STEP as u64) < ENGAGEMENT_TIMEOUT_TICKS,
            "Default flight must complete before the timeout window"
        );
    }
}
