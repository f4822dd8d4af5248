//! Simulation engine for GEOMAP.
//!
//! Owns the asset registry and the single-engagement state machine,
//! advances the progress clock at a fixed tick rate, and produces
//! SimSnapshots for the rendering layer. Completely headless,
//! enabling deterministic testing.

pub mod engagement;
pub mod engine;
pub mod registry;
pub mod scenario;
pub mod targeting;

pub use engine::SimulationEngine;
pub use geomap_core as core;
