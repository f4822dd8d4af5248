//! Runtime shell for the GEOMAP simulation.
//!
//! Hosts the simulation loop on a dedicated thread, bridges operator
//! commands and feed refreshes to it over channels, and keeps the latest
//! snapshot available for synchronous polling by a rendering layer.

pub mod feed;
pub mod sim_loop;
pub mod state;
