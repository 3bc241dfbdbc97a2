//! Headless simulator.
//!
//! Drives the real engine without a terminal, using a scripted autopilot in
//! place of a player, to check how the physics and wall layout play out over
//! many runs.

mod config;
mod policy;
mod report;
mod runner;

pub use config::SimConfig;
pub use policy::AutopilotPolicy;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
