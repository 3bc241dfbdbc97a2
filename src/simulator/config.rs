//! Simulation configuration.

use super::policy::AutopilotPolicy;

/// Configuration for a simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent runs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Ticks to simulate per run (60 ticks = one second of play)
    pub ticks_per_run: u64,

    /// Who presses the flap key
    pub policy: AutopilotPolicy,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            ticks_per_run: 60 * 60,
            policy: AutopilotPolicy::GapSeeker,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small deterministic config for smoke checks.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 10,
            seed: Some(seed),
            ticks_per_run: 60 * 20,
            ..Default::default()
        }
    }
}
