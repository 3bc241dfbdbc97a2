//! Runs the engine headless under an autopilot.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::config::GameConfig;
use crate::core::engine::FlappyEngine;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run every configured run and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(u64::from(run_idx))),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - best {}, collisions {}, revivals {}",
                run_idx + 1,
                config.num_runs,
                stats.best_counter,
                stats.collisions,
                stats.revivals
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(config.policy.name(), config.ticks_per_run, all_runs)
}

/// Simulate one run of `config.ticks_per_run` ticks.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut engine = FlappyEngine::new(GameConfig::load(), rng);
    let mut stats = RunStats::default();

    for _ in 0..config.ticks_per_run {
        let snapshot = engine.snapshot();
        let flap = !snapshot.dead && config.policy.wants_flap(&snapshot, rng);

        // The counter is cleared by a revival, so sample it first.
        let before = engine.counter;
        let outcome = engine.tick(flap, rng);

        if outcome.recycled {
            stats.recycles += 1;
            stats.best_counter = stats.best_counter.max(before + 1);
        }
        if outcome.collided {
            stats.collisions += 1;
        }
        if outcome.revived {
            stats.revivals += 1;
        }
    }

    stats.ticks = engine.ticks;
    stats.final_counter = engine.counter;
    stats
}
