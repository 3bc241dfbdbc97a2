//! Integration test: headless simulator

use flappy::simulator::{run_simulation, simulate_single_run, AutopilotPolicy, SimConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn config(policy: AutopilotPolicy, ticks: u64) -> SimConfig {
    SimConfig {
        num_runs: 4,
        seed: Some(99),
        ticks_per_run: ticks,
        policy,
        verbosity: 0,
    }
}

#[test]
fn test_reports_are_reproducible_with_seed() {
    let cfg = config(AutopilotPolicy::Random { flap_chance: 0.1 }, 1200);
    let first = run_simulation(&cfg);
    let second = run_simulation(&cfg);
    assert_eq!(first.runs, second.runs);
    assert_eq!(first.num_runs, 4);
}

#[test]
fn test_every_run_uses_all_ticks() {
    let report = run_simulation(&config(AutopilotPolicy::GapSeeker, 900));
    for run in &report.runs {
        assert_eq!(run.ticks, 900);
        assert!(run.collisions <= run.revivals + 1);
    }
}

#[test]
fn test_idle_bird_never_scores() {
    // A bird that never flaps falls out long before the first wall arrives.
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let stats = simulate_single_run(&config(AutopilotPolicy::Idle, 3000), &mut rng);
    assert_eq!(stats.best_counter, 0);
    assert!(stats.revivals >= 10);
}

#[test]
fn test_json_report_round_trips_to_value() {
    let report = run_simulation(&config(AutopilotPolicy::GapSeeker, 300));
    let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(value["policy"], "gap");
    assert_eq!(value["num_runs"], 4);
}
