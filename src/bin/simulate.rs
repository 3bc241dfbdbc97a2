//! Headless simulator CLI.
//!
//! Plays many runs with a scripted autopilot and reports how far it got.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # 100 one-minute runs, gap seeker
//!   cargo run --bin simulate -- -n 20 --policy idle # 20 runs, never flapping
//!   cargo run --bin simulate -- --seed 42 --json    # Reproducible, JSON saved

use flappy::simulator::{run_simulation, AutopilotPolicy, SimConfig, SimReport};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let (config, save_json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'simulate --help' for usage.");
            return ExitCode::FAILURE;
        }
    };

    if config.verbosity > 0 {
        println!("Configuration:");
        println!("  Runs:        {}", config.num_runs);
        println!("  Ticks/run:   {}", config.ticks_per_run);
        println!("  Policy:      {}", config.policy.name());
        if let Some(seed) = config.seed {
            println!("  Seed:        {}", seed);
        }
        println!();
    }

    log::info!("running {} simulations", config.num_runs);
    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if save_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = save_report(&report, &filename) {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

fn save_report(report: &SimReport, filename: &str) -> Result<(), String> {
    std::fs::write(filename, report.to_json())
        .map_err(|e| format!("failed to write {}: {}", filename, e))
}

fn parse_args(args: &[String]) -> Result<(SimConfig, bool), String> {
    let mut config = SimConfig::default();
    let mut save_json = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-n" | "--runs" => {
                config.num_runs = parse_value(arg, iter.next())?;
            }
            "-t" | "--ticks" => {
                config.ticks_per_run = parse_value(arg, iter.next())?;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_value(arg, iter.next())?);
            }
            "-p" | "--policy" => {
                let name = iter.next().ok_or(format!("{} needs a value", arg))?;
                config.policy = AutopilotPolicy::from_name(name)
                    .ok_or(format!("Unknown policy: {}", name))?;
            }
            "--json" => save_json = true,
            "-v" | "--verbose" => config.verbosity = 2,
            "-q" | "--quiet" => config.verbosity = 0,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok((config, save_json))
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or(format!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value))
}

fn print_help() {
    println!("Flappy Headless Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of runs (default: 100)");
    println!("    -t, --ticks <T>       Ticks per run, 60 per second (default: 3600)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -p, --policy <P>      idle | random | gap (default: gap)");
    println!("    -v, --verbose         Print every run");
    println!("    -q, --quiet           Summary only");
    println!("    --json                Save JSON report");
    println!("    -h, --help            Show this help");
}
