//! Simulation report generation.

use serde::Serialize;

/// Statistics for one simulated run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub ticks: u64,
    /// Highest counter reached before any reset.
    pub best_counter: u32,
    /// Walls that recycled, whether or not the bird was alive.
    pub recycles: u32,
    pub collisions: u32,
    pub revivals: u32,
    /// Counter on the final tick.
    pub final_counter: u32,
}

/// Aggregated results from multiple runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub policy: &'static str,
    pub num_runs: u32,
    pub ticks_per_run: u64,
    pub best_counter: u32,
    pub avg_best_counter: f64,
    pub avg_collisions: f64,
    pub avg_revivals: f64,
    /// Average seconds (at 60 ticks/s) between revivals.
    pub avg_seconds_per_life: f64,
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(policy: &'static str, ticks_per_run: u64, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = f64::from(num_runs.max(1));
        let avg = |f: fn(&RunStats) -> f64| runs.iter().map(f).sum::<f64>() / divisor;

        let avg_best_counter = avg(|r| f64::from(r.best_counter));
        let avg_collisions = avg(|r| f64::from(r.collisions));
        let avg_revivals = avg(|r| f64::from(r.revivals));
        let total_ticks: u64 = runs.iter().map(|r| r.ticks).sum();
        let total_lives: u64 = runs.iter().map(|r| u64::from(r.revivals) + 1).sum();
        let avg_seconds_per_life = if total_lives > 0 {
            total_ticks as f64 / total_lives as f64 / 60.0
        } else {
            0.0
        };

        Self {
            policy,
            num_runs,
            ticks_per_run,
            best_counter: runs.iter().map(|r| r.best_counter).max().unwrap_or(0),
            avg_best_counter,
            avg_collisions,
            avg_revivals,
            avg_seconds_per_life,
            runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Policy: {}   Runs: {}   Ticks/run: {} ({:.0}s)\n\n",
            self.policy,
            self.num_runs,
            self.ticks_per_run,
            self.ticks_per_run as f64 / 60.0
        ));

        report.push_str("── SCORES ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Best Counter:        {}\n", self.best_counter));
        report.push_str(&format!("  Avg Best Counter:    {:.2}\n", self.avg_best_counter));
        report.push('\n');

        report.push_str("── DEATHS ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Collisions:      {:.1}\n", self.avg_collisions));
        report.push_str(&format!("  Avg Revivals:        {:.1}\n", self.avg_revivals));
        report.push_str(&format!(
            "  Avg Life Length:     {:.1}s\n",
            self.avg_seconds_per_life
        ));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(best: u32, collisions: u32, revivals: u32) -> RunStats {
        RunStats {
            ticks: 600,
            best_counter: best,
            recycles: best,
            collisions,
            revivals,
            final_counter: 0,
        }
    }

    #[test]
    fn test_from_runs_aggregates() {
        let report = SimReport::from_runs("gap", 600, vec![run(4, 1, 1), run(2, 3, 3)]);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.best_counter, 4);
        assert!((report.avg_best_counter - 3.0).abs() < 1e-9);
        assert!((report.avg_collisions - 2.0).abs() < 1e-9);
        assert!((report.avg_revivals - 2.0).abs() < 1e-9);
        // 1200 ticks over 6 lives = 200 ticks per life.
        assert!((report.avg_seconds_per_life - 200.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs("idle", 10, Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.best_counter, 0);
        assert!((report.avg_best_counter - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_text_and_json() {
        let report = SimReport::from_runs("gap", 600, vec![run(4, 1, 1)]);
        let text = report.to_text();
        assert!(text.contains("Policy: gap"));
        assert!(text.contains("Best Counter:        4"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["best_counter"], 4);
        assert_eq!(json["runs"].as_array().unwrap().len(), 1);
    }
}
