//! Auditable strategy comparison harness.
//!
//! Uses `std::time::Instant` for wall-clock timing, NOT Criterion.
//! Emits a versioned `strategy_report_v1` JSON artifact to
//! `target/bench_reports/` with one row per scenario × strategy.
//!
//! Run via `cargo bench --bench comparison_report`.

// Numeric casts in timing harness are intentional and benign:
// - u128→f64 for microseconds (precision loss negligible at μs scale)
// - usize→f64 and f64→usize for percentile indexing (non-negative, bounded)
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

use std::fs;
use std::time::Instant;

use serde::Serialize;

use fanout_benchmarks::{
    scenario_exhaustion, scenario_narrow_deep, scenario_random, scenario_wide_shallow, Scenario,
};

// ---------------------------------------------------------------------------
// Report schema
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct BenchReport {
    version: &'static str,
    timestamp_utc: String,
    machine: MachineInfo,
    definitions: Definitions,
    results: Vec<BenchResult>,
}

#[derive(Serialize)]
struct MachineInfo {
    os: &'static str,
    arch: &'static str,
    hardware_threads: usize,
}

/// Pin definitions so future readers know what the numbers mean.
#[derive(Serialize)]
struct Definitions {
    /// What one iteration measures.
    iteration_definition: &'static str,
    /// How p95 is computed.
    p95_method: &'static str,
    /// Number of warmup iterations before measurement.
    warmup_iterations: usize,
    /// Number of timed iterations.
    timed_iterations: usize,
}

#[derive(Serialize)]
struct BenchResult {
    name: String,
    scenario: String,
    strategy: String,
    iterations: usize,
    mean_us: f64,
    p50_us: f64,
    p95_us: f64,
    min_us: f64,
    max_us: f64,
    solution: SolutionInfo,
}

#[derive(Serialize)]
struct SolutionInfo {
    found: bool,
    path_cost: Option<u32>,
}

// ---------------------------------------------------------------------------
// Timing helpers
// ---------------------------------------------------------------------------

const WARMUP_ITERATIONS: usize = 3;
const TIMED_ITERATIONS: usize = 30;

fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = (pct / 100.0 * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn statistics(durations_us: &mut [f64]) -> (f64, f64, f64, f64, f64) {
    durations_us.sort_by(f64::total_cmp);
    let sum: f64 = durations_us.iter().sum();
    let mean = sum / durations_us.len() as f64;
    let p50 = percentile(durations_us, 50.0);
    let p95 = percentile(durations_us, 95.0);
    let min = durations_us.first().copied().unwrap_or(0.0);
    let max = durations_us.last().copied().unwrap_or(0.0);
    (mean, p50, p95, min, max)
}

// ---------------------------------------------------------------------------
// Scenario runner
// ---------------------------------------------------------------------------

fn run_scenario_benchmarks(scenario: &Scenario) -> Vec<BenchResult> {
    let mut results = Vec::new();

    for strategy in fanout_benchmarks::strategy_roster() {
        for _ in 0..WARMUP_ITERATIONS {
            let _ = strategy.search(&scenario.problem);
        }

        let mut durations_us = Vec::with_capacity(TIMED_ITERATIONS);
        let mut last_solution = None;
        for _ in 0..TIMED_ITERATIONS {
            let start = Instant::now();
            let solution = strategy.search(&scenario.problem);
            let elapsed = start.elapsed();
            durations_us.push(elapsed.as_micros() as f64);
            last_solution = solution;
        }

        let (mean, p50, p95, min, max) = statistics(&mut durations_us);
        results.push(BenchResult {
            name: format!("{}/{}", scenario.name, strategy.name()),
            scenario: scenario.name.to_string(),
            strategy: strategy.name().to_string(),
            iterations: TIMED_ITERATIONS,
            mean_us: mean,
            p50_us: p50,
            p95_us: p95,
            min_us: min,
            max_us: max,
            solution: SolutionInfo {
                found: last_solution.is_some(),
                path_cost: last_solution.as_ref().map(|node| node.path_cost()),
            },
        });
    }

    results
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let scenarios = vec![
        scenario_wide_shallow(),
        scenario_narrow_deep(),
        scenario_exhaustion(),
        scenario_random(17),
    ];

    let mut all_results = Vec::new();
    for scenario in &scenarios {
        eprintln!("Benchmarking scenario: {} ...", scenario.name);
        let results = run_scenario_benchmarks(scenario);
        for r in &results {
            eprintln!(
                "  {}: mean={:.0}us p50={:.0}us p95={:.0}us",
                r.name, r.mean_us, r.p50_us, r.p95_us,
            );
        }
        all_results.extend(results);
    }

    let report = BenchReport {
        version: "strategy_report_v1",
        timestamp_utc: {
            let since_epoch = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default();
            format!("epoch:{}", since_epoch.as_secs())
        },
        machine: MachineInfo {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            hardware_threads: std::thread::available_parallelism()
                .map_or(1, std::num::NonZeroUsize::get),
        },
        definitions: Definitions {
            iteration_definition: "One iteration is a full strategy.search() call on a fresh \
                status: fan-out, exploration, and thread join all included. Concurrent \
                strategies may expand different node counts per iteration; the scenario \
                problem itself is reused unchanged.",
            p95_method: "Sort all iteration durations ascending, take value at index \
                round(0.95 * (N-1)) where N = timed_iterations.",
            warmup_iterations: WARMUP_ITERATIONS,
            timed_iterations: TIMED_ITERATIONS,
        },
        results: all_results,
    };

    // Write to target/bench_reports/
    let report_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../target/bench_reports");
    fs::create_dir_all(report_dir).expect("create bench_reports dir");

    let report_path = format!("{report_dir}/strategy_report_v1_latest.json");
    let json = serde_json::to_string_pretty(&report).expect("serialize report");
    fs::write(&report_path, &json).expect("write report");

    eprintln!("\nReport written to: {report_path}");
    eprintln!(
        "({} results across {} scenarios)",
        report.results.len(),
        scenarios.len()
    );
}
