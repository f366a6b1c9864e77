//! CLI for the sort benchmark.
//!
//! Usage:
//!   sort-bench            # Time each algorithm once on a fresh random array
//!   sort-bench --table    # Repeated, interleaved runs with statistics
//!   sort-bench --verify   # Check every variant against the std sort
//!   sort-bench --list     # List available algorithms

use std::process::ExitCode;

use clap::Parser;
use sort_bench::config::BenchConfig;
use sort_bench::registry::{build_registry, AlgorithmRegistry};
use sort_bench::utils::runner;
use sort_bench::{tui, BenchError};

#[derive(Debug, Parser)]
#[command(
    name = "sort-bench",
    version,
    about = "Times classic sorting algorithms on a random integer array"
)]
struct Cli {
    /// List available algorithms and their variants
    #[arg(short, long)]
    list: bool,

    /// Verify every variant against the standard library sort
    #[arg(long)]
    verify: bool,

    /// Measure each variant repeatedly in randomized order and print statistics
    #[arg(short, long)]
    table: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout keeps the report format
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "benchmark aborted");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), BenchError> {
    let registry = build_registry();

    if cli.list {
        tui::print_available_algorithms(&registry);
        return Ok(());
    }

    if cli.verify {
        return verify_all(&registry);
    }

    let config = BenchConfig::default();
    let data = runner::generate_dataset(&config);

    if cli.table {
        tui::print_header();
        for algo in registry.all() {
            tui::print_algo_info_box(algo.as_ref());
            let results = runner::run_algorithm_table(algo.as_ref(), &data, &config)?;
            tui::print_results_table(&results, data.len());
        }
        println!("Note: Speedup and Rel. Error are relative to the first variant.");
        return Ok(());
    }

    tui::print_dataset_banner(data.len());
    for algo in registry.all() {
        let timings = runner::run_algorithm_once(algo.as_ref(), &data)?;
        tui::print_pass_timings(&timings);
    }

    Ok(())
}

fn verify_all(registry: &AlgorithmRegistry) -> Result<(), BenchError> {
    for algo in registry.all() {
        algo.verify()?;
        tracing::info!(algorithm = algo.name(), "verification passed");
        println!("✅ Algorithm '{}' passed verification", algo.name());
    }
    Ok(())
}
