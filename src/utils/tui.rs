//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use std::time::Duration;

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::runner::PassTiming;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print the dataset announcement line of the single-pass report
pub fn print_dataset_banner(size: usize) {
    println!("The array has {} elements", size);
}

/// Format one line of the single-pass report, e.g. `QuickSort:\t 612.3µs`
pub fn format_pass_timing(timing: &PassTiming) -> String {
    format!("{}:\t {:?}", timing.label, timing.elapsed)
}

/// Print the single-pass report lines
pub fn print_pass_timings(timings: &[PassTiming]) {
    for timing in timings {
        println!("{}", format_pass_timing(timing));
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", algo.available_variants().join(", "));

    let content_width = [
        name_line.chars().count(),
        cat_line.chars().count(),
        desc_line.chars().count(),
        var_line.chars().count(),
    ]
    .into_iter()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);
    let row = |s: &str| {
        println!(
            "│ {:<width$} │",
            truncate(s, content_width),
            width = content_width
        )
    };

    println!("┌{}┐", border);
    row(&name_line);
    row(&cat_line);
    row(desc_line);
    println!("├{}┤", border);
    row(&var_line);
    println!("└{}┘", border);
    println!();
}

/// Relative divergence of `value` from `baseline`
fn relative_error(value: Option<f64>, baseline: Option<f64>) -> f64 {
    match (value, baseline) {
        (Some(res), Some(base)) => {
            let diff = (res - base).abs();
            if base.abs() > 1e-9 {
                diff / base.abs()
            } else {
                diff
            }
        }
        _ => 0.0,
    }
}

/// Coefficient of variation, std-dev over mean
fn coefficient_of_variation(result: &BenchmarkResult) -> f64 {
    let avg_ns = result.avg_time.as_nanos() as f64;
    if avg_ns > 0.0 {
        result.std_dev.as_nanos() as f64 / avg_ns
    } else {
        0.0
    }
}

fn format_duration(d: Duration) -> String {
    format!("{:.2?}", d)
}

/// Print results table for one dataset. Speedup and error are relative to the first row.
pub fn print_results_table(results: &[BenchmarkResult], size: usize) {
    let Some(baseline) = results.first() else {
        return;
    };

    let term_width = get_term_width();
    // 12*4 + 9*2 + 10 = 76 chars of columns, 7 separators, 2 indent
    let fixed_width = 85;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 76 + 7;

    let baseline_time = baseline.avg_time.as_nanos() as f64;
    let runs = baseline.runs;

    println!("  Size: {} ({} runs)", size, runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Median",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg_ns = result.avg_time.as_nanos() as f64;
        let speedup = if avg_ns > 0.0 { baseline_time / avg_ns } else { 0.0 };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&result.name, variant_col_width),
            format_duration(result.avg_time),
            format_duration(result.median_time),
            format_duration(result.min_time),
            format_duration(result.max_time),
            speedup,
            coefficient_of_variation(result) * 100.0,
            relative_error(result.result_sample, baseline.result_sample),
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Sort-Bench ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
        println!("  {:<20} variants: {}", "", algo.available_variants().join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("quicksort", 20), "quicksort");
        assert_eq!(truncate("insertion_sort", 8), "inser...");
        assert_eq!(truncate("µµµµµ", 5), "µµµµµ");
    }

    #[test]
    fn test_format_pass_timing() {
        let line = format_pass_timing(&PassTiming {
            label: "HeapSort",
            elapsed: Duration::from_micros(1500),
        });
        assert_eq!(line, "HeapSort:\t 1.5ms");
    }

    #[test]
    fn test_relative_error() {
        assert_eq!(relative_error(Some(10.0), Some(10.0)), 0.0);
        assert_eq!(relative_error(Some(11.0), Some(10.0)), 0.1);
        assert_eq!(relative_error(None, Some(10.0)), 0.0);
        assert_eq!(relative_error(Some(0.5), Some(0.0)), 0.5);
    }
}
