use std::fmt::Write;
use std::time::Instant;

use log::debug;
use serde::Serialize;

use sort_strategies_rs::{sort_with, SortAlgorithm};
use sort_test_tools::patterns::Pattern;

const PRECISION: usize = 20;

/// Timings of one (algorithm, pattern, size) triple, in seconds.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunStats {
    pub algorithm: String,
    pub pattern: String,
    pub len: usize,
    pub iterations: usize,
    pub sorted: bool,
    pub best: f64,
    pub average: f64,
    pub worst: f64,
}

/// Sorts a fresh `pattern` input of `len` elements `iterations` times and tracks best, average and
/// worst wall-clock time. Stops early after the first run that does not produce ascending order.
pub fn measure(
    algorithm: SortAlgorithm,
    pattern: Pattern,
    len: usize,
    iterations: usize,
    seed: u64,
) -> RunStats {
    let mut best = f64::INFINITY;
    let mut worst = 0.0f64;
    let mut total = 0.0;
    let mut runs = 0;
    let mut sorted = true;

    for iteration in 0..iterations {
        debug!("\tIteration: {iteration}");

        let mut v = pattern.generate(len, seed.wrapping_add(iteration as u64));

        let start = Instant::now();
        sort_with(&mut v, |a, b| a > b, algorithm);
        let time = start.elapsed().as_secs_f64();

        total += time;
        runs += 1;
        best = best.min(time);
        worst = worst.max(time);

        sorted = v.windows(2).all(|w| w[0] <= w[1]);
        if !sorted {
            break;
        }
    }

    RunStats {
        algorithm: algorithm.name().to_owned(),
        pattern: pattern.label().to_owned(),
        len,
        iterations: runs,
        sorted,
        best,
        average: if runs == 0 { 0.0 } else { total / runs as f64 },
        worst,
    }
}

/// File name of the per-algorithm report, `Bubble Sort` becomes `Bubble_Sort.txt`.
pub fn report_file_name(algorithm: SortAlgorithm) -> String {
    format!("{}.txt", algorithm.name().replace(' ', "_"))
}

/// Renders one triple as a star framed header followed by the timings.
pub fn format_run(stats: &RunStats) -> String {
    let digits = stats.len.to_string().len();
    let width = if digits > stats.pattern.len() {
        15 + digits
    } else {
        24 + stats.pattern.len()
    };

    let mut out = String::new();
    let separator = "*".repeat(width);
    let framed = |text: String| format!("{text:<pad$}*\n", pad = width - 1);

    out.push_str(&separator);
    out.push('\n');
    out.push_str(&framed(format!("* {}", stats.algorithm)));
    out.push_str(&framed(format!("* Sort type: {}", stats.pattern)));
    out.push_str(&framed(format!("* Size of the vector: {}", stats.len)));
    out.push_str(&separator);
    out.push('\n');

    let _ = writeln!(
        out,
        "{}",
        if stats.sorted {
            "Sorted successfully"
        } else {
            "Sorting failed"
        }
    );
    let _ = writeln!(out, "Best time:          {:.PRECISION$} seconds", stats.best);
    let _ = writeln!(out, "Worst time:         {:.PRECISION$} seconds", stats.worst);
    let _ = writeln!(out, "Average time:       {:.PRECISION$} seconds", stats.average);
    out.push_str("\n\n");
    out
}

#[derive(Clone, Debug, PartialEq)]
struct ComparisonEntry {
    pattern: String,
    len: usize,
    best: f64,
    best_name: String,
    average: f64,
    average_name: String,
    worst: f64,
    worst_name: String,
}

/// Which algorithm had the best time, the best average and the worst time per (pattern, size).
#[derive(Clone, Debug, Default)]
pub struct Comparison {
    entries: Vec<ComparisonEntry>,
}

impl Comparison {
    pub fn record(&mut self, stats: &RunStats) {
        let existing = self
            .entries
            .iter_mut()
            .find(|e| e.pattern == stats.pattern && e.len == stats.len);

        let Some(entry) = existing else {
            self.entries.push(ComparisonEntry {
                pattern: stats.pattern.clone(),
                len: stats.len,
                best: stats.best,
                best_name: stats.algorithm.clone(),
                average: stats.average,
                average_name: stats.algorithm.clone(),
                worst: stats.worst,
                worst_name: stats.algorithm.clone(),
            });
            return;
        };

        if stats.best < entry.best {
            entry.best = stats.best;
            entry.best_name = stats.algorithm.clone();
        }
        if stats.average < entry.average {
            entry.average = stats.average;
            entry.average_name = stats.algorithm.clone();
        }
        if stats.worst > entry.worst {
            entry.worst = stats.worst;
            entry.worst_name = stats.algorithm.clone();
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for e in &self.entries {
            let _ = writeln!(out, "Sort Type: {} - Container size: {}.", e.pattern, e.len);
            let _ = writeln!(
                out,
                "\tBest time: {:.PRECISION$} ({}).",
                e.best, e.best_name
            );
            let _ = writeln!(
                out,
                "\tBest average time: {:.PRECISION$} ({}).",
                e.average, e.average_name
            );
            let _ = writeln!(
                out,
                "\tWorst time: {:.PRECISION$} ({}).\n",
                e.worst, e.worst_name
            );
        }
        out
    }
}
