use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::process;

use log::{error, info, warn};

use sort_test_tools::patterns;

mod config;
mod error;
mod report;

use config::Config;
use error::ReportError;
use report::{Comparison, RunStats};

fn pin_thread_to_core(core: usize) {
    let Some(core_ids) = core_affinity::get_core_ids() else {
        warn!("Unable to query core ids, running unpinned");
        return;
    };

    match core_ids.into_iter().find(|id| id.id == core) {
        Some(id) => {
            let _ = core_affinity::set_for_current(id);
            info!("Pinned to core {core}");
        }
        None => warn!("Core {core} not available, running unpinned"),
    }
}

/// Runs every configured (algorithm, pattern, size) triple and writes the text and json reports
/// into `config.out_dir`.
fn write_reports(config: &Config) -> Result<Vec<RunStats>, ReportError> {
    fs::create_dir_all(&config.out_dir)?;

    let seed = config.seed.unwrap_or_else(patterns::random_init_seed);
    info!("Seed: {seed}");

    let mut comparison = Comparison::default();
    let mut results = Vec::new();

    for &algorithm in &config.algorithms {
        info!("{algorithm}");

        let path = config.out_dir.join(report::report_file_name(algorithm));
        let mut out = BufWriter::new(File::create(&path)?);

        for &pattern in config.patterns() {
            for len in config.sizes() {
                info!("  {pattern}, size {len}");

                let stats = report::measure(algorithm, pattern, len, config.iterations, seed);
                if !stats.sorted {
                    warn!("{algorithm} failed to sort {pattern} of size {len}");
                }

                out.write_all(report::format_run(&stats).as_bytes())?;
                comparison.record(&stats);
                results.push(stats);
            }
        }

        out.flush()?;
    }

    fs::write(config.out_dir.join("comparison.txt"), comparison.render())?;

    let json = File::create(config.out_dir.join("results.json"))?;
    serde_json::to_writer_pretty(BufWriter::new(json), &results)?;

    Ok(results)
}

fn run() -> Result<(), ReportError> {
    let config = Config::from_env()?;
    info!(
        "Mode {:?}, {} iterations, sizes up to 10^{}",
        config.mode, config.iterations, config.max_exp
    );

    if let Some(core) = config.pin_core {
        pin_thread_to_core(core);
    }

    let results = write_reports(&config)?;
    info!(
        "Wrote {} results to {}",
        results.len(),
        config.out_dir.display()
    );

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{err}");
        process::exit(1);
    }
}
