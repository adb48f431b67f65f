// Driver that runs the prefix sum kernel over a dataset and verifies it.

use scan_bench::dataset::Dataset;
use scan_bench::stats::{NoopStats, Stats, TimerStats};
use scan_bench::verify::VerifyResult;

use std::process::ExitCode;

use clap::Parser;

/// Which built-in dataset to use.
const DATASET: usize = 1;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
  /// Built-in dataset number.
  #[arg(long)]
  dataset: Option<usize>,
  /// Use a generated dataset of this many elements instead.
  #[arg(long)]
  size: Option<usize>,
  /// Compute the scan with the chunked parallel kernel.
  #[arg(long, action)]
  parallel: bool,
  /// Skip the wall-clock measurement window.
  #[arg(long, action)]
  quiet: bool,
}

/// Runs the prefix sum once over the selected dataset, inside a
/// measurement window, then verifies the output byte-for-byte against
/// the reference. Exit status is zero only if every byte matched.
fn main() -> ExitCode {
  env_logger::init();
  let args = Args::parse();

  let dataset = match args.size {
    Some(len) => Dataset::generated(len),
    None => match args.dataset.unwrap_or(DATASET) {
      1 => Dataset::dataset1(),
      _ => unimplemented!(),
    },
  };
  log::info!("Dataset: {} ({} elements)", dataset.name, dataset.input.len());

  let mut stats: Box<dyn Stats> = if args.quiet {
    Box::new(NoopStats)
  } else {
    Box::new(TimerStats::new())
  };

  let result = if args.parallel {
    let thread_pool = rayon::ThreadPoolBuilder::new()
      .num_threads(num_cpus::get())
      .build()
      .unwrap();

    let chunk_size = (dataset.input.len() / thread_pool.current_num_threads()).max(1);
    scan_bench::run_par(&dataset, stats.as_mut(), chunk_size, &thread_pool)
  } else {
    scan_bench::run(&dataset, stats.as_mut())
  };

  match result {
    VerifyResult::Pass => {
      log::info!("Verification passed.");
      ExitCode::SUCCESS
    }
    VerifyResult::Mismatch {
      index,
      actual,
      expected,
    } => {
      log::error!(
        "Verification failed at index {}: got {}, expected {}.",
        index,
        actual,
        expected
      );
      ExitCode::FAILURE
    }
    VerifyResult::LengthMismatch { actual, expected } => {
      log::error!(
        "Verification failed: output has {} elements, reference has {}.",
        actual,
        expected
      );
      ExitCode::FAILURE
    }
  }
}
