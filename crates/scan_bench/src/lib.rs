// top-level library module

pub mod dataset;
pub mod stats;
pub mod verify;

use dataset::Dataset;
use prefix_scan::{prefix_sum, prefix_sum_par};
use rayon::ThreadPool;
use stats::Stats;
use verify::VerifyResult;

/// Runs the prefix sum kernel once over `dataset` and checks the result.
///
/// Steps, in order: allocate the output buffer, open the measurement
/// window, run the kernel, close the window, verify the output against
/// the dataset's expected bytes. The stats calls bracket the kernel
/// invocation and nothing else.
pub fn run(dataset: &Dataset, stats: &mut dyn Stats) -> VerifyResult {
    let mut output = vec![0u8; dataset.input.len()];

    stats.start();
    prefix_sum(&dataset.input, &mut output);
    stats.stop();

    verify::verify(&output, &dataset.expected)
}

/// Same as [`run`] but computes the scan with the chunked parallel
/// kernel inside `thread_pool`.
pub fn run_par(
    dataset: &Dataset,
    stats: &mut dyn Stats,
    chunk_size: usize,
    thread_pool: &ThreadPool,
) -> VerifyResult {
    let mut output = vec![0u8; dataset.input.len()];

    stats.start();
    prefix_sum_par(&dataset.input, &mut output, chunk_size, thread_pool);
    stats.stop();

    verify::verify(&output, &dataset.expected)
}
