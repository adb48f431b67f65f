#[cfg(test)]
mod tests;

// Home of functions to compute inclusive prefix sums over byte buffers.

use rayon::{ThreadPool, prelude::*};

/// Inclusive prefix sum over bytes with wrapping (mod 256) arithmetic.
///
/// Writes the running sum of `input` into `output`, so that
///
/// ```text
/// output[i] = (input[0] + input[1] + ... + input[i]) mod 256
/// ```
///
/// for every index. The scan runs strictly left to right; each step adds
/// `input[i]` to the previous cumulative value with `u8` wrapping addition,
/// so overflow silently wraps and never saturates or errors.
///
/// __Arguments:__
///
/// + `input` - the bytes to sum; not modified.
///
/// + `output` - receives the running sums; must have the same length
///   as `input`. The borrow checker rules out overlap with `input`;
///   for a single-buffer scan use [`prefix_sum_in_place`].
///
pub fn prefix_sum(input: &[u8], output: &mut [u8]) {
    if input.len() != output.len() {
        panic!("Prefix sum input and output buffers must have the same length.")
    }

    let mut acc: u8 = 0;
    for (out, &val) in output.iter_mut().zip(input) {
        acc = acc.wrapping_add(val);
        *out = acc;
    }
}

/// Inclusive prefix sum computed in place, overwriting `data`.
///
/// The forward scan only reads the cumulative value and `data[i]`, both
/// already consumed before `data[i]` is overwritten, so a single buffer
/// is safe. Produces the same bytes [`prefix_sum`] would write.
pub fn prefix_sum_in_place(data: &mut [u8]) {
    let mut acc: u8 = 0;
    for val in data.iter_mut() {
        acc = acc.wrapping_add(*val);
        *val = acc;
    }
}

// parallel implementation

fn prefix_sum_par_internal(input: &[u8], output: &mut [u8], chunk_size: usize) {
    if input.len() != output.len() {
        panic!("Prefix sum input and output buffers must have the same length.")
    }
    assert!(chunk_size > 0);

    // scan each chunk independently in parallel; each "job" for rayon
    // is one chunk of the buffer
    output
        .par_chunks_mut(chunk_size)
        .zip(input.par_chunks(chunk_size))
        .for_each(|(out, inp)| prefix_sum(inp, out));

    // the carry into chunk k is the wrapped sum of all earlier chunks,
    // which after the local scans is the running sum of their last elements
    let num_chunks = output.len().div_ceil(chunk_size);
    let mut carries: Vec<u8> = Vec::with_capacity(num_chunks);

    let mut acc: u8 = 0;
    for chunk in output.chunks(chunk_size) {
        carries.push(acc);
        acc = acc.wrapping_add(chunk[chunk.len() - 1]);
    }

    // apply the carries in parallel
    output
        .par_chunks_mut(chunk_size)
        .zip(carries.into_par_iter())
        .for_each(|(chunk, carry)| {
            for val in chunk {
                *val = val.wrapping_add(carry);
            }
        });
}

/// Chunked two-pass parallel version of [`prefix_sum`].
///
/// Pass one scans each chunk locally in parallel. Pass two computes the
/// carry into each chunk serially (one wrapped addition per chunk) and
/// adds it to every element of the chunk in parallel. Wrapping addition
/// is associative mod 256, so the output is byte-identical to the
/// serial scan.
///
/// __Arguments:__
///
/// + `input` - the bytes to sum; not modified.
///
/// + `output` - receives the running sums; must have the same length
///   as `input`.
///
/// + `chunk_size` - number of elements per parallel job; need not
///   divide the buffer length. Must be nonzero.
///
/// + `thread_pool` - Rayon thread pool to execute the computation within
///
pub fn prefix_sum_par(
    input: &[u8],
    output: &mut [u8],
    chunk_size: usize,
    thread_pool: &ThreadPool,
) {
    // run parallel scan in rayon thread pool
    thread_pool.install(|| prefix_sum_par_internal(input, output, chunk_size));
}
