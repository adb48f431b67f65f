// unit tests

use super::*;

#[test]
fn empty_input_writes_nothing() {
  let input: [u8; 0] = [];
  let mut output: [u8; 0] = [];

  prefix_sum(&input, &mut output);
}

#[test]
fn single_element_is_identity() {
  let input = [7u8];
  let mut output = [0u8];

  prefix_sum(&input, &mut output);

  assert_eq!(output, [7]);
}

#[test]
fn sums_wrap_mod_256() {
  // 200 + 100 = 300, and 300 mod 256 = 44
  let input = [200u8, 100];
  let mut output = [0u8; 2];

  prefix_sum(&input, &mut output);

  assert_eq!(output, [200, 44]);
}

#[test]
fn small_ascending_sequence() {
  let input = [1u8, 2, 3, 4];
  let mut output = [0u8; 4];

  prefix_sum(&input, &mut output);

  assert_eq!(output, [1, 3, 6, 10]);
}

#[test]
fn matches_naive_per_index_sums() {
  let input = test_bytes(1000);
  let mut output = vec![0u8; input.len()];

  prefix_sum(&input, &mut output);

  for i in 0..input.len() {
    let naive = input[..=i]
      .iter()
      .fold(0u8, |acc, &val| acc.wrapping_add(val));
    assert_eq!(output[i], naive, "mismatch at index {}", i);
  }
}

#[test]
fn change_only_propagates_rightward() {
  let input = test_bytes(64);
  let mut output = vec![0u8; input.len()];
  prefix_sum(&input, &mut output);

  const CHANGED: usize = 40;
  let mut perturbed = input.clone();
  perturbed[CHANGED] = perturbed[CHANGED].wrapping_add(1);

  let mut perturbed_output = vec![0u8; input.len()];
  prefix_sum(&perturbed, &mut perturbed_output);

  assert_eq!(output[..CHANGED], perturbed_output[..CHANGED]);
  for i in CHANGED..input.len() {
    assert_eq!(perturbed_output[i], output[i].wrapping_add(1));
  }
}

#[test]
fn in_place_agrees_with_two_buffer_scan() {
  let input = test_bytes(300);
  let mut output = vec![0u8; input.len()];
  prefix_sum(&input, &mut output);

  let mut in_place = input.clone();
  prefix_sum_in_place(&mut in_place);

  assert_eq!(in_place, output);
}

#[test]
fn parallel_agrees_with_serial_scan() {
  let thread_pool = rayon::ThreadPoolBuilder::new().build().unwrap();

  let input = test_bytes(1000);
  let mut expected = vec![0u8; input.len()];
  prefix_sum(&input, &mut expected);

  // include chunk sizes that do not divide the length evenly
  for chunk_size in [1, 7, 64, 333, 1000, 5000] {
    let mut output = vec![0u8; input.len()];
    prefix_sum_par(&input, &mut output, chunk_size, &thread_pool);

    assert_eq!(output, expected, "chunk size {}", chunk_size);
  }
}

#[test]
fn parallel_empty_input() {
  let thread_pool = rayon::ThreadPoolBuilder::new().build().unwrap();

  let input: [u8; 0] = [];
  let mut output: [u8; 0] = [];

  prefix_sum_par(&input, &mut output, 16, &thread_pool);
}

#[test]
#[should_panic]
fn mismatched_buffer_lengths_panic() {
  let input = [1u8, 2, 3];
  let mut output = [0u8; 2];

  prefix_sum(&input, &mut output);
}

// test helper functions

fn test_bytes(len: usize) -> Vec<u8> {
  // simple LCG so the data exercises wraparound without being uniform
  let mut state: u32 = 0x1234_5678;
  (0..len)
    .map(|_| {
      state = state.wrapping_mul(1664525).wrapping_add(1013904223);
      (state >> 24) as u8
    })
    .collect()
}
