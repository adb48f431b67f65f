// Input and reference data for benchmark runs.
//
// A dataset pairs an input buffer with the expected prefix sum output,
// so a run can be checked without trusting the kernel under test. The
// expected bytes come either from the compiled-in table below or from
// an independent naive accumulator, never from the scan crate itself.

/// One benchmark dataset: input bytes plus the expected scan output.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub input: Vec<u8>,
    pub expected: Vec<u8>,
}

impl Dataset {
    /// The compiled-in reference dataset.
    pub fn dataset1() -> Self {
        Self {
            name: String::from("dataset1"),
            input: Vec::from(INPUT_DATA),
            expected: Vec::from(VERIFY_DATA),
        }
    }

    /// A deterministic generated dataset of `len` elements.
    ///
    /// Input bytes come from an LCG; the expected output is built by a
    /// naive per-element accumulator so it does not depend on the
    /// kernel being verified.
    pub fn generated(len: usize) -> Self {
        let mut state: u32 = 0xDA7A_5EED;
        let input: Vec<u8> = (0..len)
            .map(|_| {
                state = state.wrapping_mul(1664525).wrapping_add(1013904223);
                (state >> 24) as u8
            })
            .collect();

        let mut expected = Vec::with_capacity(len);
        let mut acc: u8 = 0;
        for &val in &input {
            acc = acc.wrapping_add(val);
            expected.push(acc);
        }

        Self {
            name: format!("generated({})", len),
            input,
            expected,
        }
    }
}

pub const DATA_SIZE: usize = 128;

pub const INPUT_DATA: [u8; DATA_SIZE] = [
    22, 47, 71, 149, 187, 57, 200, 233, 251, 162, 149, 207, 173, 223, 81, 1, //
    86, 181, 91, 2, 78, 205, 10, 11, 9, 117, 15, 202, 155, 236, 162, 213, //
    255, 218, 30, 124, 144, 201, 165, 164, 220, 192, 204, 49, 238, 185, 13, 140, //
    17, 235, 114, 9, 96, 138, 245, 97, 41, 149, 218, 228, 18, 136, 73, 89, //
    223, 157, 13, 249, 119, 170, 160, 44, 124, 106, 90, 132, 177, 83, 58, 119, //
    195, 108, 18, 236, 222, 231, 192, 159, 16, 49, 255, 63, 187, 198, 10, 6, //
    94, 45, 204, 115, 98, 154, 190, 1, 235, 1, 145, 6, 15, 68, 117, 208, //
    159, 187, 76, 211, 54, 132, 59, 206, 156, 158, 187, 82, 117, 213, 118, 66, //
];

pub const VERIFY_DATA: [u8; DATA_SIZE] = [
    22, 69, 140, 33, 220, 21, 221, 198, 193, 99, 248, 199, 116, 83, 164, 165, //
    251, 176, 11, 13, 91, 40, 50, 61, 70, 187, 202, 148, 47, 27, 189, 146, //
    145, 107, 137, 5, 149, 94, 3, 167, 131, 67, 15, 64, 46, 231, 244, 128, //
    145, 124, 238, 247, 87, 225, 214, 55, 96, 245, 207, 179, 197, 77, 150, 239, //
    206, 107, 120, 113, 232, 146, 50, 94, 218, 68, 158, 34, 211, 38, 96, 215, //
    154, 6, 24, 4, 226, 201, 137, 40, 56, 105, 104, 167, 98, 40, 50, 56, //
    150, 195, 143, 2, 100, 254, 188, 189, 168, 169, 58, 64, 79, 147, 8, 216, //
    119, 50, 126, 81, 135, 11, 70, 20, 176, 78, 9, 91, 208, 165, 27, 93, //
];
