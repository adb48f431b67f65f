// Element-wise comparison of computed output against reference data.

/// Outcome of checking a computed buffer against the reference buffer.
///
/// Only pass/fail is observable at the process boundary; the failing
/// variants carry the first point of disagreement for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyResult {
    Pass,
    /// The buffers disagree, first at `index`.
    Mismatch {
        index: usize,
        actual: u8,
        expected: u8,
    },
    /// The buffers are not even the same length.
    LengthMismatch { actual: usize, expected: usize },
}

impl VerifyResult {
    pub fn passed(&self) -> bool {
        matches!(self, VerifyResult::Pass)
    }
}

/// Compares `actual` to `expected` element by element.
///
/// Returns [`VerifyResult::Pass`] only if the buffers have the same
/// length and every byte matches exactly. Stops at the first mismatch;
/// only the single verdict is observable to callers either way.
pub fn verify(actual: &[u8], expected: &[u8]) -> VerifyResult {
    if actual.len() != expected.len() {
        return VerifyResult::LengthMismatch {
            actual: actual.len(),
            expected: expected.len(),
        };
    }

    for (index, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        if a != e {
            return VerifyResult::Mismatch {
                index,
                actual: a,
                expected: e,
            };
        }
    }

    VerifyResult::Pass
}
