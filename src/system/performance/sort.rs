//! Sorting probe: ascending sort of random f64 values.

use super::timer::measure;
use super::{random_f64s, Probe};
use crate::error::ProbeError;
use crate::models::ProbeId;

pub const SORT_ARRAY_LEN: usize = 1_000_000;

/// Sort ascending in place under IEEE total order.
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_unstable_by(f64::total_cmp);
}

/// True when `output` is non-decreasing and holds exactly the values of `input`.
pub fn is_sorted_permutation(input: &[f64], output: &[f64]) -> bool {
    if input.len() != output.len() {
        return false;
    }
    if output.windows(2).any(|pair| pair[0].total_cmp(&pair[1]).is_gt()) {
        return false;
    }
    let mut expected = input.to_vec();
    sort_ascending(&mut expected);
    expected
        .iter()
        .zip(output)
        .all(|(a, b)| a.to_bits() == b.to_bits())
}

#[derive(Clone, Debug)]
pub struct SortProbe {
    len: usize,
}

impl Default for SortProbe {
    fn default() -> Self {
        SortProbe {
            len: SORT_ARRAY_LEN,
        }
    }
}

impl SortProbe {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }
}

impl Probe for SortProbe {
    fn id(&self) -> ProbeId {
        ProbeId::Sort
    }

    fn run(&self) -> Result<f64, ProbeError> {
        log::debug!("[SORT] Generating {} random f64", self.len);
        let input = random_f64s(self.len);
        let mut sorted = input.clone();

        let ((), elapsed) = measure(|| sort_ascending(&mut sorted));

        // Checked after the clock stops
        if sorted.windows(2).any(|pair| pair[0] > pair[1]) || sorted.len() != input.len() {
            return Err(ProbeError::Verification(
                "sorted output is not non-decreasing".to_string(),
            ));
        }
        Ok(elapsed)
    }
}
