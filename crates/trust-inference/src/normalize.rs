//! Normalization: turns accumulated `weight * value` sums into a
//! weight-averaged trust value per destination.

use rayon::prelude::*;

/// Rows shorter than this are normalized on the calling thread.
const PARALLEL_THRESHOLD: usize = 4096;

/// Divide `trust[w]` by `weight_sum[w]` wherever the sum is positive.
/// Unreached destinations keep their zero.
pub fn normalize_row(trust: &mut [f64], weight_sum: &[f64]) {
    debug_assert_eq!(trust.len(), weight_sum.len());

    if trust.len() < PARALLEL_THRESHOLD {
        trust
            .iter_mut()
            .zip(weight_sum)
            .for_each(|(t, &ws)| normalize_entry(t, ws));
    } else {
        trust
            .par_iter_mut()
            .zip(weight_sum.par_iter())
            .for_each(|(t, &ws)| normalize_entry(t, ws));
    }
}

#[inline]
fn normalize_entry(t: &mut f64, weight_sum: f64) {
    if weight_sum > 0.0 {
        *t /= weight_sum;
    }
}
