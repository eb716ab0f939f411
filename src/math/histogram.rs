//! L1 normalization and Bhattacharyya comparison for histogram descriptors

use ndarray::Array1;
use num_traits::Float;

/// Scale a histogram in place so its bins sum to one
///
/// An all-zero histogram is left untouched: it encodes a degenerate input
/// (image too small for the extractor) and must stay all-zero rather than
/// turn into NaN bins.
pub fn normalize_l1<F: Float>(hist: &mut Array1<F>) {
    let total = hist.iter().fold(F::zero(), |acc, &v| acc + v);
    if total > F::zero() {
        hist.mapv_inplace(|v| v / total);
    }
}

/// Bhattacharyya distance between two L1-normalized histograms
///
/// Follows the `HISTCMP_BHATTACHARYYA` formulation:
/// `sqrt(1 - sum(sqrt(a_i * b_i)) / sqrt(sum(a) * sum(b)))`, which is 0 for
/// identical distributions and 1 for disjoint ones.
///
/// Histograms of mismatched length, empty histograms, and histograms with a
/// zero sum on either side are incomparable. They yield [`f64::MAX`] so the
/// affected candidate loses every comparison instead of aborting the search.
pub fn bhattacharyya<F: Float>(a: &Array1<F>, b: &Array1<F>) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return f64::MAX;
    }

    let mut sum_a = F::zero();
    let mut sum_b = F::zero();
    let mut coefficient = F::zero();
    for (&x, &y) in a.iter().zip(b.iter()) {
        sum_a = sum_a + x;
        sum_b = sum_b + y;
        coefficient = coefficient + (x * y).sqrt();
    }

    let denominator = (sum_a * sum_b).sqrt();
    if denominator <= F::zero() {
        return f64::MAX;
    }

    let distance = (F::one() - coefficient / denominator)
        .max(F::zero())
        .sqrt();
    distance.to_f64().unwrap_or(f64::MAX)
}
