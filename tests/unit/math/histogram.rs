//! Tests for L1 normalization and Bhattacharyya comparison

use mosaictile::math::histogram::{bhattacharyya, normalize_l1};
use ndarray::Array1;

#[test]
fn test_normalize_l1_sums_to_one() {
    let mut hist = Array1::from_vec(vec![1.0f32, 3.0, 4.0, 2.0]);
    normalize_l1(&mut hist);
    let total: f32 = hist.iter().sum();
    assert!((total - 1.0).abs() < 1e-6);
    assert!((hist.get(1).copied().unwrap() - 0.3).abs() < 1e-6);
}

#[test]
fn test_normalize_l1_leaves_zero_histogram_untouched() {
    let mut hist = Array1::<f32>::zeros(36);
    normalize_l1(&mut hist);
    assert!(hist.iter().all(|&v| v == 0.0));
}

#[test]
fn test_bhattacharyya_identical_is_zero() {
    let mut hist = Array1::from_vec(vec![0.5f32, 0.25, 0.25]);
    normalize_l1(&mut hist);
    let distance = bhattacharyya(&hist, &hist);
    assert!(distance.abs() < 1e-4);
}

#[test]
fn test_bhattacharyya_disjoint_is_one() {
    let a = Array1::from_vec(vec![1.0f32, 0.0, 0.0]);
    let b = Array1::from_vec(vec![0.0f32, 0.0, 1.0]);
    let distance = bhattacharyya(&a, &b);
    assert!((distance - 1.0).abs() < 1e-6);
}

#[test]
fn test_bhattacharyya_symmetry() {
    let a = Array1::from_vec(vec![0.7f32, 0.2, 0.1]);
    let b = Array1::from_vec(vec![0.1f32, 0.3, 0.6]);
    assert!((bhattacharyya(&a, &b) - bhattacharyya(&b, &a)).abs() < 1e-9);
}

#[test]
fn test_bhattacharyya_mismatched_lengths_incomparable() {
    let a = Array1::from_vec(vec![1.0f32, 0.0]);
    let b = Array1::from_vec(vec![1.0f32, 0.0, 0.0]);
    assert_eq!(bhattacharyya(&a, &b), f64::MAX);
}

#[test]
fn test_bhattacharyya_empty_incomparable() {
    let a = Array1::<f32>::zeros(0);
    let b = Array1::<f32>::zeros(0);
    assert_eq!(bhattacharyya(&a, &b), f64::MAX);
}

#[test]
fn test_bhattacharyya_zero_sum_incomparable() {
    let a = Array1::<f32>::zeros(36);
    let b = Array1::from_elem(36, 1.0f32 / 36.0);
    assert_eq!(bhattacharyya(&a, &b), f64::MAX);
    assert_eq!(bhattacharyya(&b, &a), f64::MAX);
}
