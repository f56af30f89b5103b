//! Sizing formulas used once, when a filter is constructed.
//!
//! All functions work on raw `f64` values and perform no validation: inputs
//! outside `expected_items > 0` and `0 < fpr < 1` flow through unchanged.

use crate::filter::QueryMode;
use std::f64::consts::LN_2;

/// Optimal bit-space size `m = ceil(-n * ln(p) / ln(2)^2)`.
pub fn bit_space_size(expected_items: usize, false_positive_rate: f64) -> f64 {
    let n = expected_items as f64;
    (-n * false_positive_rate.ln() / (LN_2 * LN_2)).ceil()
}

/// Hash function count `k = ceil((m / max_items) * ln 2)`.
///
/// The index range of every function is `max_items`, so `m` only serves to
/// derive `k`.
pub fn hash_function_count(bit_space_size: f64, max_items: usize) -> f64 {
    (bit_space_size / max_items as f64 * LN_2).ceil()
}

/// Converts a raw function count to `usize`. Negative counts clamp to zero;
/// non-finite counts have no usable value.
pub fn function_count(raw: f64) -> Option<usize> {
    if !raw.is_finite() {
        return None;
    }
    Some(raw.max(0.) as usize)
}

/// Function count for a filter of `max_items` positions sized for
/// `expected_items` at `false_positive_rate`.
pub fn number_of_functions(expected_items: usize, false_positive_rate: f64, max_items: usize) -> Option<usize> {
    function_count(hash_function_count(
        bit_space_size(expected_items, false_positive_rate),
        max_items,
    ))
}

/// Probability that a value that was never added is reported present, given
/// the fraction of active indices and the number of functions.
pub fn estimated_false_positive_rate(fill_ratio: f64, num_functions: usize, mode: QueryMode) -> f64 {
    let k = num_functions as i32;
    match mode {
        QueryMode::Any => 1. - (1. - fill_ratio).powi(k),
        QueryMode::All if num_functions == 0 => 0.,
        QueryMode::All => fill_ratio.powi(k),
    }
}
