//! Trailing-window reference values.
//!
//! A window of length `period` ending at position `i` covers
//! `values[i + 1 - period ..= i]` and exists only for `i >= period - 1`.
//! Positions without a full window produce nothing, so every output here is
//! right-aligned with its input.

use crate::Differential;

/// Returns the number of full windows of length `period` in `len` values.
///
/// `period` must be at least 1.
pub const fn window_count(len: usize, period: usize) -> usize {
    len.saturating_sub(period.saturating_sub(1))
}

/// Computes one reference value per full window of `values`.
///
/// - [`Differential::Last`]: the window's first value.
/// - [`Differential::Mean`]: the window's arithmetic mean.
///
/// Each mean is summed over its own window, so a `NaN` only affects the
/// windows that contain it. Returns an empty vector when `period` is zero or
/// longer than `values`.
pub fn reference_values(values: &[f64], period: usize, differential: Differential) -> Vec<f64> {
    if period == 0 || period > values.len() {
        return Vec::new();
    }

    match differential {
        Differential::Last => values[..window_count(values.len(), period)].to_vec(),
        Differential::Mean => {
            let n = period as f64;
            values
                .windows(period)
                .map(|w| w.iter().sum::<f64>() / n)
                .collect()
        }
    }
}

/// Returns the value at the end of each full window.
pub fn current_values(values: &[f64], period: usize) -> &[f64] {
    if period == 0 || period > values.len() {
        return &[];
    }
    &values[period - 1..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_window_count() {
        assert_eq!(window_count(5, 2), 4);
        assert_eq!(window_count(5, 5), 1);
        assert_eq!(window_count(5, 6), 0);
        assert_eq!(window_count(0, 1), 0);
        assert_eq!(window_count(3, 1), 3);
    }

    #[test]
    fn test_last_uses_window_start() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(
            reference_values(&values, 2, Differential::Last),
            vec![1.0, 2.0, 3.0, 4.0]
        );
        assert_eq!(
            reference_values(&values, 3, Differential::Last),
            vec![1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_mean_of_each_window() {
        let values = [10.0, 20.0, 30.0];
        let refs = reference_values(&values, 2, Differential::Mean);
        assert_eq!(refs.len(), 2);
        assert_relative_eq!(refs[0], 15.0);
        assert_relative_eq!(refs[1], 25.0);
    }

    #[test]
    fn test_period_one_is_identity() {
        let values = [3.0, 1.0, 4.0];
        assert_eq!(reference_values(&values, 1, Differential::Last), values.to_vec());
        assert_eq!(reference_values(&values, 1, Differential::Mean), values.to_vec());
        assert_eq!(current_values(&values, 1), &values);
    }

    #[test]
    fn test_period_longer_than_input() {
        let values = [1.0, 2.0];
        assert!(reference_values(&values, 3, Differential::Last).is_empty());
        assert!(reference_values(&values, 3, Differential::Mean).is_empty());
        assert!(current_values(&values, 3).is_empty());
    }

    #[test]
    fn test_zero_period_is_empty() {
        let values = [1.0, 2.0];
        assert!(reference_values(&values, 0, Differential::Mean).is_empty());
        assert!(current_values(&values, 0).is_empty());
    }

    #[test]
    fn test_nan_only_affects_containing_windows() {
        let values = [1.0, f64::NAN, 3.0, 4.0, 5.0];
        let refs = reference_values(&values, 2, Differential::Mean);
        assert!(refs[0].is_nan());
        assert!(refs[1].is_nan());
        assert_relative_eq!(refs[2], 3.5);
        assert_relative_eq!(refs[3], 4.5);
    }

    #[test]
    fn test_current_values_are_window_ends() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(current_values(&values, 3), &[3.0, 4.0]);
    }
}
