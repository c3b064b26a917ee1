//! Haar coefficient engine: one decomposition level for one series.

use std::f64::consts::SQRT_2;

/// Computes the approximation (low-frequency) coefficients of one Haar
/// decomposition level.
///
/// For input of length `n` the output has length `floor(n / 2)`:
/// `approx[i] = (arr[2i] + arr[2i+1]) / sqrt(2)`.
///
/// Edge cases: a single-element input is returned unchanged (no further
/// halving is possible); for odd `n > 1` the trailing unpaired sample is
/// dropped.
pub fn approx_coefficients(arr: &[f64]) -> Vec<f64> {
    if arr.len() == 1 {
        return vec![arr[0]];
    }
    arr.chunks_exact(2)
        .map(|pair| (pair[0] + pair[1]) / SQRT_2)
        .collect()
}

/// Computes the detail (high-frequency) coefficients of one Haar
/// decomposition level.
///
/// For input of length `n` the output has length `floor(n / 2)`:
/// `detail[i] = (arr[2i] - arr[2i+1]) / sqrt(2)`.
///
/// Edge cases match [`approx_coefficients`].
pub fn detail_coefficients(arr: &[f64]) -> Vec<f64> {
    if arr.len() == 1 {
        return vec![arr[0]];
    }
    arr.chunks_exact(2)
        .map(|pair| (pair[0] - pair[1]) / SQRT_2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn halving_invariant_even() {
        let arr: Vec<f64> = (0..8).map(|i| i as f64).collect();
        assert_eq!(approx_coefficients(&arr).len(), 4);
        assert_eq!(detail_coefficients(&arr).len(), 4);
    }

    #[test]
    fn halving_invariant_odd() {
        let arr: Vec<f64> = (0..7).map(|i| i as f64).collect();
        assert_eq!(approx_coefficients(&arr).len(), 3);
        assert_eq!(detail_coefficients(&arr).len(), 3);
    }

    #[test]
    fn single_element_degenerates() {
        assert_eq!(approx_coefficients(&[5.0]), vec![5.0]);
        assert_eq!(detail_coefficients(&[5.0]), vec![5.0]);
    }

    #[test]
    fn known_values() {
        let arr = [1.0, 2.0, 3.0, 4.0];
        let approx = approx_coefficients(&arr);
        let detail = detail_coefficients(&arr);
        assert_relative_eq!(approx[0], 3.0 / SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(approx[1], 7.0 / SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(detail[0], -1.0 / SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(detail[1], -1.0 / SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn odd_length_drops_trailing_sample() {
        // The trailing 9.0 must not influence any coefficient
        let with_tail = [1.0, 2.0, 3.0, 4.0, 9.0];
        let without = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(approx_coefficients(&with_tail), approx_coefficients(&without));
        assert_eq!(detail_coefficients(&with_tail), detail_coefficients(&without));
    }

    #[test]
    fn energy_round_trip() {
        // arr[2i] = (a[i] + d[i]) * sqrt(2)/2, arr[2i+1] = (a[i] - d[i]) * sqrt(2)/2
        let arr: Vec<f64> = (0..16).map(|i| (i as f64 * 0.37).sin() * 3.0).collect();
        let approx = approx_coefficients(&arr);
        let detail = detail_coefficients(&arr);
        for i in 0..arr.len() / 2 {
            let even = (approx[i] + detail[i]) * SQRT_2 / 2.0;
            let odd = (approx[i] - detail[i]) * SQRT_2 / 2.0;
            assert_relative_eq!(even, arr[2 * i], epsilon = 1e-12);
            assert_relative_eq!(odd, arr[2 * i + 1], epsilon = 1e-12);
        }
    }

    #[test]
    fn pure_no_input_mutation() {
        let arr = vec![1.0, 2.0];
        let _ = approx_coefficients(&arr);
        let _ = detail_coefficients(&arr);
        assert_eq!(arr, vec![1.0, 2.0]);
    }
}
