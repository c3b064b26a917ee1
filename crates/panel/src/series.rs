//! Validated single-series wrapper.

use crate::error::PanelError;

/// A validated time series of finite `f64` values.
///
/// Wraps a `Vec<f64>` and guarantees:
/// - length >= 1
/// - all values are finite (no NaN or infinity)
///
/// A `Series` is the atomic unit a series-native routine (wavelet
/// decomposition, single-series forecasting) understands.
///
/// # Example
///
/// ```
/// use kronos_panel::Series;
///
/// let s = Series::new(vec![1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(s.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    data: Vec<f64>,
}

impl Series {
    /// Creates a new `Series` after validating the data.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`PanelError::EmptySeries`] | `data` is empty |
    /// | [`PanelError::NonFiniteData`] | any element is NaN or infinite |
    pub fn new(data: Vec<f64>) -> Result<Self, PanelError> {
        if data.is_empty() {
            return Err(PanelError::EmptySeries);
        }
        if !data.iter().all(|v| v.is_finite()) {
            return Err(PanelError::NonFiniteData);
        }
        Ok(Self { data })
    }

    /// Returns the observations as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series is empty.
    ///
    /// Note: a valid `Series` is never empty (minimum length is 1).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the series and returns the underlying vector.
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }
}

impl AsRef<[f64]> for Series {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}
