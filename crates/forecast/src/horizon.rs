//! Validated forecast horizon.

use crate::error::ForecastError;

/// The set of future time offsets a forecast is requested for.
///
/// Invariants: non-empty, all offsets >= 1, strictly increasing.
///
/// # Example
///
/// ```
/// use kronos_forecast::Horizon;
///
/// let fh = Horizon::new(vec![1, 2, 3]).unwrap();
/// assert_eq!(fh.len(), 3);
/// assert_eq!(fh.max_offset(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Horizon {
    offsets: Vec<usize>,
}

impl Horizon {
    /// Creates a horizon after validating the offsets.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidHorizon`] if `offsets` is empty,
    /// contains 0, or is not strictly increasing.
    pub fn new(offsets: Vec<usize>) -> Result<Self, ForecastError> {
        if offsets.is_empty() {
            return Err(ForecastError::InvalidHorizon {
                reason: "horizon is empty".into(),
            });
        }
        if offsets[0] == 0 {
            return Err(ForecastError::InvalidHorizon {
                reason: "offsets must be at least 1".into(),
            });
        }
        if !offsets.windows(2).all(|w| w[0] < w[1]) {
            return Err(ForecastError::InvalidHorizon {
                reason: "offsets must be strictly increasing".into(),
            });
        }
        Ok(Self { offsets })
    }

    /// Returns the offsets.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Returns the number of requested offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if the horizon is empty.
    ///
    /// Note: a valid `Horizon` is never empty.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns the largest requested offset.
    pub fn max_offset(&self) -> usize {
        // invariant: strictly increasing and non-empty
        self.offsets[self.offsets.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_horizon() {
        let fh = Horizon::new(vec![1, 2, 3]).unwrap();
        assert_eq!(fh.offsets(), &[1, 2, 3]);
        assert_eq!(fh.len(), 3);
        assert!(!fh.is_empty());
        assert_eq!(fh.max_offset(), 3);
    }

    #[test]
    fn sparse_horizon() {
        let fh = Horizon::new(vec![2, 5, 9]).unwrap();
        assert_eq!(fh.max_offset(), 9);
    }

    #[test]
    fn empty_rejected() {
        let err = Horizon::new(vec![]).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidHorizon { .. }));
    }

    #[test]
    fn zero_offset_rejected() {
        let err = Horizon::new(vec![0, 1]).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidHorizon { .. }));
    }

    #[test]
    fn non_increasing_rejected() {
        let err = Horizon::new(vec![1, 1, 2]).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidHorizon { .. }));
        let err = Horizon::new(vec![3, 2]).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidHorizon { .. }));
    }

    #[test]
    fn horizon_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Horizon>();
    }
}
