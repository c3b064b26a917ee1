//! Naive (last-value) forecaster.

use kronos_panel::Series;

use crate::error::ForecastError;
use crate::forecaster::Forecaster;
use crate::horizon::Horizon;

/// Forecasts every horizon offset as the last observed value.
///
/// # Example
///
/// ```
/// use kronos_forecast::{Forecaster, Horizon, NaiveForecaster};
/// use kronos_panel::Series;
///
/// let mut f = NaiveForecaster::new();
/// f.fit(&Series::new(vec![1.0, 2.0, 7.0]).unwrap()).unwrap();
/// let fh = Horizon::new(vec![1, 2, 3]).unwrap();
/// assert_eq!(f.predict(&fh).unwrap(), vec![7.0, 7.0, 7.0]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct NaiveForecaster {
    last: Option<f64>,
}

impl NaiveForecaster {
    /// Creates an unfitted naive forecaster.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Forecaster for NaiveForecaster {
    fn fit(&mut self, series: &Series) -> Result<(), ForecastError> {
        // Series guarantees len >= 1
        self.last = series.as_slice().last().copied();
        Ok(())
    }

    fn predict(&self, horizon: &Horizon) -> Result<Vec<f64>, ForecastError> {
        let last = self.last.ok_or(ForecastError::NotFitted)?;
        Ok(vec![last; horizon.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecaster::InputShape;

    fn series(data: &[f64]) -> Series {
        Series::new(data.to_vec()).unwrap()
    }

    #[test]
    fn repeats_last_value() {
        let mut f = NaiveForecaster::new();
        f.fit(&series(&[3.0, 1.0, 4.0])).unwrap();
        let fh = Horizon::new(vec![1, 2, 5]).unwrap();
        assert_eq!(f.predict(&fh).unwrap(), vec![4.0, 4.0, 4.0]);
    }

    #[test]
    fn predict_before_fit_rejected() {
        let f = NaiveForecaster::new();
        let fh = Horizon::new(vec![1]).unwrap();
        let err = f.predict(&fh).unwrap_err();
        assert!(matches!(err, ForecastError::NotFitted));
    }

    #[test]
    fn refit_replaces_state() {
        let mut f = NaiveForecaster::new();
        f.fit(&series(&[1.0])).unwrap();
        f.fit(&series(&[2.0])).unwrap();
        let fh = Horizon::new(vec![1]).unwrap();
        assert_eq!(f.predict(&fh).unwrap(), vec![2.0]);
    }

    #[test]
    fn declares_series_input() {
        assert_eq!(NaiveForecaster::new().input_shape(), InputShape::Series);
    }
}
