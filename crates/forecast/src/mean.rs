//! Mean forecaster.

use kronos_panel::Series;

use crate::error::ForecastError;
use crate::forecaster::Forecaster;
use crate::horizon::Horizon;

/// Forecasts every horizon offset as the in-sample mean.
#[derive(Clone, Debug, Default)]
pub struct MeanForecaster {
    mean: Option<f64>,
}

impl MeanForecaster {
    /// Creates an unfitted mean forecaster.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Forecaster for MeanForecaster {
    fn fit(&mut self, series: &Series) -> Result<(), ForecastError> {
        let data = series.as_slice();
        self.mean = Some(data.iter().sum::<f64>() / data.len() as f64);
        Ok(())
    }

    fn predict(&self, horizon: &Horizon) -> Result<Vec<f64>, ForecastError> {
        let mean = self.mean.ok_or(ForecastError::NotFitted)?;
        Ok(vec![mean; horizon.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(data: &[f64]) -> Series {
        Series::new(data.to_vec()).unwrap()
    }

    #[test]
    fn repeats_mean() {
        let mut f = MeanForecaster::new();
        f.fit(&series(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        let fh = Horizon::new(vec![1, 2]).unwrap();
        let pred = f.predict(&fh).unwrap();
        assert_eq!(pred.len(), 2);
        assert_relative_eq!(pred[0], 2.5, epsilon = 1e-12);
        assert_relative_eq!(pred[1], 2.5, epsilon = 1e-12);
    }

    #[test]
    fn predict_before_fit_rejected() {
        let f = MeanForecaster::new();
        let fh = Horizon::new(vec![1]).unwrap();
        assert!(matches!(
            f.predict(&fh).unwrap_err(),
            ForecastError::NotFitted
        ));
    }
}
