//! AR(1) forecaster via moment estimation.

use kronos_panel::Series;

use crate::error::ForecastError;
use crate::forecaster::Forecaster;
use crate::horizon::Horizon;

/// Minimum observations for a meaningful lag-1 autocorrelation.
const MIN_OBSERVATIONS: usize = 3;

/// An ARIMA-style AR(1) forecaster.
///
/// Fits `x_t - m = phi (x_{t-1} - m) + e_t` by moment estimation:
/// `m` is the sample mean and `phi` the lag-1 autocorrelation. Forecasts
/// decay geometrically from the last observation towards the mean:
/// `yhat(h) = m + phi^h (x_n - m)`.
///
/// # Example
///
/// ```
/// use kronos_forecast::{Ar1Forecaster, Forecaster, Horizon};
/// use kronos_panel::Series;
///
/// let data: Vec<f64> = (0..50).map(|t| (t as f64 * 0.5).sin()).collect();
/// let mut f = Ar1Forecaster::new();
/// f.fit(&Series::new(data).unwrap()).unwrap();
/// let pred = f.predict(&Horizon::new(vec![1, 2, 3]).unwrap()).unwrap();
/// assert_eq!(pred.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Ar1Forecaster {
    fitted: Option<Ar1Fit>,
}

#[derive(Clone, Copy, Debug)]
struct Ar1Fit {
    mean: f64,
    phi: f64,
    last: f64,
}

impl Ar1Forecaster {
    /// Creates an unfitted AR(1) forecaster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the estimated AR coefficient, if fitted.
    pub fn phi(&self) -> Option<f64> {
        self.fitted.map(|f| f.phi)
    }

    /// Returns the estimated process mean, if fitted.
    pub fn mean(&self) -> Option<f64> {
        self.fitted.map(|f| f.mean)
    }
}

impl Forecaster for Ar1Forecaster {
    fn fit(&mut self, series: &Series) -> Result<(), ForecastError> {
        let data = series.as_slice();
        let n = data.len();
        if n < MIN_OBSERVATIONS {
            return Err(ForecastError::InsufficientData {
                n,
                min: MIN_OBSERVATIONS,
            });
        }
        let mean = data.iter().sum::<f64>() / n as f64;
        let denom: f64 = data.iter().map(|&x| (x - mean) * (x - mean)).sum();
        if denom < 1e-12 {
            return Err(ForecastError::ConstantData);
        }
        let numer: f64 = data
            .windows(2)
            .map(|w| (w[1] - mean) * (w[0] - mean))
            .sum();
        let phi = numer / denom;
        self.fitted = Some(Ar1Fit {
            mean,
            phi,
            last: data[n - 1],
        });
        Ok(())
    }

    fn predict(&self, horizon: &Horizon) -> Result<Vec<f64>, ForecastError> {
        let fit = self.fitted.ok_or(ForecastError::NotFitted)?;
        Ok(horizon
            .offsets()
            .iter()
            .map(|&h| fit.mean + fit.phi.powi(h as i32) * (fit.last - fit.mean))
            .collect())
    }
}
