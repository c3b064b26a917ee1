//! The forecaster capability contract.

use kronos_panel::Series;

use crate::error::ForecastError;
use crate::horizon::Horizon;

/// Declared input shape an estimator natively supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputShape {
    /// A single time series.
    Series,
    /// A collection of instances; no fan-out required.
    Panel,
}

/// Declared output shape an estimator produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputShape {
    /// Scalar summaries (one value per instance).
    Primitives,
    /// A single series (or horizon-shaped sequence).
    Series,
    /// A panel.
    Panel,
}

/// A forecaster over a single time series.
///
/// This is the narrow interface the vectorization broadcaster consumes:
/// a fit operation, a horizon-shaped predict operation, and declared
/// shape tags inspected at dispatch time. `predict` MUST return exactly
/// one value per horizon offset.
pub trait Forecaster {
    /// The input shape this forecaster natively supports.
    fn input_shape(&self) -> InputShape {
        InputShape::Series
    }

    /// The output shape this forecaster produces.
    fn output_shape(&self) -> OutputShape {
        OutputShape::Series
    }

    /// Fits the forecaster to a training series.
    ///
    /// # Errors
    ///
    /// Implementations surface their validation failures eagerly; a
    /// forecaster that failed to fit stays unfitted.
    fn fit(&mut self, series: &Series) -> Result<(), ForecastError>;

    /// Predicts one value per horizon offset.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::NotFitted`] if called before a
    /// successful [`fit`](Forecaster::fit).
    fn predict(&self, horizon: &Horizon) -> Result<Vec<f64>, ForecastError>;
}
