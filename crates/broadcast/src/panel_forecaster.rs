//! Panel wrapper for single-series forecasters.

use tracing::debug;

use kronos_forecast::{Forecaster, Horizon, InputShape};
use kronos_panel::{
    Mtype, Panel, PanelError, PanelMetadata, PanelValue, Series, check_is_mtype, convert,
};

use crate::apply::{broadcast_apply, requires_broadcast};
use crate::error::BroadcastError;

/// An unfitted panel wrapper around a single-series forecaster template.
///
/// Entry point of the typestate workflow: create with a template
/// forecaster, then call [`PanelForecaster::fit()`] to obtain a
/// [`FittedPanelForecaster`]. The template is cloned once per
/// (instance, variable) cell; every clone sees only its own series.
///
/// # Example
///
/// ```
/// use kronos_broadcast::PanelForecaster;
/// use kronos_forecast::{Horizon, NaiveForecaster};
/// use kronos_panel::{Panel, PanelValue, Series};
///
/// # fn main() -> Result<(), kronos_broadcast::BroadcastError> {
/// let y = PanelValue::Nested(Panel::from_series(vec![
///     Series::new(vec![1.0, 2.0, 3.0]).unwrap(),
///     Series::new(vec![4.0, 5.0, 6.0]).unwrap(),
/// ]).unwrap());
///
/// let forecast = PanelForecaster::new(NaiveForecaster::new())
///     .fit(&y)?
///     .predict(&Horizon::new(vec![1, 2]).unwrap())?;
/// assert_eq!(forecast.metadata().n_instances(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PanelForecaster<F> {
    template: F,
}

impl<F> PanelForecaster<F>
where
    F: Forecaster + Clone + Send + Sync,
{
    /// Creates a panel forecaster from a series-only template.
    pub fn new(template: F) -> Self {
        Self { template }
    }

    /// Fits one clone of the template per (instance, variable) cell.
    ///
    /// The input may arrive in any representation; it is normalized to
    /// the nested layout for fan-out, and the original tag is recorded
    /// so predictions are returned in the caller's representation.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`BroadcastError::PanelNativeEstimator`] | template declares `InputShape::Panel` |
    /// | [`BroadcastError::InstanceFailed`] | any per-cell fit fails (fail-fast) |
    /// | [`BroadcastError::Panel`] | input violates its representation's constraints |
    pub fn fit(&self, y: &PanelValue) -> Result<FittedPanelForecaster<F>, BroadcastError> {
        if self.template.input_shape() == InputShape::Panel {
            return Err(BroadcastError::PanelNativeEstimator);
        }
        let mtype = y.mtype();
        let metadata = check_is_mtype(y, mtype)?;
        let PanelValue::Nested(panel) = convert(y, Mtype::Nested)? else {
            return Err(PanelError::WrongMtype {
                expected: Mtype::Nested,
                found: mtype,
            }
            .into());
        };

        debug!(
            n_instances = metadata.n_instances(),
            n_variables = metadata.n_variables(),
            fan_out = requires_broadcast(self.template.input_shape(), &metadata),
            "fitting series forecaster over panel"
        );

        let fitted = broadcast_apply(&panel, |_, _, series| {
            let mut forecaster = self.template.clone();
            forecaster.fit(series)?;
            Ok(forecaster)
        })?;

        Ok(FittedPanelForecaster {
            fitted,
            mtype,
            metadata,
        })
    }
}

/// A panel forecaster whose per-cell clones have all been fitted.
#[derive(Clone, Debug)]
pub struct FittedPanelForecaster<F> {
    fitted: Vec<Vec<F>>,
    mtype: Mtype,
    metadata: PanelMetadata,
}

impl<F> FittedPanelForecaster<F>
where
    F: Forecaster + Clone + Send + Sync,
{
    /// Returns the number of fitted instances.
    pub fn n_instances(&self) -> usize {
        self.fitted.len()
    }

    /// Returns the metadata of the panel this forecaster was fitted on.
    pub fn input_metadata(&self) -> PanelMetadata {
        self.metadata
    }

    /// Predicts one horizon-shaped series per fitted cell and
    /// reassembles a panel in the input's representation.
    ///
    /// The reassembled output is re-validated: every forecast must have
    /// exactly one value per horizon offset, and the instance count
    /// must equal the fitted input's.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`BroadcastError::InstanceFailed`] | any per-cell predict fails (fail-fast) |
    /// | [`BroadcastError::HorizonMismatch`] | a forecast length differs from the horizon |
    /// | [`BroadcastError::InstanceCountMismatch`] | reassembly changed the instance count |
    pub fn predict(&self, horizon: &Horizon) -> Result<PanelForecast, BroadcastError> {
        let mut instances = Vec::with_capacity(self.fitted.len());
        for (i, row) in self.fitted.iter().enumerate() {
            let mut variables = Vec::with_capacity(row.len());
            for (v, forecaster) in row.iter().enumerate() {
                let prediction =
                    forecaster
                        .predict(horizon)
                        .map_err(|source| BroadcastError::InstanceFailed {
                            instance: i,
                            variable: v,
                            source,
                        })?;
                if prediction.len() != horizon.len() {
                    return Err(BroadcastError::HorizonMismatch {
                        instance: i,
                        expected: horizon.len(),
                        got: prediction.len(),
                    });
                }
                variables.push(Series::new(prediction)?);
            }
            instances.push(variables);
        }

        let value = convert(&PanelValue::Nested(Panel::from_instances(instances)?), self.mtype)?;
        let metadata = check_is_mtype(&value, self.mtype)?;
        if metadata.n_instances() != self.metadata.n_instances() {
            return Err(BroadcastError::InstanceCountMismatch {
                expected: self.metadata.n_instances(),
                got: metadata.n_instances(),
            });
        }
        Ok(PanelForecast { value, metadata })
    }
}

/// A panel-shaped forecast together with its verified shape metadata.
///
/// Horizon forecasts are equal-length by construction, so
/// `metadata().is_equal_length()` is always `true` here.
#[derive(Clone, Debug)]
pub struct PanelForecast {
    value: PanelValue,
    metadata: PanelMetadata,
}

impl PanelForecast {
    /// Returns the forecast panel, in the representation the training
    /// panel arrived in.
    pub fn value(&self) -> &PanelValue {
        &self.value
    }

    /// Returns the verified shape metadata.
    pub fn metadata(&self) -> PanelMetadata {
        self.metadata
    }

    /// Consumes the forecast and returns the panel value.
    pub fn into_value(self) -> PanelValue {
        self.value
    }
}
