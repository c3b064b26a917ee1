//! # kronos-forecast
//!
//! The single-series forecaster contract consumed by the vectorization
//! broadcaster, plus small reference forecasters.
//!
//! ## Capability Contract
//!
//! Every forecaster declares its input and output shape tags; the
//! broadcaster inspects these at dispatch time to decide whether a
//! panel must be fanned out into per-instance series.
//!
//! ```mermaid
//! graph LR
//!     A["Forecaster::fit(&Series)"] --> B["fitted state"]
//!     B -->|"predict(&Horizon)"| C["Vec&lt;f64&gt; (one value per offset)"]
//! ```
//!
//! ## Reference Forecasters
//!
//! | Type | Prediction |
//! |------|------------|
//! | [`NaiveForecaster`] | repeats the last observed value |
//! | [`MeanForecaster`] | repeats the in-sample mean |
//! | [`Ar1Forecaster`] | AR(1) geometric decay towards the mean |
//!
//! Full ARIMA-class models live outside this crate; anything satisfying
//! [`Forecaster`] can be broadcast over panels.

mod ar1;
mod error;
mod forecaster;
mod horizon;
mod mean;
mod naive;

pub use ar1::Ar1Forecaster;
pub use error::ForecastError;
pub use forecaster::{Forecaster, InputShape, OutputShape};
pub use horizon::Horizon;
pub use mean::MeanForecaster;
pub use naive::NaiveForecaster;
