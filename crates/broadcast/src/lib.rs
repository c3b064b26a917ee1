//! # kronos-broadcast
//!
//! Vectorization of single-series forecasters over panels.
//!
//! A forecaster whose native logic only understands one series is fanned
//! out independently over every (instance, variable) cell of a panel;
//! results are reassembled into a panel-shaped output whose metadata is
//! verified against the input (instance count preserved, horizon-length
//! forecasts, equal length).
//!
//! ## Typestate Workflow
//!
//! ```mermaid
//! graph LR
//!     A["PanelForecaster::new(template)"] -->|".fit(&panel)?"| B["FittedPanelForecaster"]
//!     B -->|".predict(&horizon)?"| C["PanelForecast"]
//!     C --> D[".value() — panel in the input mtype"]
//!     C --> E[".metadata() — verified shape descriptor"]
//! ```
//!
//! ## Failure Policy
//!
//! Fail-fast: if any per-cell invocation fails, the whole operation
//! fails with the first (lowest-indexed) failing cell identified; no
//! partial-panel results are ever returned.

mod apply;
mod error;
mod panel_forecaster;

pub use apply::{broadcast_apply, requires_broadcast};
pub use error::BroadcastError;
pub use panel_forecaster::{FittedPanelForecaster, PanelForecast, PanelForecaster};
