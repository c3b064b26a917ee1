//! # kronos-dwt
//!
//! Recursive Haar discrete wavelet transform (DWT) feature extraction
//! for time-series panels.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["PanelValue"] -->|"normalize"| B["per-instance rows"]
//!     B -->|"haar recursion × num_levels"| C["coefficient vectors"]
//!     C -->|"reassemble"| D["PanelValue (univariate)"]
//! ```
//!
//! ## Coefficient Order
//!
//! For `num_levels = L` the stored coefficient vector is
//! `[approx_L, detail_L, detail_{L-1}, ..., detail_1]`: the coarsest
//! approximation first, then detail levels from coarsest to finest.
//!
//! ## Quick Start
//!
//! ```
//! use kronos_dwt::{DwtConfig, dwt};
//! use kronos_panel::{Panel, PanelValue, Series};
//!
//! # fn main() -> Result<(), kronos_dwt::DwtError> {
//! let panel = Panel::from_series(vec![
//!     Series::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap(),
//! ]).unwrap();
//! let config = DwtConfig::new(2);
//! let coeffs = dwt(&PanelValue::Nested(panel), &config)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod haar;
mod transform;

pub use config::DwtConfig;
pub use error::DwtError;
pub use haar::{approx_coefficients, detail_coefficients};
pub use transform::{dwt, dwt_series};
