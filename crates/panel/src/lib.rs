//! # kronos-panel
//!
//! Data model and format adaptation for panel time-series.
//!
//! A *panel* is an ordered collection of instances, each holding one or
//! more variables, each variable an ordered sequence of observations.
//! Panels can be carried in several concrete layouts ("mtypes"); this
//! crate owns the containers, the conversion table between them, and the
//! validator that produces shape metadata.
//!
//! ## Representation Tags
//!
//! | Tag | Container | Ragged support |
//! |-----|-----------|----------------|
//! | [`Mtype::Nested`] | [`Panel`] (series per cell) | yes |
//! | [`Mtype::Dense3d`] | [`DensePanel`] (instances × variables × time) | no |
//! | [`Mtype::Flat`] | [`FlatPanel`] (instances × variables·time) | no |
//! | [`Mtype::Long`] | [`LongTable`] (row-indexed records) | yes |
//!
//! ## Quick Start
//!
//! ```
//! use kronos_panel::{Mtype, Panel, PanelValue, Series, check_is_mtype, convert};
//!
//! # fn main() -> Result<(), kronos_panel::PanelError> {
//! let panel = Panel::from_series(vec![
//!     Series::new(vec![1.0, 2.0, 3.0])?,
//!     Series::new(vec![4.0, 5.0, 6.0])?,
//! ])?;
//! let value = PanelValue::Nested(panel);
//! let dense = convert(&value, Mtype::Dense3d)?;
//! let meta = check_is_mtype(&dense, Mtype::Dense3d)?;
//! assert_eq!(meta.n_instances(), 2);
//! assert!(meta.is_equal_length());
//! # Ok(())
//! # }
//! ```

mod convert;
mod error;
mod metadata;
mod mtype;
mod panel;
mod series;
mod value;

pub use convert::convert;
pub use error::PanelError;
pub use metadata::{PanelMetadata, check_is_mtype};
pub use mtype::Mtype;
pub use panel::Panel;
pub use series::Series;
pub use value::{DensePanel, FlatPanel, LongRow, LongTable, PanelValue};
