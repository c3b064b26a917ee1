//! Representation tags for panel layouts.

use std::fmt;
use std::str::FromStr;

use crate::error::PanelError;

/// A named data-layout contract for panel values.
///
/// The tag set is closed; the conversion table in [`crate::convert`] is
/// exhaustive over every (source, destination) pair, which the compiler
/// checks statically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mtype {
    /// Nested series-per-cell layout ([`crate::Panel`]); supports ragged data.
    Nested,
    /// Dense 3-D array, instances × variables × timepoints ([`crate::DensePanel`]).
    Dense3d,
    /// Flattened 2-D array, instances × (variables · timepoints) ([`crate::FlatPanel`]).
    Flat,
    /// Row-indexed long table ([`crate::LongTable`]); supports ragged data.
    Long,
}

impl Mtype {
    /// All representation tags, in canonical order.
    pub const ALL: [Mtype; 4] = [Mtype::Nested, Mtype::Dense3d, Mtype::Flat, Mtype::Long];

    /// Returns the canonical tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mtype::Nested => "nested",
            Mtype::Dense3d => "dense3d",
            Mtype::Flat => "flat",
            Mtype::Long => "long",
        }
    }

    /// Returns `true` if this layout can represent unequal-length panels.
    pub fn supports_ragged(&self) -> bool {
        matches!(self, Mtype::Nested | Mtype::Long)
    }
}

impl fmt::Display for Mtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mtype {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nested" => Ok(Mtype::Nested),
            "dense3d" => Ok(Mtype::Dense3d),
            "flat" => Ok(Mtype::Flat),
            "long" => Ok(Mtype::Long),
            other => Err(PanelError::UnknownMtype(other.to_string())),
        }
    }
}
