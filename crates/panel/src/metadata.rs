//! Shape metadata and the representation validator.

use crate::convert::convert;
use crate::error::PanelError;
use crate::mtype::Mtype;
use crate::value::PanelValue;

/// Shape metadata describing a panel value.
///
/// Produced by [`check_is_mtype`] and used post-hoc to verify that a
/// panel-producing operation (format conversion, broadcast reassembly)
/// preserved instance count and length-equality semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelMetadata {
    n_instances: usize,
    n_variables: usize,
    is_equal_length: bool,
    mtype: Mtype,
}

impl PanelMetadata {
    /// Creates a new descriptor (crate-internal constructor).
    pub(crate) fn new(
        n_instances: usize,
        n_variables: usize,
        is_equal_length: bool,
        mtype: Mtype,
    ) -> Self {
        Self {
            n_instances,
            n_variables,
            is_equal_length,
            mtype,
        }
    }

    /// Returns the number of instances.
    pub fn n_instances(&self) -> usize {
        self.n_instances
    }

    /// Returns the number of variables per instance.
    pub fn n_variables(&self) -> usize {
        self.n_variables
    }

    /// Returns `true` if every variable has identical length across instances.
    pub fn is_equal_length(&self) -> bool {
        self.is_equal_length
    }

    /// Returns the representation tag of the described value.
    pub fn mtype(&self) -> Mtype {
        self.mtype
    }
}

/// Validates that a value carries the declared representation tag and
/// returns its shape metadata.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`PanelError::WrongMtype`] | value's tag differs from `expected` |
/// | [`PanelError::MalformedLongTable`] | long table cannot be assembled |
pub fn check_is_mtype(value: &PanelValue, expected: Mtype) -> Result<PanelMetadata, PanelError> {
    let found = value.mtype();
    if found != expected {
        return Err(PanelError::WrongMtype { expected, found });
    }
    let (n_instances, n_variables, is_equal_length) = match value {
        PanelValue::Nested(panel) => {
            (panel.n_instances(), panel.n_variables(), panel.is_equal_length())
        }
        // Dense layouts are equal-length by construction
        PanelValue::Dense(dense) => (dense.n_instances(), dense.n_variables(), true),
        PanelValue::Flat(flat) => (flat.n_instances(), flat.n_variables(), true),
        PanelValue::Long(_) => {
            // Structural validation happens during assembly
            let nested = convert(value, Mtype::Nested)?;
            let PanelValue::Nested(panel) = nested else {
                return Err(PanelError::WrongMtype {
                    expected: Mtype::Nested,
                    found: nested.mtype(),
                });
            };
            (panel.n_instances(), panel.n_variables(), panel.is_equal_length())
        }
    };
    Ok(PanelMetadata::new(
        n_instances,
        n_variables,
        is_equal_length,
        expected,
    ))
}
