//! Concrete panel containers, one per representation tag.

use ndarray::{Array2, Array3};

use crate::error::PanelError;
use crate::mtype::Mtype;
use crate::panel::Panel;

/// Dense 3-D panel, shaped (instances, variables, timepoints).
///
/// Every instance and variable shares the same series length; ragged
/// panels cannot be represented in this layout.
#[derive(Clone, Debug, PartialEq)]
pub struct DensePanel {
    data: Array3<f64>,
}

impl DensePanel {
    /// Creates a dense panel from a 3-D array.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`PanelError::EmptyPanel`] | zero instances |
    /// | [`PanelError::NoVariables`] | zero variables |
    /// | [`PanelError::EmptySeries`] | zero timepoints |
    /// | [`PanelError::NonFiniteData`] | any element is NaN or infinite |
    pub fn new(data: Array3<f64>) -> Result<Self, PanelError> {
        let (n, v, t) = data.dim();
        if n == 0 {
            return Err(PanelError::EmptyPanel);
        }
        if v == 0 {
            return Err(PanelError::NoVariables);
        }
        if t == 0 {
            return Err(PanelError::EmptySeries);
        }
        if !data.iter().all(|x| x.is_finite()) {
            return Err(PanelError::NonFiniteData);
        }
        Ok(Self { data })
    }

    /// Returns the underlying array.
    pub fn as_array(&self) -> &Array3<f64> {
        &self.data
    }

    /// Returns (n_instances, n_variables, n_timepoints).
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Returns the number of instances.
    pub fn n_instances(&self) -> usize {
        self.data.dim().0
    }

    /// Returns the number of variables.
    pub fn n_variables(&self) -> usize {
        self.data.dim().1
    }
}

/// Flattened 2-D panel, shaped (instances, variables · timepoints).
///
/// Each row lays one instance out contiguously, variable blocks in order.
/// This is the layout series-native numeric engines consume.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatPanel {
    data: Array2<f64>,
    n_variables: usize,
}

impl FlatPanel {
    /// Creates a flat panel from a 2-D array and the variable count
    /// needed to undo the flattening.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`PanelError::EmptyPanel`] | zero rows |
    /// | [`PanelError::NoVariables`] | `n_variables == 0` |
    /// | [`PanelError::EmptySeries`] | zero columns |
    /// | [`PanelError::MalformedFlatPanel`] | columns not divisible by `n_variables` |
    /// | [`PanelError::NonFiniteData`] | any element is NaN or infinite |
    pub fn new(data: Array2<f64>, n_variables: usize) -> Result<Self, PanelError> {
        let (n, cols) = data.dim();
        if n == 0 {
            return Err(PanelError::EmptyPanel);
        }
        if n_variables == 0 {
            return Err(PanelError::NoVariables);
        }
        if cols == 0 {
            return Err(PanelError::EmptySeries);
        }
        if cols % n_variables != 0 {
            return Err(PanelError::MalformedFlatPanel {
                reason: format!("{cols} columns not divisible by {n_variables} variables"),
            });
        }
        if !data.iter().all(|x| x.is_finite()) {
            return Err(PanelError::NonFiniteData);
        }
        Ok(Self { data, n_variables })
    }

    /// Returns the underlying array.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Returns the number of instances.
    pub fn n_instances(&self) -> usize {
        self.data.dim().0
    }

    /// Returns the number of variables encoded per row.
    pub fn n_variables(&self) -> usize {
        self.n_variables
    }

    /// Returns the series length per variable.
    pub fn n_timepoints(&self) -> usize {
        self.data.dim().1 / self.n_variables
    }

    /// Returns the contiguous row for instance `i`, all variables concatenated.
    pub fn row(&self, i: usize) -> Vec<f64> {
        self.data.row(i).to_vec()
    }
}

/// One observation in a long-format table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongRow {
    /// Instance index.
    pub instance: usize,
    /// Variable index within the instance.
    pub variable: usize,
    /// Time offset within the variable.
    pub time: usize,
    /// Observed value.
    pub value: f64,
}

/// Row-indexed long table: one record per (instance, variable, time).
///
/// The only constraint at construction is finite values; structural
/// validation (contiguous indices, dense time axes) happens when the
/// table is assembled into a nested panel.
#[derive(Clone, Debug, PartialEq)]
pub struct LongTable {
    rows: Vec<LongRow>,
}

impl LongTable {
    /// Creates a long table from rows.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`PanelError::EmptyPanel`] | `rows` is empty |
    /// | [`PanelError::NonFiniteData`] | any value is NaN or infinite |
    pub fn new(rows: Vec<LongRow>) -> Result<Self, PanelError> {
        if rows.is_empty() {
            return Err(PanelError::EmptyPanel);
        }
        if !rows.iter().all(|r| r.value.is_finite()) {
            return Err(PanelError::NonFiniteData);
        }
        Ok(Self { rows })
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[LongRow] {
        &self.rows
    }

    /// Returns the number of records.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }
}

/// A panel value together with its representation tag.
///
/// This is the unit the converter and the validator operate on: callers
/// hand panels around as `PanelValue` and declare the layout they expect
/// via [`Mtype`].
#[derive(Clone, Debug, PartialEq)]
pub enum PanelValue {
    /// Nested series-per-cell panel.
    Nested(Panel),
    /// Dense 3-D panel.
    Dense(DensePanel),
    /// Flattened 2-D panel.
    Flat(FlatPanel),
    /// Row-indexed long table.
    Long(LongTable),
}

impl PanelValue {
    /// Returns the representation tag this value carries.
    pub fn mtype(&self) -> Mtype {
        match self {
            PanelValue::Nested(_) => Mtype::Nested,
            PanelValue::Dense(_) => Mtype::Dense3d,
            PanelValue::Flat(_) => Mtype::Flat,
            PanelValue::Long(_) => Mtype::Long,
        }
    }
}
